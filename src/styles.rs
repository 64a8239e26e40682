//! CSS for the rendered page.
//!
//! The whole stylesheet is one constant embedded into the document `<head>`,
//! so the generated HTML is a single self-contained file with no external
//! assets. Class names are semantic (`.hero-title`, `.stat-card`) rather
//! than utility tokens; the section components are the only consumers.

/// Complete stylesheet - light theme, blue primary accent.
///
/// Covers:
/// - Base typography and the page container
/// - Hero split layout with the consultation preview card
/// - About layout: capability highlights, 2x2 stats grid, mission card
/// - Responsive 3-column services grid
/// - Dark footer with link columns, contact rows, and the legal bar
pub const SITE_CSS: &str = r#"
:root {
    --primary-50: #eff6ff;
    --primary-100: #dbeafe;
    --primary-400: #60a5fa;
    --primary-600: #2563eb;
    --primary-700: #1d4ed8;
    --green-500: #22c55e;
    --gray-50: #f9fafb;
    --gray-200: #e5e7eb;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --font-sans: 'Inter', 'Segoe UI', system-ui, -apple-system, sans-serif;
    --container-max: 1152px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: #ffffff;
    color: var(--gray-900);
    line-height: 1.6;
    margin: 0;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 64px 24px;
}

h1, h2, h3, h4 {
    margin: 0;
    line-height: 1.2;
}

/* Hero */

.hero {
    background: linear-gradient(135deg, var(--primary-50), #ffffff);
    padding-top: 80px;
}

.hero-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 48px;
    align-items: center;
}

.hero-title {
    font-size: 2.5rem;
    font-weight: 700;
}

.hero-title-accent {
    color: var(--primary-600);
}

.hero-description {
    font-size: 1.25rem;
    color: var(--gray-600);
    margin: 24px 0;
}

.hero-checklist {
    display: flex;
    flex-direction: column;
    gap: 16px;
    margin-bottom: 32px;
}

.check-item {
    display: flex;
    align-items: center;
    gap: 12px;
    color: var(--gray-700);
}

.check-item svg {
    color: var(--green-500);
    flex-shrink: 0;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 12px 24px;
    border-radius: 8px;
    border: none;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
}

.btn-primary {
    background: var(--primary-600);
    color: #ffffff;
}

.btn-primary:hover {
    background: var(--primary-700);
}

.btn-secondary {
    background: #ffffff;
    color: var(--primary-600);
    border: 2px solid var(--primary-600);
}

.btn-block {
    width: 100%;
}

.consult-card {
    background: #ffffff;
    border-radius: 16px;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    padding: 32px;
}

.consult-card-header {
    text-align: center;
    margin-bottom: 24px;
}

.consult-card-header h3 {
    font-size: 1.5rem;
}

.consult-card-header p {
    color: var(--gray-600);
    margin: 8px 0 0;
}

.consult-option {
    background: var(--primary-50);
    border-radius: 8px;
    padding: 16px;
    margin-bottom: 16px;
}

.consult-option h4 {
    font-size: 1rem;
}

.consult-option p {
    font-size: 0.875rem;
    color: var(--gray-600);
    margin: 4px 0 0;
}

/* Section headers */

.section-header {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin-bottom: 16px;
}

.section-description {
    font-size: 1.25rem;
    color: var(--gray-600);
    max-width: 768px;
    margin: 0 auto;
}

/* About */

.about {
    background: var(--gray-50);
}

.about-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 48px;
    align-items: center;
}

.about-intro {
    font-size: 1.25rem;
    color: var(--gray-600);
    margin: 16px 0 32px;
}

.highlight-item {
    display: flex;
    align-items: flex-start;
    gap: 16px;
    margin-bottom: 24px;
}

.highlight-icon {
    background: var(--primary-100);
    color: var(--primary-600);
    border-radius: 8px;
    padding: 8px;
    display: flex;
    flex-shrink: 0;
}

.highlight-item h3 {
    font-size: 1.125rem;
    margin-bottom: 8px;
}

.highlight-item p {
    color: var(--gray-600);
    margin: 0;
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 24px;
    margin-bottom: 32px;
}

.stat-card {
    background: #ffffff;
    border-radius: 12px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    padding: 24px;
    text-align: center;
    color: var(--primary-600);
}

.stat-number {
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--gray-900);
    margin-top: 12px;
}

.stat-label {
    color: var(--gray-600);
}

.mission-card {
    background: #ffffff;
    border-radius: 12px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    padding: 24px;
}

.mission-card h3 {
    font-size: 1.25rem;
    margin-bottom: 16px;
}

.mission-card p {
    color: var(--gray-600);
    margin: 0;
}

/* Services */

.services-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

.service-card {
    background: #ffffff;
    border: 1px solid var(--gray-200);
    border-radius: 12px;
    padding: 24px;
    transition: box-shadow 0.3s;
}

.service-card:hover {
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.service-icon {
    color: var(--primary-600);
    margin-bottom: 16px;
}

.service-title {
    font-size: 1.25rem;
    margin-bottom: 12px;
}

.service-description {
    color: var(--gray-600);
    margin: 0 0 16px;
}

.feature-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.feature-item {
    display: flex;
    align-items: center;
    font-size: 0.875rem;
    color: var(--gray-600);
    margin-bottom: 8px;
}

.feature-item::before {
    content: "";
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--primary-600);
    margin-right: 12px;
    flex-shrink: 0;
}

.services-cta {
    text-align: center;
    margin-top: 48px;
}

/* Footer */

.site-footer {
    background: var(--gray-900);
    color: #ffffff;
}

.footer-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

.footer-brand-name {
    font-size: 1.5rem;
    color: var(--primary-400);
    margin-bottom: 16px;
}

.footer-blurb {
    color: var(--gray-300);
    margin: 0 0 16px;
}

.social-links {
    display: flex;
    gap: 16px;
}

.social-links a {
    color: var(--gray-400);
}

.social-links a:hover {
    color: var(--primary-400);
}

.footer-heading {
    font-size: 1.125rem;
    margin-bottom: 16px;
}

.footer-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.footer-list li {
    margin-bottom: 8px;
}

.footer-link {
    color: var(--gray-300);
    text-decoration: none;
    transition: color 0.2s;
}

.footer-link:hover {
    color: var(--primary-400);
}

.contact-item {
    display: flex;
    align-items: flex-start;
    gap: 12px;
    color: var(--gray-300);
    margin-bottom: 12px;
}

.contact-item svg {
    color: var(--primary-400);
    flex-shrink: 0;
    margin-top: 2px;
}

.legal-bar {
    border-top: 1px solid var(--gray-800);
    margin-top: 48px;
    padding-top: 32px;
    display: flex;
    flex-direction: column;
    gap: 16px;
    align-items: center;
}

.legal-copyright {
    color: var(--gray-400);
    font-size: 0.875rem;
    margin: 0;
}

.legal-links {
    display: flex;
    gap: 24px;
}

.legal-links .footer-link {
    color: var(--gray-400);
    font-size: 0.875rem;
}

/* Responsive */

@media (min-width: 768px) {
    .hero-title {
        font-size: 3.5rem;
    }

    .services-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .footer-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .legal-bar {
        flex-direction: row;
        justify-content: space-between;
    }
}

@media (min-width: 1024px) {
    .hero-grid,
    .about-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .services-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .footer-grid {
        grid-template-columns: repeat(4, 1fr);
    }
}
"#;
