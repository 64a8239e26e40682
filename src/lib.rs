//! # techconsult-landing
//!
//! Leptos SSR renderer for the TechConsult Pro single-page marketing site.
//!
//! The page is four stateless sections composed in fixed order (hero, about,
//! services, footer), driven entirely by compile-time content tables. There
//! is no reactive runtime and no hydration: [`render_page`] produces the
//! complete HTML document as a string, and the bundled binary writes it to
//! disk.
//!
//! ## Quick start
//!
//! ```rust
//! let html = techconsult_landing::render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - the literal content records (services, stats, contacts, links)
//! - [`sections`] - one Leptos component per page section
//! - [`icons`] - inline SVG glyph provider
//! - [`styles`] - the embedded stylesheet

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod content;
pub mod icons;
mod page;
pub mod sections;
pub mod styles;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use page::Page;

/// Render the complete page to an HTML string.
///
/// Deterministic: no clock, randomness, or environment is consulted, so
/// repeated calls return identical output. This is the only public entry
/// point; it cannot fail.
pub fn render_page() -> String {
    let doc = view! { <Page /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CONTACTS, SERVICES, STATS};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_deterministically() {
        assert_eq!(render_page(), render_page());
    }

    #[test]
    fn renders_document_shell() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("TechConsult Pro"));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn sections_compose_in_fixed_order() {
        let html = render_page();

        let hero = html.find("id=\"home\"").expect("hero anchor");
        let about = html.find("id=\"about\"").expect("about anchor");
        let services = html.find("id=\"services\"").expect("services anchor");
        let footer = html.find("<footer").expect("footer element");

        assert!(hero < about, "hero must precede about");
        assert!(about < services, "about must precede services");
        assert!(services < footer, "services must precede footer");
    }

    #[test]
    fn services_render_in_declared_order() {
        let html = render_page();
        let section_start = html.find("id=\"services\"").expect("services section");

        let mut cursor = section_start;
        for entry in SERVICES.iter() {
            let at = html[cursor..]
                .find(entry.title)
                .map(|i| i + cursor)
                .unwrap_or_else(|| panic!("missing service title: {}", entry.title));
            cursor = at;
        }
    }

    #[test]
    fn service_cards_carry_descriptions_and_features() {
        let html = render_page();

        for entry in SERVICES.iter() {
            for feature in entry.features {
                assert!(html.contains(feature), "missing feature: {feature}");
            }
        }
        assert!(html.contains("Multi-Cloud Strategy"));
        assert!(html.contains("Disaster Recovery"));
    }

    #[test]
    fn stats_render_in_declared_order() {
        let html = render_page();
        let section_start = html.find("id=\"about\"").expect("about section");

        let mut cursor = section_start;
        for entry in STATS.iter() {
            let number_at = html[cursor..]
                .find(entry.number)
                .map(|i| i + cursor)
                .unwrap_or_else(|| panic!("missing stat number: {}", entry.number));
            let label_at = html[number_at..]
                .find(entry.label)
                .map(|i| i + number_at)
                .unwrap_or_else(|| panic!("missing stat label: {}", entry.label));
            cursor = label_at;
        }
    }

    #[test]
    fn footer_contact_literals_appear_once() {
        let html = render_page();

        for contact in CONTACTS.iter() {
            assert_eq!(
                html.matches(contact.value).count(),
                1,
                "contact value should appear exactly once: {}",
                contact.value
            );
        }
    }

    #[test]
    fn footer_legal_bar_is_literal() {
        let html = render_page();

        assert!(html.contains("© 2024 TechConsult Pro. All rights reserved."));
        assert!(html.contains("Privacy Policy"));
        assert!(html.contains("Terms of Service"));
        assert!(html.contains("Cookie Policy"));
    }

    #[test]
    fn stylesheet_is_embedded() {
        let html = render_page();
        assert!(html.contains("--primary-600"));
        assert!(html.contains(".services-grid"));
    }
}
