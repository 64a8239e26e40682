use leptos::prelude::*;

use crate::icons::{ICON_ARROW_RIGHT, ICON_CHECK_CIRCLE, Icon};

/// Headline value proposition, offering checklist, and the two
/// call-to-action buttons. The buttons are inert by design.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            "Transform Your Business with"
                            <span class="hero-title-accent">" Expert IT Consulting"</span>
                        </h1>
                        <p class="hero-description">
                            "We help businesses leverage cutting-edge technology to drive growth, "
                            "improve efficiency, and stay competitive in the digital age."
                        </p>
                        <div class="hero-checklist">
                            <CheckItem label="Cloud Migration & Strategy" />
                            <CheckItem label="Digital Transformation" />
                            <CheckItem label="Cybersecurity Solutions" />
                        </div>
                        <div class="hero-actions">
                            <button class="btn btn-primary">
                                <span>"Start Your Journey"</span>
                                <Icon path=ICON_ARROW_RIGHT size="20" />
                            </button>
                            <button class="btn btn-secondary">
                                "Learn More"
                            </button>
                        </div>
                    </div>
                    <ConsultCard />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CheckItem(label: &'static str) -> impl IntoView {
    view! {
        <div class="check-item">
            <Icon path=ICON_CHECK_CIRCLE size="24" />
            <span>{label}</span>
        </div>
    }
}

/// The "free consultation" preview card on the right side of the hero.
#[component]
fn ConsultCard() -> impl IntoView {
    view! {
        <div class="consult-card">
            <div class="consult-card-header">
                <h3>"Ready to Transform?"</h3>
                <p>"Get your free consultation today"</p>
            </div>
            <div class="consult-option">
                <h4>"Cloud Strategy"</h4>
                <p>"Optimize your cloud infrastructure"</p>
            </div>
            <div class="consult-option">
                <h4>"Security Audit"</h4>
                <p>"Comprehensive security assessment"</p>
            </div>
            <div class="consult-option">
                <h4>"Digital Solutions"</h4>
                <p>"Modernize your technology stack"</p>
            </div>
            <button class="btn btn-primary btn-block">
                "Schedule Free Consultation"
            </button>
        </div>
    }
}
