use leptos::prelude::*;

use crate::content::{SERVICES, ServiceEntry};
use crate::icons::Icon;

/// Responsive grid of the six service cards, in declaration order, followed
/// by a trailing call-to-action.
#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our Services"</h2>
                    <p class="section-description">
                        "Comprehensive IT consulting services designed to accelerate your digital transformation "
                        "and drive business success."
                    </p>
                </div>
                <div class="services-grid">
                    {SERVICES.iter().copied().map(|entry| view! { <ServiceCard entry=entry /> }).collect::<Vec<_>>()}
                </div>
                <div class="services-cta">
                    <button class="btn btn-primary">
                        "View All Services"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(entry: ServiceEntry) -> impl IntoView {
    view! {
        <article class="service-card">
            <div class="service-icon">
                <Icon path=entry.icon size="32" />
            </div>
            <h3 class="service-title">{entry.title}</h3>
            <p class="service-description">{entry.description}</p>
            <ul class="feature-list">
                {entry
                    .features
                    .iter()
                    .map(|feature| view! { <li class="feature-item">{*feature}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
