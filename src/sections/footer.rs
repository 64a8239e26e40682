use leptos::prelude::*;

use crate::content::{
    COMPANY_BLURB, COMPANY_NAME, CONTACTS, COPYRIGHT, ContactKind, FOOTER_COMPANY,
    FOOTER_SERVICES, LEGAL_LINKS, NavLink,
};
use crate::icons::{
    ICON_ENVELOPE, ICON_GITHUB_LOGO, ICON_LINKEDIN_LOGO, ICON_MAP_PIN, ICON_PHONE,
    ICON_TWITTER_LOGO, Icon,
};

/// Footer: brand block with social links, two link columns, the contact
/// block, and the legal bar. All text is literal; the copyright year is not
/// clock-derived.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand-name">{COMPANY_NAME}</h3>
                        <p class="footer-blurb">{COMPANY_BLURB}</p>
                        <div class="social-links">
                            <a href="#" aria-label="LinkedIn">
                                <Icon path=ICON_LINKEDIN_LOGO size="24" />
                            </a>
                            <a href="#" aria-label="Twitter">
                                <Icon path=ICON_TWITTER_LOGO size="24" />
                            </a>
                            <a href="#" aria-label="GitHub">
                                <Icon path=ICON_GITHUB_LOGO size="24" />
                            </a>
                        </div>
                    </div>
                    <LinkColumn heading="Services" links=FOOTER_SERVICES.as_slice() />
                    <LinkColumn heading="Company" links=FOOTER_COMPANY.as_slice() />
                    <div>
                        <h4 class="footer-heading">"Contact"</h4>
                        {CONTACTS
                            .iter()
                            .copied()
                            .map(|contact| {
                                let glyph = match contact.kind {
                                    ContactKind::Email => ICON_ENVELOPE,
                                    ContactKind::Phone => ICON_PHONE,
                                    ContactKind::Address => ICON_MAP_PIN,
                                };
                                view! {
                                    <div class="contact-item">
                                        <Icon path=glyph size="20" />
                                        <span>{contact.value}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="legal-bar">
                    <p class="legal-copyright">{COPYRIGHT}</p>
                    <div class="legal-links">
                        {LEGAL_LINKS
                            .iter()
                            .copied()
                            .map(|link| view! { <a href=link.target class="footer-link">{link.label}</a> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(heading: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <div>
            <h4 class="footer-heading">{heading}</h4>
            <ul class="footer-list">
                {links
                    .iter()
                    .copied()
                    .map(|link| view! { <li><a href=link.target class="footer-link">{link.label}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
