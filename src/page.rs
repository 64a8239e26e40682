//! Root document component - the complete HTML page.

use leptos::prelude::*;

use crate::sections::{About, Footer, Hero, Services};
use crate::styles::SITE_CSS;

/// The complete single-page document.
///
/// Section order is fixed by composition: Hero, About, Services inside
/// `<main>`, then the footer. Nothing is computed at render time.
#[component]
pub fn Page() -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"TechConsult Pro - Expert IT Consulting"</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <main>
                    <Hero />
                    <About />
                    <Services />
                </main>
                <Footer />
            </body>
        </html>
    }
}
