use leptos::prelude::*;

use crate::content::{STATS, StatEntry};
use crate::icons::{ICON_CLOCK, ICON_TARGET, ICON_TROPHY, Icon};

/// Company rationale: three capability highlights, the 2x2 stats grid, and
/// the mission statement. Stats render in declaration order.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="about-grid">
                    <div>
                        <h2 class="section-title">"Why Choose TechConsult Pro?"</h2>
                        <p class="about-intro">
                            "With over 15 years of experience in IT consulting, we've helped hundreds of businesses "
                            "transform their technology infrastructure and achieve their digital goals."
                        </p>
                        <Highlight
                            icon=ICON_TROPHY
                            title="Certified Experts"
                            text="Our team consists of certified professionals with expertise in cloud platforms, cybersecurity, and modern development practices."
                        />
                        <Highlight
                            icon=ICON_TARGET
                            title="Proven Results"
                            text="We've successfully delivered complex projects across various industries, from startups to Fortune 500 companies."
                        />
                        <Highlight
                            icon=ICON_CLOCK
                            title="24/7 Support"
                            text="Our dedicated support team is available around the clock to ensure your systems run smoothly and efficiently."
                        />
                    </div>
                    <div>
                        <div class="stats-grid">
                            {STATS.iter().copied().map(|stat| view! { <StatCard stat=stat /> }).collect::<Vec<_>>()}
                        </div>
                        <div class="mission-card">
                            <h3>"Our Mission"</h3>
                            <p>
                                "To empower businesses with innovative technology solutions that drive growth, "
                                "enhance security, and create competitive advantages in the digital marketplace. "
                                "We believe technology should be an enabler, not a barrier."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Highlight(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="highlight-item">
            <div class="highlight-icon">
                <Icon path=icon size="24" />
            </div>
            <div>
                <h3>{title}</h3>
                <p>{text}</p>
            </div>
        </div>
    }
}

#[component]
fn StatCard(stat: StatEntry) -> impl IntoView {
    view! {
        <div class="stat-card">
            <Icon path=stat.icon size="24" />
            <div class="stat-number">{stat.number}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}
