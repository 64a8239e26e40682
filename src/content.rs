//! Page content as compile-time constants.
//!
//! Everything the page displays lives here as `'static` records: the six
//! service cards, the four stat cards, the contact entries, and the footer
//! link lists. The section components iterate these tables in declaration
//! order and never mutate them.
//!
//! The record types derive [`serde::Serialize`] so the content model can be
//! exported as-is (the rendered page itself never serializes anything).

use serde::Serialize;

use crate::icons;

/// Company name shown in the footer brand block and legal bar.
pub const COMPANY_NAME: &str = "TechConsult Pro";

/// Footer brand blurb.
pub const COMPANY_BLURB: &str = "Your trusted partner for IT consulting and digital transformation. \
     We help businesses leverage technology for growth and success.";

/// Legal-bar copyright line. The year is a literal, not clock-derived.
pub const COPYRIGHT: &str = "© 2024 TechConsult Pro. All rights reserved.";

/// One card in the services grid.
///
/// `icon` holds SVG path data from [`crate::icons`]; the card renders it
/// through [`crate::icons::Icon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    /// Glyph path data for the card icon
    pub icon: &'static str,
    /// Short card title
    pub title: &'static str,
    /// One-paragraph description
    pub description: &'static str,
    /// Feature checklist, rendered in order
    pub features: &'static [&'static str],
}

/// One card in the 2x2 statistics grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    /// Glyph path data for the card icon
    pub icon: &'static str,
    /// Headline figure, e.g. `"500+"`
    pub number: &'static str,
    /// Caption under the figure
    pub label: &'static str,
}

/// Which footer contact row an entry renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// Email address row
    Email,
    /// Phone number row
    Phone,
    /// Street address row
    Address,
}

/// One row in the footer contact block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactEntry {
    /// Row kind, selects the glyph
    pub kind: ContactKind,
    /// Literal display text
    pub value: &'static str,
}

/// A footer link: display label plus anchor target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link text
    pub label: &'static str,
    /// `href` value
    pub target: &'static str,
}

impl NavLink {
    /// Placeholder link with an inert `#` target.
    const fn inert(label: &'static str) -> Self {
        Self { label, target: "#" }
    }
}

/// The services grid, in display order.
pub static SERVICES: [ServiceEntry; 6] = [
    ServiceEntry {
        icon: icons::ICON_CLOUD,
        title: "Cloud Solutions",
        description: "Migrate to the cloud with confidence. We design and implement scalable \
             cloud architectures using AWS, Azure, and Google Cloud.",
        features: &[
            "Cloud Migration",
            "Infrastructure as Code",
            "Cost Optimization",
            "Multi-Cloud Strategy",
        ],
    },
    ServiceEntry {
        icon: icons::ICON_SHIELD_CHECK,
        title: "Cybersecurity",
        description: "Protect your business with comprehensive security solutions. From risk \
             assessment to incident response.",
        features: &[
            "Security Audits",
            "Threat Detection",
            "Compliance",
            "Incident Response",
        ],
    },
    ServiceEntry {
        icon: icons::ICON_DEVICE_MOBILE,
        title: "Digital Transformation",
        description: "Modernize your business processes with cutting-edge technology solutions \
             and digital workflows.",
        features: &[
            "Process Automation",
            "API Development",
            "Integration",
            "Workflow Optimization",
        ],
    },
    ServiceEntry {
        icon: icons::ICON_DATABASE,
        title: "Data Analytics",
        description: "Turn your data into actionable insights with advanced analytics and \
             business intelligence solutions.",
        features: &[
            "Data Warehousing",
            "Business Intelligence",
            "Predictive Analytics",
            "Real-time Dashboards",
        ],
    },
    ServiceEntry {
        icon: icons::ICON_USERS,
        title: "IT Strategy",
        description: "Develop a comprehensive IT strategy aligned with your business goals and \
             objectives.",
        features: &[
            "Technology Roadmaps",
            "Vendor Management",
            "Budget Planning",
            "Risk Assessment",
        ],
    },
    ServiceEntry {
        icon: icons::ICON_CHART_BAR,
        title: "Performance Optimization",
        description: "Optimize your systems for maximum performance, reliability, and \
             cost-effectiveness.",
        features: &[
            "System Monitoring",
            "Performance Tuning",
            "Capacity Planning",
            "Disaster Recovery",
        ],
    },
];

/// The 2x2 statistics grid, in display order.
pub static STATS: [StatEntry; 4] = [
    StatEntry {
        icon: icons::ICON_USERS,
        number: "500+",
        label: "Happy Clients",
    },
    StatEntry {
        icon: icons::ICON_TROPHY,
        number: "15+",
        label: "Years Experience",
    },
    StatEntry {
        icon: icons::ICON_TARGET,
        number: "1000+",
        label: "Projects Completed",
    },
    StatEntry {
        icon: icons::ICON_CLOCK,
        number: "24/7",
        label: "Support Available",
    },
];

/// Footer contact block: exactly one entry per [`ContactKind`].
pub static CONTACTS: [ContactEntry; 3] = [
    ContactEntry {
        kind: ContactKind::Email,
        value: "contact@techconsultpro.com",
    },
    ContactEntry {
        kind: ContactKind::Phone,
        value: "+1 (555) 123-4567",
    },
    ContactEntry {
        kind: ContactKind::Address,
        value: "123 Tech Street, Silicon Valley, CA 94000",
    },
];

/// "Services" footer column.
pub static FOOTER_SERVICES: [NavLink; 5] = [
    NavLink::inert("Cloud Solutions"),
    NavLink::inert("Cybersecurity"),
    NavLink::inert("Digital Transformation"),
    NavLink::inert("Data Analytics"),
    NavLink::inert("IT Strategy"),
];

/// "Company" footer column.
pub static FOOTER_COMPANY: [NavLink; 5] = [
    NavLink::inert("About Us"),
    NavLink::inert("Our Team"),
    NavLink::inert("Careers"),
    NavLink::inert("Blog"),
    NavLink::inert("Case Studies"),
];

/// Legal-bar policy links.
pub static LEGAL_LINKS: [NavLink; 3] = [
    NavLink::inert("Privacy Policy"),
    NavLink::inert("Terms of Service"),
    NavLink::inert("Cookie Policy"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_are_complete() {
        assert_eq!(SERVICES.len(), 6);
        for entry in SERVICES.iter() {
            assert!(!entry.icon.is_empty());
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.features.is_empty());
            for feature in entry.features {
                assert!(!feature.is_empty());
            }
        }
    }

    #[test]
    fn stats_match_declared_figures() {
        let expected = [
            ("500+", "Happy Clients"),
            ("15+", "Years Experience"),
            ("1000+", "Projects Completed"),
            ("24/7", "Support Available"),
        ];
        assert_eq!(STATS.len(), expected.len());
        for (entry, (number, label)) in STATS.iter().zip(expected) {
            assert_eq!(entry.number, number);
            assert_eq!(entry.label, label);
            assert!(!entry.icon.is_empty());
        }
    }

    #[test]
    fn one_contact_entry_per_kind() {
        for kind in [ContactKind::Email, ContactKind::Phone, ContactKind::Address] {
            assert_eq!(CONTACTS.iter().filter(|c| c.kind == kind).count(), 1);
        }
    }

    #[test]
    fn contact_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ContactKind::Email).unwrap(), "email");
        assert_eq!(serde_json::to_value(ContactKind::Phone).unwrap(), "phone");
        assert_eq!(serde_json::to_value(ContactKind::Address).unwrap(), "address");
    }

    #[test]
    fn footer_links_have_labels_and_targets() {
        for link in FOOTER_SERVICES
            .iter()
            .chain(FOOTER_COMPANY.iter())
            .chain(LEGAL_LINKS.iter())
        {
            assert!(!link.label.is_empty());
            assert!(!link.target.is_empty());
        }
    }

    #[test]
    fn content_model_exports_as_json() {
        let json = serde_json::to_string(&SERVICES).unwrap();
        assert!(json.contains("Cloud Solutions"));
        assert!(json.contains("Disaster Recovery"));
    }
}
