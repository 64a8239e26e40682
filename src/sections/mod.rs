//! Page sections, one per view unit, composed top to bottom by
//! [`crate::Page`].

mod about;
mod footer;
mod hero;
mod services;

pub use about::About;
pub use footer::Footer;
pub use hero::Hero;
pub use services::Services;
