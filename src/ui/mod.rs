//! View components
//!
//! Pure functions from state to iced elements. None of them hold state; the
//! accordion and search panel state live in [`crate::app::Directory`].

pub mod category_section;
pub mod faq_section;
pub mod layout;
pub mod results;
pub mod search_bar;
pub mod server_card;
pub mod theme;
