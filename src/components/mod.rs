//! Reusable view components.

pub mod media_card;
pub mod navbar;
pub mod pagination;
pub mod review_section;
pub mod star_icon;
