//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `ui`, `reviews`, `collection`) so
//! individual components can depend on small focused models, and the
//! non-view logic stays testable without a browser.

pub mod collection;
pub mod reviews;
pub mod session;
pub mod ui;
