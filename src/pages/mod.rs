//! Page components, one module per route group.

pub mod browse;
pub mod detail;
pub mod home;
pub mod latest;
pub mod login;
pub mod profile;
pub mod register;
