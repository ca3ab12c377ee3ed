//! Page controllers.

pub mod dashboard;
