//! Data models for the School Management System.
//!
//! Document models mirror the on-disk JSON files exactly (including their
//! mixed key casing); request models use camelCase for the UI client.

mod admin;
mod classroom;
mod report;
mod session;
mod teacher;

pub use admin::*;
pub use classroom::*;
pub use report::*;
pub use session::*;
pub use teacher::*;
