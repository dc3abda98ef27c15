//! Internal schema exchanged with the service layer.
//!
//! `request` holds one argument struct per operation, `response` the
//! provider-shaped answer shared by all operations. Both serialize to the
//! provider's camelCase JSON.

mod lenient;
pub mod request;
pub mod response;

pub use request::*;
pub use response::Response;
