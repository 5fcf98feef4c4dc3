//! HTTP Protocol.
mod status;
mod date;

pub use status::StatusCode;
pub(crate) use status::reason_of;
pub use date::{httpdate, httpdate_now};
