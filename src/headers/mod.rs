//! HTTP Header Map.
//!
//! Names are stored normalized to lowercase, and a name that appears more than once is coalesced
//! into a single comma joined value, e.g. `Foo: 1` and `foo: 2` becomes `foo: 1, 2`.
mod error;
mod name;
mod map;
mod parse;

pub use error::HeaderError;
pub use name::{is_tchar, is_token};
pub use map::{HeaderMap, Iter};
pub use parse::Field;
