mod enumeration;
mod network;
pub mod range;
mod reference;

pub use enumeration::*;
pub use network::*;
pub use range::*;
pub use reference::*;

/// Outcome of checking one field: `None` once a violation has been recorded for it.
pub type Checked<T> = Option<T>;

/// Treat an empty string the same as an omitted one.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
