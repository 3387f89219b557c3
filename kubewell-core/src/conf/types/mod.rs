mod field_path;
pub mod runtime;
pub mod specification;

pub use field_path::FieldPath;
pub use runtime::*;
pub use specification::*;
