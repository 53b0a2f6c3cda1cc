/// Extension traits for built-in and ecosystem types.
///
/// Each extension trait lives in its own file named after the type it extends:
/// - `path.rs` - Extensions for `std::path::Path`
/// - `value.rs` - Extensions for `serde_json::Value`
pub mod path;
pub mod value;

pub use path::PathExt;
pub use value::{yes_no_to_bool, ValueExt};
