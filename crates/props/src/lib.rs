pub mod apply;
pub mod convert;
pub mod prop_map;
pub mod responsive;
pub mod target;

// Re-export main types
pub use apply::{apply, PropError};
pub use convert::PropKind;
pub use prop_map::resolve;
pub use target::{InlineStyle, StyleBlock, StyleTarget};
