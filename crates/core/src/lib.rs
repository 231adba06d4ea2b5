pub mod naming;
pub mod types;

// Re-export commonly used types
pub use types::{
    props_from_json, ApplyResult, Diagnostic, DiagnosticLevel, PropValue, Props, StyleRequest,
};
