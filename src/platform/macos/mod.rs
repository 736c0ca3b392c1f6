//! macOS-specific glue.

pub mod accessibility;

pub use accessibility::ensure_accessibility_prompt;
