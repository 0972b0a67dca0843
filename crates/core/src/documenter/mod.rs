//! Documenter domain logic
//!
//! Selector parsing, response clean-up and the prompt sent to remote
//! backends. The shell crate owns the clients and the file rewrites.

pub mod fences;
pub mod prompt;
pub mod selector;
pub mod stub;

pub use fences::{has_usable_content, strip_fences, FENCE};
pub use prompt::system_prompt;
pub use selector::{parse_selector, DocumenterKind, Provider, SelectorError};
pub use stub::{stub_document, STUB_MARKER};
