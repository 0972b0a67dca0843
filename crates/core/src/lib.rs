//! Core library for autodocs
//!
//! This crate is the **Functional Core** of autodocs. It holds the pure
//! logic of a documentation run; the `autodocs` binary crate is the
//! Imperative Shell that talks to git, the terminal, the model backends and
//! the filesystem.
//!
//! # Module Organization
//!
//! - [`files`]: selecting tracked files (extension, allow-list, deny-list)
//! - [`confirm`]: the destructive-action warning and answer parsing
//! - [`documenter`]: selector parsing, system prompt, fence stripping and the stub document
//! - [`report`]: per-file outcomes and the batch summary
//!
//! Nothing in here performs I/O, so every function is tested with plain
//! fixture data.
//!
//! # Example Usage
//!
//! ```rust
//! use autodocs_core::files::{filter_files, FileFilter};
//!
//! let tracked = vec!["__init__.py".to_string(), "models/base.py".to_string()];
//! let filter = FileFilter::with_extension("py").exclude(vec!["__init__.py".to_string()]);
//!
//! assert_eq!(filter_files(tracked, &filter), vec!["models/base.py".to_string()]);
//! ```

pub mod confirm;
pub mod documenter;
pub mod files;
pub mod report;
