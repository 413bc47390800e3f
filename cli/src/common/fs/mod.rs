//! # NameGen Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers shared by the preference store and config loading.
//! Import from the submodule directly, e.g.
//! `use crate::common::fs::io::write_string_to_file;`.
//!

/// Basic file I/O (`ensure_dir_exists`, `read_optional_file`, `write_string_to_file`).
pub mod io;
