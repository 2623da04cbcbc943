//! Filesystem module.
//!
//! Provides:
//! - Prefix validation
//! - Collision-free output file writing

pub mod naming;
pub mod paths;

pub use naming::{next_free_path, sanitize_prefix};
pub use paths::{ensure_dir, write_output_file};
