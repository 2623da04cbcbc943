//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Post listing and download statistics

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_error, print_info, print_run_summary, print_success, print_warning,
};
pub use progress::{create_item_bar, create_spinner};
pub use stats::{
    print_download_stats, print_failures, print_media_list, print_outcome, print_preview_line,
};
