//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Instagram Downloader                              ║
║     Fetch posts, carousels and reels as zip files     ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print the settings that apply to this run.
pub fn print_run_summary(shortcode: &str, download_mode: &str, download_dir: &str) {
    println!();
    println!("{}", style("Request:").bold());
    println!("  Post:      {}", shortcode);
    println!("  Mode:      {}", download_mode);
    println!("  Directory: {}", download_dir);
    println!();
}
