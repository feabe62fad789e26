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
║     kemono-manifest                                   ║
║     aria2 download lists for Kemono creators          ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(input_url: &str, mode: &str, formats: &[String], out_path: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Profile: {}", input_url);
    println!("  Mode: {}", mode);
    println!("  Formats: {}", formats.join(" "));
    println!("  Output path: {}", out_path);
    println!();
}
