// Startup module - banner and effective settings
//
// Printed to stdout before the server starts accepting requests, and
// mirrored to the log so file-only deployments keep a record.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Where templates are loaded from, for display
fn template_source(config: &Config) -> String {
    match &config.template_dir {
        Some(dir) => dir.display().to_string(),
        None => "embedded".to_string(),
    }
}

/// Print the startup banner
pub fn print_startup(config: &Config, contacts: usize) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}contactbook{RESET} {DIM}v{VERSION}{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET}    {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET}    {DIM}(using defaults){RESET}");
        }
    }
    println!("  {DIM}Templates:{RESET} {}", template_source(config));
    println!("  {DIM}Contacts:{RESET}  {}", contacts);
    println!();
    println!(
        "  {MAGENTA}▸{RESET} Serving on {BOLD}http://{}{RESET}",
        config.bind_addr
    );
    println!();
}

/// Log the same summary through tracing
pub fn log_startup(config: &Config, contacts: usize) {
    tracing::info!(
        version = VERSION,
        bind = %config.bind_addr,
        templates = %template_source(config),
        contacts,
        "contactbook starting"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_template_source() {
        let mut config = Config::default();
        assert_eq!(template_source(&config), "embedded");

        config.template_dir = Some(PathBuf::from("/srv/templates"));
        assert_eq!(template_source(&config), "/srv/templates");
    }
}
