//! Diagnostic logging setup for the command-line tool
//!
//! Diagnostics go through `tracing` and are written to stderr. `RUST_LOG`
//! takes precedence; otherwise the level is derived from `--verbose`.

use crate::shared::Result;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "nwdi_dcdef=debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber
///
/// # Errors
/// Returns an error if a global subscriber is already installed
pub fn init_logging(verbose: bool, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "nwdi_dcdef=debug");
    }

    #[test]
    fn test_directives_parse() {
        for verbose in [false, true] {
            assert!(default_directive(verbose)
                .parse::<tracing_subscriber::filter::Directive>()
                .is_ok());
        }
    }
}
