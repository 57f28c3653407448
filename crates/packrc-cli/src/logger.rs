//! Logging infrastructure for the packrc CLI.
//!
//! Built on `tracing`. `--verbose` enables debug output for both packrc
//! crates, `--quiet` limits output to errors, and otherwise `RUST_LOG` is
//! honored with an info-level fallback. Logs go to stderr so `print` output
//! on stdout stays machine-readable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "packrc_config=debug,packrc_cli=debug";
const QUIET_FILTER: &str = "packrc_config=error,packrc_cli=error";
const DEFAULT_FILTER: &str = "packrc_config=info,packrc_cli=info";

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// # Arguments
///
/// * `verbose` - Debug-level logging for the packrc crates (overrides `quiet`)
/// * `quiet` - Only errors
/// * `no_color` - Disable ANSI colors
///
/// Without either flag, `RUST_LOG` is used when set, else info level.
///
/// # Examples
///
/// ```rust,no_run
/// use packrc_cli::logger::init_logger;
///
/// // Default logging (INFO level, or RUST_LOG)
/// init_logger(false, false, false);
///
/// // Quiet mode for CI (errors only, no colors)
/// init_logger(false, true, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
///
/// # Example
///
/// ```rust,no_run
/// use packrc_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("packrc_config=trace"), false);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    // try_init: tests may initialize more than once
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_no_color_wins_over_force_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_colors());
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
        assert!(should_use_colors());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    fn test_filters_parse() {
        let _ = filter_for(true, false);
        let _ = filter_for(false, true);
        let _ = EnvFilter::new(DEFAULT_FILTER);
    }
}
