//! Status lines on stderr.
//!
//! Status lines are for humans: they go to stderr so `packrc print` output
//! stays machine-readable, and `--quiet` silences them entirely. Errors are
//! reported separately by `main` through miette.
//!
//! # Examples
//!
//! ```no_run
//! use packrc_cli::ui;
//!
//! ui::init(false, false);
//! ui::info("Checking production configuration...");
//! ui::success("production configuration is valid");
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::{OwoColorize, Stream::Stderr};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Apply the global quiet and color decisions for status lines.
///
/// # Arguments
///
/// * `quiet` - Suppress every status line
/// * `no_color` - Disable colors even when the terminal supports them
pub fn init(quiet: bool, no_color: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
    let enabled = !no_color && crate::logger::should_use_colors();
    owo_colors::set_override(enabled);
}

/// Whether status lines are currently suppressed.
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a success message to stderr.
///
/// # Examples
///
/// ```no_run
/// use packrc_cli::ui::success;
///
/// success("Wrote development configuration to dist/config.json");
/// ```
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", "✓".if_supports_color(Stderr, |t| t.green()), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", "ℹ".if_supports_color(Stderr, |t| t.blue()), message);
}

/// Print a warning message to stderr.
///
/// # Examples
///
/// ```no_run
/// use packrc_cli::ui::warning;
///
/// warning("Skipped filesystem checks");
/// ```
pub fn warning(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stderr, |t| t.yellow()),
        message.if_supports_color(Stderr, |t| t.yellow())
    );
}
