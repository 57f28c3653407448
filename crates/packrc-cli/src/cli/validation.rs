//! Value parsers for arguments that need domain validation.

use packrc_config::BuildMode;

/// Parse `--mode` through [`BuildMode`]'s strict parser.
///
/// Accepts `development`/`dev` and `production`/`prod`, case-insensitively.
/// Unknown values are rejected with the configuration layer's hint, unlike
/// `NODE_ENV`, which falls back to production.
///
/// # Examples
///
/// ```
/// use packrc_cli::cli::parse_mode;
/// use packrc_config::BuildMode;
///
/// assert_eq!(parse_mode("dev"), Ok(BuildMode::Development));
/// assert!(parse_mode("staging").is_err());
/// ```
pub fn parse_mode(value: &str) -> Result<BuildMode, String> {
    value.parse::<BuildMode>().map_err(|err| match err.hint() {
        Some(hint) => format!("{err}\n\nHint: {hint}"),
        None => err.to_string(),
    })
}
