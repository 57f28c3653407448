use clap::ValueEnum;

/// Rendering for `packrc print`
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(name = "json")]
    Json,

    #[value(name = "toml")]
    Toml,
}
