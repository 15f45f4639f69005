//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Most-downloaded show
    TopShow {
        /// Only count downloads from this city (case-insensitive)
        #[arg(long)]
        city: Option<String>,
    },
    /// Most-used device type
    TopDevice,
    /// Preroll ad opportunities per show, descending
    Preroll,
    /// Shows released on a weekly cadence (same UTC weekday and time)
    Weekly,
    /// All reports (default)
    Summary,
}
