use clap::Parser;

/// The scan root is always the directory holding the executable; the flags only
/// change how much is logged.
#[derive(Parser, Debug)]
#[command(
    name = "spdx-header-rewrite",
    about = "Rewrite SPDX copyright headers into the UNIMOODLE GPL license header",
    version
)]
pub struct Cli {
    /// Log every rewritten file
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default `env_logger` filter; `RUST_LOG` still takes precedence.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
