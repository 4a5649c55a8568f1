//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueHint};

/// List dog breeds starting with a given letter, with their sub-breeds
#[derive(Parser, Debug)]
#[command(name = "breed-filter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Starting letter (only the first character is used, case-insensitive; default: b)
    ///
    /// Dash-leading input that is not a known flag (`-x`, `-5`) lands here and is
    /// rejected as a letter, not as a usage error.
    #[arg(allow_hyphen_values = true)]
    pub letter: Option<String>,

    /// Further arguments are ignored; only the first one selects the letter
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Increase log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Catalog endpoint (overrides config and BREED_FILTER_API_URL)
    #[arg(long, value_hint = ValueHint::Url)]
    pub url: Option<String>,

    /// Request timeout in seconds (overrides config and BREED_FILTER_TIMEOUT_SECS)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print shell completions and exit
    #[arg(long = "generator", value_enum)]
    pub generator: Option<clap_complete::Shell>,
}
