//! # Command Line Interface
//!
//! Defines the CLI structure for the cherry tool. cherry is a single-purpose
//! command: it takes a repository, a milestone, and a token, and prints one
//! line per merged pull request.

use cherry_gh::DedupeKey;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, ValueEnum};

/// Top-level CLI command for the cherry tool
#[derive(Parser)]
#[command(name = "cherry")]
#[command(display_name = "🍒 Cherry")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Resolve a GitHub release milestone into git cherry-pick commands")]
#[command(
  long_about = "Cherry queries the GitHub API for the pull requests merged under a release\n\
        milestone, either tagged directly or linked through a closed issue, and prints\n\
        one git cherry-pick command per merged pull request so they can be applied to\n\
        a release branch."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())  // Make usage line stand out
    .literal(AnsiColor::BrightGreen.on_default().bold())  // Command names, flags bold
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Repository to query, in owner/name form (e.g. 'apache/dolphinscheduler')
  #[arg(short, long, value_name = "OWNER/NAME")]
  pub repo: String,

  /// Milestone label to resolve (e.g. '3.0.1')
  #[arg(short, long, env = "GH_REPO_MILESTONE")]
  pub milestone: String,

  /// GitHub access token used for API authentication
  #[arg(long, env = "GH_ACCESS_TOKEN", hide_env_values = true)]
  pub token: String,

  /// What to print for each merged pull request
  #[arg(long, value_enum, ignore_case = true, default_value_t = OutputFormat::CherryPick)]
  pub format: OutputFormat,

  /// Which identity deduplication keys on
  #[arg(long, value_enum, ignore_case = true, default_value_t = DedupeArg::Number)]
  pub dedupe: DedupeArg,

  /// Keep the result in identity order instead of sorting by merge time
  #[arg(long)]
  pub no_sort: bool,
}

/// Output format for the resolved pull requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  /// One `git cherry-pick -x <sha>` line per merged pull request
  CherryPick,
  /// The raw pull request identifiers, one per line
  Numbers,
}

/// Identity key used for deduplication
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DedupeArg {
  /// Repository-scoped pull request number
  Number,
  /// Canonical pull request URL
  Url,
}

impl From<DedupeArg> for DedupeKey {
  fn from(arg: DedupeArg) -> Self {
    match arg {
      DedupeArg::Number => Self::Number,
      DedupeArg::Url => Self::Url,
    }
  }
}
