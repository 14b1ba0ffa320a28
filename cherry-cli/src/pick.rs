//! # Milestone Pick Handler
//!
//! Drives the milestone resolver and prints one line per merged pull request:
//! either a `git cherry-pick -x <sha>` command or the raw identifier.

use anyhow::{Context, Result};
use cherry_gh::create_github_client;
use tokio::runtime::Runtime;

use crate::cli::{Cli, OutputFormat};
use crate::output::{print_success, print_warning};

/// Resolve the milestone and print the result
pub fn run(cli: &Cli) -> Result<()> {
  let (owner, repo) = parse_repo(&cli.repo)?;

  // Create a runtime for async operations
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_github_client(&cli.token);

  let key = cli.dedupe.into();

  match cli.format {
    OutputFormat::Numbers => {
      let ids = rt.block_on(client.merged_prs_for_milestone(owner, repo, &cli.milestone, key))?;

      if ids.is_empty() {
        print_warning(&format!("No merged pull requests found for milestone '{}'", cli.milestone));
        return Ok(());
      }

      for id in &ids {
        println!("{id}");
      }

      print_success(&format!(
        "{} merged pull requests for milestone '{}'",
        ids.len(),
        cli.milestone
      ));
    }
    OutputFormat::CherryPick => {
      let details = rt.block_on(client.merged_pr_details(owner, repo, &cli.milestone, key, !cli.no_sort))?;

      if details.is_empty() {
        print_warning(&format!("No merged pull requests found for milestone '{}'", cli.milestone));
        return Ok(());
      }

      for pr in &details {
        println!("git cherry-pick -x {}", pr.sha);
      }

      print_success(&format!(
        "{} merged pull requests for milestone '{}'",
        details.len(),
        cli.milestone
      ));
    }
  }

  Ok(())
}

/// Split an `owner/name` repository argument into its two parts
fn parse_repo(repo: &str) -> Result<(&str, &str)> {
  match repo.split_once('/') {
    Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => Ok((owner, name)),
    _ => Err(anyhow::anyhow!(
      "Invalid repository '{repo}': expected 'owner/name' (e.g. 'apache/dolphinscheduler')"
    )),
  }
}
