//! Command execution

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, info, instrument};

use crate::application::services::Report;
use crate::cli::{output, Cli, CliResult};
use crate::config::Settings;
use crate::domain::FilterLetter;
use crate::infrastructure::{InfraError, ServiceContainer};

/// Run the CLI: print completions, or fetch and print the breed report.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.generator {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| InfraError::io("start async runtime", e))?;

    let report = runtime.block_on(build_report(cli))?;
    output::block(&report).map_err(|e| InfraError::io("write report to stdout", e))?;
    Ok(())
}

/// Resolve the letter, load settings and build the report.
///
/// The letter is validated before settings are loaded, so invalid input
/// never reaches the network.
#[instrument(skip(cli), fields(letter = ?cli.letter))]
pub async fn build_report(cli: &Cli) -> CliResult<Report> {
    let letter = FilterLetter::resolve(cli.letter.as_deref())?;
    debug!("build_report: letter={}", letter);
    if !cli.rest.is_empty() {
        debug!("build_report: ignoring extra arguments {:?}", cli.rest);
    }

    let settings = Settings::load()?.with_overrides(cli.url.clone(), cli.timeout)?;
    info!(
        "fetching {} (timeout {}s)",
        settings.api_url, settings.timeout_secs
    );

    let container = ServiceContainer::new(settings)?;
    let service = container.report_service()?;
    Ok(service.run(letter).await?)
}
