//! CLI entrypoint for Stoic Companion
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use stoic_application::AskController;
use stoic_domain::OutputFormat;
use stoic_infrastructure::{ConfigLoader, FileConfig, HttpAskGateway, TextResponseExporter};
use stoic_presentation::{
    AskRepl, Cli, ConsoleFormatter, ConsoleView, OutputConfig, ReplConfig, expand_home,
};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Merge file configuration with command-line overrides.
fn resolve_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    apply_cli_overrides(cli, &mut config);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Command-line flags win over every configuration layer.
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.url = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.endpoint.timeout_seconds = Some(timeout);
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if cli.no_color {
        config.output.color = false;
    }
    if cli.quiet {
        config.repl.show_progress = false;
    }
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr unless `logging.file` is set. The returned guard
/// must live until the end of `main` so buffered lines are flushed.
fn init_logging(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(log_file) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let path = Path::new(log_file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("logging.file has no file name: {}", log_file))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn repl_config(config: &FileConfig) -> ReplConfig {
    ReplConfig {
        show_progress: config.repl.show_progress,
        history_file: config
            .repl
            .history_file
            .as_deref()
            .map(expand_home)
            .or_else(ConfigLoader::default_history_path),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    let output = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    info!("Starting Stoic Companion against {}", config.endpoint.url);

    // === Dependency Injection ===
    let gateway = Arc::new(HttpAskGateway::with_timeout(
        config.endpoint.url.clone(),
        config.endpoint.timeout_seconds.map(Duration::from_secs),
    )?);

    // Interactive mode
    if cli.is_interactive() {
        let view = Arc::new(ConsoleView::new(config.repl.show_progress, true));
        let controller = Arc::new(AskController::new(gateway, view));
        let repl = AskRepl::new(
            controller,
            Arc::new(TextResponseExporter::new()),
            repl_config(&config),
        );
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // One-shot mode
    let question = cli.question_text().unwrap_or_default();
    let echo = output.format == OutputFormat::Text;
    let view = Arc::new(ConsoleView::new(config.repl.show_progress, echo));
    let controller = AskController::new(gateway, view);

    let outcome = controller.submit_text(&question).await;

    if output.format == OutputFormat::Json {
        println!("{}", ConsoleFormatter::format_json(question.trim(), &outcome));
    }

    let answered = outcome.result().is_some_and(|r| r.is_success());
    Ok(if answered {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(toml: &str) -> FileConfig {
        toml::from_str(toml).unwrap()
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stoic-companion").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut config = file_config(
            r#"
[endpoint]
url = "http://from-file:5000/ask"
timeout_seconds = 30

[output]
color = true
format = "text"

[repl]
show_progress = true
"#,
        );
        let cli = parse(&[
            "--endpoint",
            "http://from-flag:5000/ask",
            "--timeout",
            "5",
            "-o",
            "json",
            "--no-color",
            "-q",
            "What is virtue?",
        ]);

        apply_cli_overrides(&cli, &mut config);

        assert_eq!(config.endpoint.url, "http://from-flag:5000/ask");
        assert_eq!(config.endpoint.timeout_seconds, Some(5));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_absent_flags_keep_config_values() {
        let mut config = file_config(
            r#"
[endpoint]
url = "http://from-file:5000/ask"
timeout_seconds = 30

[output]
color = false
format = "json"

[repl]
show_progress = false
"#,
        );
        let cli = parse(&["What is virtue?"]);

        apply_cli_overrides(&cli, &mut config);

        assert_eq!(config.endpoint.url, "http://from-file:5000/ask");
        assert_eq!(config.endpoint.timeout_seconds, Some(30));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_history_file_expands_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let config = file_config("[repl]\nhistory_file = \"~/.stoic_history\"\n");

        assert_eq!(
            repl_config(&config).history_file,
            Some(home.join(".stoic_history"))
        );
    }
}
