//! CLI entrypoint for Debate Mediator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use debate_application::{
    DebateProgressNotifier, GenerationWorker, NoProgress, RetryPolicy, RunDebateUseCase,
    RetryingWorker,
};
use debate_domain::DebateRequest;
use debate_infrastructure::{ConfigLoader, FileConfig, FileLogFormat, HttpGenerationWorker};
use debate_presentation::{
    AppState, Cli, Command, ConsoleFormatter, LogFormat, OutputFormat, ProgressReporter, RunArgs,
    ServeArgs, SimpleProgress, create_router,
};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    init_logging(cli.verbose, cli.log_format, &config);

    config.validate().context("Invalid configuration")?;
    info!("Starting Debate Mediator");

    // === Dependency Injection ===
    let use_case = build_use_case(&config)?;

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(use_case, &config, args).await,
        Command::Run(args) => run(use_case, args).await,
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8, format: Option<LogFormat>, config: &FileConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let json = match format {
        Some(LogFormat::Json) => true,
        Some(LogFormat::Pretty) => false,
        None => config.logging.format == FileLogFormat::Json,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_use_case(config: &FileConfig) -> Result<RunDebateUseCase> {
    let params = config.debate_params();
    let timeout = config.workers.request_timeout();

    let supporting = http_worker(&config.workers.supporting_url, timeout, &params.retry)
        .context("Failed to create supporting worker client")?;
    let opposing = http_worker(&config.workers.opposing_url, timeout, &params.retry)
        .context("Failed to create opposing worker client")?;

    info!(
        supporting = %config.workers.supporting_url,
        opposing = %config.workers.opposing_url,
        max_attempts = params.retry.max_attempts,
        "Generation workers configured"
    );

    Ok(RunDebateUseCase::new(supporting, opposing).with_params(params))
}

fn http_worker(
    url: &str,
    timeout: Duration,
    retry: &RetryPolicy,
) -> Result<Arc<dyn GenerationWorker>> {
    let worker = HttpGenerationWorker::new(url, timeout)?;
    Ok(Arc::new(RetryingWorker::new(worker, retry.clone())))
}

async fn serve(use_case: RunDebateUseCase, config: &FileConfig, args: ServeArgs) -> Result<()> {
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    if port == 0 {
        bail!("Port cannot be 0");
    }
    let addr = format!("{}:{}", host, port);

    let app = create_router(AppState::new(use_case)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Debate mediator listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn run(use_case: RunDebateUseCase, args: RunArgs) -> Result<()> {
    let mut request = DebateRequest::new(args.topic)
        .with_context(args.context)
        .with_rounds(args.rounds);
    if let Some(seconds) = args.timeout {
        request = request.with_timeout_seconds(seconds);
    }

    let progress: Box<dyn DebateProgressNotifier> = if args.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let session = use_case
        .execute_with_progress(request, progress.as_ref())
        .await?;

    let output = match args.output {
        OutputFormat::Full => ConsoleFormatter::format(&session),
        OutputFormat::Json => ConsoleFormatter::format_json(&session),
    };
    println!("{}", output);

    if let Some(failure) = &session.error {
        bail!("Debate failed: {}", failure);
    }
    Ok(())
}
