use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use survey_server::SurveyServer;
use survey_store::TemplateStore;

mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("survey-server error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = cli.load_config().context("failed to load configuration")?;

    let template_path = config.store.template_path.clone();
    let store = TemplateStore::load(&template_path).with_context(|| {
        format!(
            "failed to load initial survey template from {}",
            template_path.display()
        )
    })?;

    let bind_addr = config.server.bind_addr();
    let server = SurveyServer::bind(&bind_addr, Arc::new(store), config.server.workers)?;
    tracing::info!(
        addr = %bind_addr,
        template = %template_path.display(),
        "survey server listening"
    );

    let shutdown = server.shutdown_handle();
    let mut serving = tokio::task::spawn_blocking(move || server.run());

    tokio::select! {
        joined = &mut serving => {
            joined.context("server task panicked")?;
            return Ok(());
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for ctrl-c")?;
            tracing::info!("shutdown requested");
            shutdown.trigger();
        }
    }

    serving.await.context("server task panicked")?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SURVEY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
