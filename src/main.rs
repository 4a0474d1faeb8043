//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use league_recap::{
    cli::{Commands, Recap},
    commands::{analyze::handle_analyze, ingest::handle_ingest},
};
use tracing_subscriber::EnvFilter;

/// Log to stderr so report tables on stdout stay clean.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose {
        "league_recap=debug,warn"
    } else {
        "league_recap=info,warn"
    };

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv::dotenv().ok();
    let app = Recap::parse();

    match app.command {
        Commands::Ingest {
            league_id,
            season,
            through_week,
            out,
            verbose,
        } => {
            init_tracing(verbose)?;
            let counts = handle_ingest(league_id, season, through_week, &out)
                .await
                .context("ingest failed")?;
            println!(
                "✓ Snapshot written to {} ({} teams, {} matches, {} player weeks, {} transactions)",
                out.display(),
                counts.teams,
                counts.matches,
                counts.player_performances,
                counts.activities
            );
        }

        Commands::Analyze { data, json } => {
            init_tracing(false)?;
            handle_analyze(&data, json)
                .with_context(|| format!("analysis of snapshot {} failed", data.display()))?;
        }
    }

    Ok(())
}
