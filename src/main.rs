//! Entry point: parse CLI and dispatch to command handlers.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use draft_graph::{
    cli::{types::join_draft_years, Commands, DraftGraph, FetchArgs},
    commands::{
        common::FetchParams,
        render::{handle_render, RenderParams},
        roster::handle_roster,
        teammates::{handle_teammates, TeammatesParams},
    },
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn fetch_params(args: FetchArgs) -> FetchParams {
    FetchParams {
        refresh: args.refresh,
        no_cache: args.no_cache,
        timeout: Duration::from_secs(args.timeout_secs),
        verbose: args.verbose,
        base_url: None,
    }
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = DraftGraph::parse();

    match app.command {
        Commands::Render {
            graph,
            fetch,
            output,
            width,
            height,
            iterations,
            seed,
        } => {
            init_tracing(fetch.verbose);
            let label = join_draft_years(&graph.draft_years);
            handle_render(RenderParams {
                draft_years: graph.draft_years,
                seasons: graph.seasons,
                season_type: graph.season_type,
                edge_mode: graph.edge_mode,
                match_key: graph.match_key,
                output,
                width,
                height,
                iterations,
                seed,
                fetch: fetch_params(fetch),
            })
            .await
            .with_context(|| format!("Failed to render teammate graph for draft {}", label))?;
        }

        Commands::Roster {
            draft_years,
            fetch,
            json,
        } => {
            init_tracing(fetch.verbose);
            let label = join_draft_years(&draft_years);
            handle_roster(draft_years, fetch_params(fetch), json)
                .await
                .with_context(|| format!("Failed to load roster for draft {}", label))?;
        }

        Commands::Teammates { graph, fetch, json } => {
            init_tracing(fetch.verbose);
            let label = join_draft_years(&graph.draft_years);
            handle_teammates(TeammatesParams {
                draft_years: graph.draft_years,
                seasons: graph.seasons,
                season_type: graph.season_type,
                edge_mode: graph.edge_mode,
                match_key: graph.match_key,
                as_json: json,
                fetch: fetch_params(fetch),
            })
            .await
            .with_context(|| format!("Failed to build teammate graph for draft {}", label))?;
        }
    }

    Ok(())
}
