//! Render command implementation

use std::path::PathBuf;

use crate::{
    cli::types::{join_draft_years, DraftYear, EdgeMode, MatchKey, SeasonRange, SeasonType},
    core::cache::write_string,
    graph::{build_teammate_graph, GraphOptions},
    render::{render_graph, LayoutConfig, RenderConfig},
    Result,
};

use super::common::{load_snapshot, resolve_seasons, FetchParams};

/// Parameters for the render command
#[derive(Debug, Clone)]
pub struct RenderParams {
    pub draft_years: Vec<DraftYear>,
    pub seasons: Option<SeasonRange>,
    pub season_type: SeasonType,
    pub edge_mode: EdgeMode,
    pub match_key: MatchKey,
    pub output: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub iterations: usize,
    pub seed: u64,
    pub fetch: FetchParams,
}

/// Default output file: `draft-2018-teammates.svg`, or `draft-2018-2019-teammates.svg`.
pub fn default_output_path(draft_years: &[DraftYear]) -> PathBuf {
    let years = draft_years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join("-");
    PathBuf::from(format!("draft-{}-teammates.svg", years))
}

/// Handle the render command: fetch, build, lay out, draw, write.
///
/// Returns the path of the written SVG.
pub async fn handle_render(params: RenderParams) -> Result<PathBuf> {
    let seasons = resolve_seasons(params.seasons, &params.draft_years);
    let snapshot = load_snapshot(
        &params.draft_years,
        &seasons,
        params.season_type,
        &params.fetch,
    )
    .await?;

    let graph = build_teammate_graph(
        &snapshot,
        GraphOptions {
            edge_mode: params.edge_mode,
            match_key: params.match_key,
        },
    )?;
    println!(
        "✓ Teammate graph: {} players, {} edges ({} mode, {} raw)",
        graph.node_count(),
        graph.edge_count(),
        graph.edge_mode(),
        graph.raw_edge_count()
    );

    let layout = LayoutConfig {
        width: params.width as f64,
        height: params.height as f64,
        iterations: params.iterations,
        seed: params.seed,
    };
    let first = seasons.first().map(|s| s.to_api_string()).unwrap_or_default();
    let last = seasons.last().map(|s| s.to_api_string()).unwrap_or_default();
    let render = RenderConfig {
        width: params.width as f64,
        height: params.height as f64,
        title: format!(
            "{} NBA draft class: who played with whom",
            join_draft_years(&params.draft_years)
        ),
        subtitle: Some(format!(
            "{} through {} {}. Size: career games. Colour: average points per game.",
            first, last, params.season_type
        )),
        ..Default::default()
    };

    let svg = render_graph(&graph, &layout, &render);
    let path = params
        .output
        .unwrap_or_else(|| default_output_path(&params.draft_years));
    write_string(&path, &svg)?;

    println!("✓ Figure written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(&[DraftYear::new(2018)]),
            PathBuf::from("draft-2018-teammates.svg")
        );
        assert_eq!(
            default_output_path(&[DraftYear::new(2018), DraftYear::new(2019)]),
            PathBuf::from("draft-2018-2019-teammates.svg")
        );
    }
}
