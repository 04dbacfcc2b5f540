use serde_json::json;
use tracing::info;

use crate::api::models::MatchView;
use crate::cli::commands::MatchArgs;
use crate::cli::context::SolverContext;
use crate::errors::SolverError;
use crate::matching::rank_matches;
use crate::repl::renderer;

pub async fn handle_match(args: MatchArgs, config_path: Option<&str>) -> Result<(), SolverError> {
    let ctx = SolverContext::load(config_path, &args.corpus).await?;
    let limit = args.limit.unwrap_or(ctx.limit).max(1);

    let ranked = rank_matches(&args.query, &ctx.corpus, ctx.threshold, limit);
    let best = ranked.first();
    info!(
        threshold = ctx.threshold.value(),
        candidates = ranked.len(),
        matched = best.is_some(),
        "Matched question"
    );

    if args.json {
        let out = json!({
            "query": args.query,
            "threshold": ctx.threshold.value(),
            "best": best.map(MatchView::from),
            "candidates": ranked.iter().map(MatchView::from).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match best {
        Some(m) => {
            println!("{}", renderer::render_match(m, &args.query, args.diff));
            if args.limit.is_some() && ranked.len() > 1 {
                println!("{}", renderer::render_candidates(&ranked));
            }
        }
        None => println!("{}", renderer::render_no_match(ctx.threshold)),
    }

    Ok(())
}
