use serde_json::json;

use crate::cli::commands::{CorpusArgs, StatsArgs};
use crate::cli::context::SolverContext;
use crate::errors::SolverError;
use crate::repl::renderer;

pub async fn handle_stats(args: StatsArgs, config_path: Option<&str>) -> Result<(), SolverError> {
    let corpus_args = CorpusArgs { corpus: args.corpus, threshold: None };
    let ctx = SolverContext::load(config_path, &corpus_args).await?;
    let stats = ctx.corpus.stats();

    if args.json {
        let out = json!({
            "stats": stats,
            "duplicates": ctx.corpus.duplicates(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", renderer::render_stats(&stats, ctx.corpus.duplicates().len()));
        for key in ctx.corpus.duplicates() {
            println!("  {} {}", console::style("repeated:").yellow(), key);
        }
    }

    Ok(())
}
