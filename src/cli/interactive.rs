use std::sync::Arc;

use crate::cli::commands::InteractiveArgs;
use crate::cli::context::SolverContext;
use crate::errors::SolverError;
use crate::repl::ReplSession;

pub async fn handle_interactive(args: InteractiveArgs, config_path: Option<&str>) -> Result<(), SolverError> {
    let ctx = SolverContext::load(config_path, &args.corpus).await?;
    let session = ReplSession::new(Arc::new(ctx.corpus), ctx.threshold, ctx.limit);
    session.run(!args.no_splash).await
}
