use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::api::models::MatchView;
use crate::cli::commands::OcrArgs;
use crate::cli::context::SolverContext;
use crate::errors::SolverError;
use crate::matching::find_best_match;
use crate::ocr::{expand_inputs, recognize_all, OcrEvent, OcrProgress, TesseractRecognizer, TextRecognizer};
use crate::ocr::progress::display_name;
use crate::repl::renderer;

pub async fn handle_ocr(args: OcrArgs, config_path: Option<&str>, quiet: bool) -> Result<(), SolverError> {
    let ctx = SolverContext::load(config_path, &args.corpus).await?;
    let settings = ctx.config.ocr();
    let images = expand_inputs(&args.images)?;

    let recognizer: Arc<dyn TextRecognizer> = Arc::new(TesseractRecognizer::from_settings(&settings));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<OcrEvent>();
    let mut progress = if quiet || args.json {
        OcrProgress::hidden(images.len())
    } else {
        OcrProgress::new(images.len())
    };
    let progress_task = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            progress.handle_event(&event);
        }
        progress.finish();
        progress
    });

    let outcomes = recognize_all(
        recognizer,
        images,
        settings.concurrency,
        settings.collapse_whitespace,
        Some(event_tx),
    )
    .await;

    let progress = progress_task
        .await
        .map_err(|e| SolverError::Internal(format!("Progress task failed: {}", e)))?;
    if progress.failed() > 0 {
        warn!(failed = progress.failed(), "Some images could not be read");
    }

    let mut results = Vec::new();
    for outcome in &outcomes {
        let name = display_name(&outcome.path);
        match &outcome.text {
            Ok(text) if text.is_empty() => {
                if args.json {
                    results.push(json!({"image": name, "text": "", "best": null}));
                } else {
                    println!("\n{}", renderer::render_info(&format!("{}: no text detected", name)));
                }
            }
            Ok(text) => {
                let best = find_best_match(text, &ctx.corpus, ctx.threshold);
                if args.json {
                    results.push(json!({
                        "image": name,
                        "text": text,
                        "best": best.as_ref().map(MatchView::from),
                    }));
                } else {
                    println!("\n{} {}", console::style(&name).cyan().bold(), console::style(text).dim());
                    match &best {
                        Some(m) => println!("{}", renderer::render_match(m, text, false)),
                        None => println!("{}", renderer::render_no_match(ctx.threshold)),
                    }
                }
            }
            Err(e) => {
                if args.json {
                    results.push(json!({"image": name, "error": e.to_string()}));
                } else {
                    println!("\n{}", renderer::render_error(&format!("{}: {}", name, e)));
                }
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    info!(images = outcomes.len(), "OCR batch finished");

    // Every image failing is a command failure
    if !outcomes.is_empty() && outcomes.iter().all(|o| o.text.is_err()) {
        return Err(SolverError::Ocr("No image could be read".into()));
    }

    Ok(())
}
