use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::errors::SolverError;
use super::recognizer::{clean_text, is_supported_image, OcrEvent, TextRecognizer};

/// Recognized text for one image, or why it could not be read.
#[derive(Debug)]
pub struct OcrOutcome {
    pub path: PathBuf,
    pub text: Result<String, SolverError>,
}

/// Resolve paths and glob patterns into the list of images to scan.
///
/// Order follows the arguments, then glob order within a pattern. Files that
/// are not images are skipped with a warning; a pattern that matches no
/// image is an error.
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>, SolverError> {
    let mut images = Vec::new();

    for input in inputs {
        let before = images.len();
        for entry in glob::glob(input)
            .map_err(|e| SolverError::Ocr(format!("Invalid glob pattern {}: {}", input, e)))?
        {
            let path = entry.map_err(|e| SolverError::Ocr(format!("Glob error: {}", e)))?;
            if !path.is_file() {
                continue;
            }
            if !is_supported_image(&path) {
                warn!(path = %path.display(), "Skipping unsupported file");
                continue;
            }
            images.push(path);
        }
        if images.len() == before {
            return Err(SolverError::Ocr(format!("No images found for {}", input)));
        }
    }

    Ok(images)
}

/// Run `recognizer` over `paths` with at most `concurrency` images in flight.
///
/// Outcomes are returned in the order of `paths`, whatever order the engine
/// finishes in.
pub async fn recognize_all(
    recognizer: Arc<dyn TextRecognizer>,
    paths: Vec<PathBuf>,
    concurrency: usize,
    collapse_whitespace: bool,
    events: Option<UnboundedSender<OcrEvent>>,
) -> Vec<OcrOutcome> {
    info!(
        engine = recognizer.engine_name(),
        images = paths.len(),
        concurrency,
        "Starting OCR batch"
    );

    stream::iter(paths)
        .map(|path| {
            let recognizer = recognizer.clone();
            let events = events.clone();
            async move {
                let emit = |event: OcrEvent| {
                    if let Some(tx) = &events {
                        let _ = tx.send(event);
                    }
                };

                emit(OcrEvent::Started { path: path.clone() });
                let started = Instant::now();

                let text = recognizer
                    .recognize(&path)
                    .await
                    .map(|raw| clean_text(&raw, collapse_whitespace));

                match &text {
                    Ok(t) => emit(OcrEvent::Recognized {
                        path: path.clone(),
                        chars: t.chars().count(),
                        duration_ms: started.elapsed().as_millis() as u64,
                    }),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "OCR failed");
                        emit(OcrEvent::Failed { path: path.clone(), error: e.to_string() });
                    }
                }

                OcrOutcome { path, text }
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
