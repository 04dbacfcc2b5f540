use std::collections::HashMap;
use std::path::{Path, PathBuf};

use console::style;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::utils::formatting::format_duration;
use super::recognizer::OcrEvent;

/// Progress display for an OCR batch: one overall bar plus a spinner per
/// image currently being read.
pub struct OcrProgress {
    multi: MultiProgress,
    total_bar: ProgressBar,
    image_bars: HashMap<PathBuf, ProgressBar>,
    failed: usize,
}

impl OcrProgress {
    pub fn new(total: usize) -> Self {
        Self::with_target(total, ProgressDrawTarget::stderr())
    }

    /// A display that draws nothing, for quiet and JSON output modes.
    pub fn hidden(total: usize) -> Self {
        Self::with_target(total, ProgressDrawTarget::hidden())
    }

    fn with_target(total: usize, target: ProgressDrawTarget) -> Self {
        let multi = MultiProgress::with_draw_target(target);

        let total_bar = multi.add(ProgressBar::new(total as u64));
        total_bar.set_style(
            ProgressStyle::default_bar()
                .template("  {bar:30.cyan/dark_gray} {pos}/{len} images | {msg}")
                .unwrap()
                .progress_chars("█▓░")
        );
        total_bar.set_message("Recognizing text...");

        Self {
            multi,
            total_bar,
            image_bars: HashMap::new(),
            failed: 0,
        }
    }

    pub fn handle_event(&mut self, event: &OcrEvent) {
        match event {
            OcrEvent::Started { path } => {
                let bar = self.multi.insert_before(&self.total_bar, ProgressBar::new_spinner());
                bar.set_style(
                    ProgressStyle::default_spinner()
                        .template("    {spinner:.yellow} {msg}")
                        .unwrap()
                );
                bar.set_message(display_name(path));
                bar.enable_steady_tick(std::time::Duration::from_millis(100));
                self.image_bars.insert(path.clone(), bar);
            }
            OcrEvent::Recognized { path, chars, duration_ms } => {
                if let Some(bar) = self.image_bars.remove(path) {
                    bar.finish_and_clear();
                }
                self.total_bar.inc(1);
                self.println(&format!(
                    "  {} {} ({} chars, {})",
                    style("✓").green(),
                    display_name(path),
                    chars,
                    format_duration(*duration_ms),
                ));
            }
            OcrEvent::Failed { path, error } => {
                if let Some(bar) = self.image_bars.remove(path) {
                    bar.finish_and_clear();
                }
                self.failed += 1;
                self.total_bar.inc(1);
                self.println(&format!(
                    "  {} {} ({})",
                    style("✗").red(),
                    display_name(path),
                    style(error).red().dim(),
                ));
            }
        }
    }

    pub fn finish(&mut self) {
        for (_, bar) in self.image_bars.drain() {
            bar.finish_and_clear();
        }
        let msg = if self.failed == 0 {
            "Text recognition complete".to_string()
        } else {
            format!("Text recognition complete, {} failed", self.failed)
        };
        self.total_bar.finish_with_message(msg);
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Print a line through the multi-progress (won't interfere with bars).
    pub fn println(&self, msg: &str) {
        let _ = self.multi.println(msg);
    }
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
