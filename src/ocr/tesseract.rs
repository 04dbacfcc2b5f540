use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::OcrSettings;
use crate::errors::SolverError;
use super::recognizer::TextRecognizer;

/// Runs the `tesseract` command line engine, reading the text from stdout.
pub struct TesseractRecognizer {
    binary: String,
    language: String,
    timeout: Duration,
}

impl TesseractRecognizer {
    pub fn new(binary: impl Into<String>, language: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
            timeout,
        }
    }

    pub fn from_settings(settings: &OcrSettings) -> Self {
        Self::new(
            settings.binary.clone(),
            settings.language.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn recognize(&self, image: &Path) -> Result<String, SolverError> {
        if !image.exists() {
            return Err(SolverError::Ocr(format!("Image not found: {}", image.display())));
        }

        debug!(image = %image.display(), language = %self.language, "Running tesseract");

        let child = tokio::process::Command::new(&self.binary)
            .arg(image)
            .arg("stdout")
            .args(["-l", &self.language])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| SolverError::Timeout(format!(
                "OCR timed out after {}s: {}",
                self.timeout.as_secs(),
                image.display()
            )))?
            .map_err(|e| SolverError::Ocr(format!("Failed to run {}: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SolverError::Ocr(format!(
                "{} exited with code {}: {}",
                self.binary,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn engine_name(&self) -> &str {
        "tesseract"
    }
}
