pub mod batch;
pub mod progress;
pub mod recognizer;
pub mod tesseract;

pub use batch::{expand_inputs, recognize_all, OcrOutcome};
pub use progress::OcrProgress;
pub use recognizer::{clean_text, is_supported_image, OcrEvent, TextRecognizer};
pub use tesseract::TesseractRecognizer;
