//! A single cell value with dual textual/numeric views.

use super::FrameError;

/// One cell of a dataframe.
///
/// The canonical payload is text; the numeric view parses lazily on
/// access. Asking for a number from a non-numeric cell is a caller
/// contract violation and surfaces as [`FrameError::NotNumeric`] rather
/// than a silent default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    content: String,
}

impl Attribute {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The cell as text.
    pub fn as_text(&self) -> &str {
        &self.content
    }

    /// The cell as a floating-point number.
    pub fn as_number(&self) -> Result<f64, FrameError> {
        self.content
            .trim()
            .parse::<f64>()
            .map_err(|_| FrameError::NotNumeric {
                value: self.content.clone(),
            })
    }
}
