use std::fmt;

#[derive(Debug)]
pub struct ClipboardError {
    pub message: String,
}

impl ClipboardError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard write failed: {}", self.message)
    }
}

impl std::error::Error for ClipboardError {}

/// One way of putting text on the system clipboard. The platform binding
/// supplies a primary async-API strategy and a legacy selection-copy fallback.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Tries strategies in order; the first successful write wins. Errors only
/// when every strategy fails, returning the last failure.
pub fn copy_with_fallback(
    strategies: &mut [&mut dyn Clipboard],
    text: &str,
) -> Result<(), ClipboardError> {
    let mut last_err = ClipboardError::new("no clipboard strategy available");
    for strategy in strategies.iter_mut() {
        match strategy.write(text) {
            Ok(()) => return Ok(()),
            Err(err) => last_err = err,
        }
    }
    Err(last_err)
}
