use std::fmt;

use crate::{ConverterError, ParseContext, ParseOutcome, PrintContext};

/// One step of a date-time format, called field by field by the pipeline.
pub trait DateTimePrinterParser: fmt::Display + Send + Sync {
    /// Appends this step's output to `buf`.
    ///
    /// Returns `Ok(false)` without writing if the value is not available yet.
    ///
    /// # Errors
    /// Returns `ConverterError` if the value cannot be represented.
    fn print(&self, context: &dyn PrintContext, buf: &mut String) -> Result<bool, ConverterError>;

    /// Parses `text` starting at the byte offset `position`.
    ///
    /// # Errors
    /// Returns `ConverterError::InvalidPosition` if `position > text.len()`.
    fn parse(&self, context: &mut dyn ParseContext, text: &str, position: usize) -> Result<ParseOutcome, ConverterError>;

    /// [`Self::parse`] with the pipeline's integer convention: the next
    /// cursor position on success, `!position` on failure.
    ///
    /// # Errors
    /// Returns `ConverterError::InvalidPosition` if `position` is negative or
    /// past the end of `text`, before anything is matched.
    fn parse_encoded(&self, context: &mut dyn ParseContext, text: &str, position: i64) -> Result<i64, ConverterError> {
        let length = text.len();
        let cursor = usize::try_from(position)
            .ok()
            .filter(|cursor| *cursor <= length)
            .ok_or(ConverterError::InvalidPosition { position, length })?;
        self.parse(context, text, cursor).map(ParseOutcome::encode)
    }
}
