//! Field values as localized text, with a decimal fallback.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::{
    ConverterError, DateTimePrinterParser, Field, NumberPrinterParser, ParseContext, ParseOutcome, PrintContext,
    TextSource, TextStyle,
};

/// Prints or parses the text of one field.
///
/// Values without registered text are printed as plain decimals, and a
/// lenient parse that finds no matching text reads a decimal instead.
pub struct FieldTextConverter {
    field:    Field,
    style:    TextStyle,
    source:   Arc<dyn TextSource>,
    fallback: OnceLock<NumberPrinterParser>,
}

impl FieldTextConverter {
    /// Field, style and source are taken as given; callers validate them.
    pub fn new(field: Field, style: TextStyle, source: Arc<dyn TextSource>) -> Self {
        Self {
            field,
            style,
            source,
            fallback: OnceLock::new(),
        }
    }

    pub const fn field(&self) -> Field {
        self.field
    }

    pub const fn text_style(&self) -> TextStyle {
        self.style
    }

    pub fn source(&self) -> &Arc<dyn TextSource> {
        &self.source
    }

    /// The decimal printer-parser used when no text applies.
    ///
    /// Built once, on first use, even when called from several threads.
    pub fn number_printer_parser(&self) -> &NumberPrinterParser {
        self.fallback.get_or_init(|| {
            tracing::debug!(field = %self.field, "building decimal fallback");
            NumberPrinterParser::fallback(self.field)
        })
    }
}

impl DateTimePrinterParser for FieldTextConverter {
    fn print(&self, context: &dyn PrintContext, buf: &mut String) -> Result<bool, ConverterError> {
        let Some(value) = context.value(self.field) else {
            return Ok(false);
        };
        match self.source.text(self.field, value, self.style, context.locale()) {
            Some(text) => {
                buf.push_str(text);
                Ok(true)
            },
            None => {
                tracing::trace!(field = %self.field, value, style = %self.style, "no text, printing number");
                self.number_printer_parser().print(context, buf)
            },
        }
    }

    fn parse(&self, context: &mut dyn ParseContext, text: &str, position: usize) -> Result<ParseOutcome, ConverterError> {
        let length = text.len();
        if position > length {
            return Err(ConverterError::InvalidPosition {
                position: i64::try_from(position).unwrap_or(i64::MAX),
                length,
            });
        }

        let strict = context.is_strict();
        let style = strict.then_some(self.style);
        if let Some(entries) = self.source.text_entries(self.field, style, context.locale()) {
            for (candidate, value) in entries {
                if context.sub_sequence_equals(candidate, 0, text, position, candidate.len()) {
                    return Ok(context.set_parsed_field(self.field, value, position, position + candidate.len()));
                }
            }
        }

        if strict {
            tracing::trace!(field = %self.field, position, "no text matched");
            return Ok(ParseOutcome::NotMatched { position });
        }
        tracing::trace!(field = %self.field, position, "no text matched, parsing number");
        self.number_printer_parser().parse(context, text, position)
    }
}

impl fmt::Debug for FieldTextConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldTextConverter")
            .field("field", &self.field)
            .field("style", &self.style)
            .field("fallback", &self.fallback.get())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FieldTextConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style == TextStyle::Full {
            write!(f, "Text({})", self.field)
        } else {
            write!(f, "Text({},{})", self.field, self.style)
        }
    }
}
