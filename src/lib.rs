//! Prints a date-time field's value as localized text and parses it back,
//! falling back to plain decimals where no text applies.
//!
//! ```
//! use std::sync::Arc;
//!
//! use field_text::{
//!     DateTimeParseContext, DateTimePrintContext, DateTimePrinterParser, Field, FieldTextConverter,
//!     LocaleTextStore, ParseOutcome, TextStyle,
//! };
//!
//! let converter = FieldTextConverter::new(Field::MonthOfYear, TextStyle::Short, Arc::new(LocaleTextStore::english()));
//!
//! let mut buf = String::new();
//! let ctx = DateTimePrintContext::new("en").with_value(Field::MonthOfYear, 3);
//! assert_eq!(converter.print(&ctx, &mut buf), Ok(true));
//! assert_eq!(buf, "Mar");
//!
//! let mut ctx = DateTimeParseContext::new("en");
//! assert_eq!(converter.parse(&mut ctx, "Mar 15", 0), Ok(ParseOutcome::Matched { end: 3, value: 3 }));
//! assert_eq!(ctx.parsed(Field::MonthOfYear), Some(3));
//! ```

mod consts;
mod context;
mod error;
mod number;
mod outcome;
mod prelude;
mod printer_parser;
mod source;
mod text;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use context::{DateTimeParseContext, DateTimePrintContext, ParseContext, PrintContext};
pub use error::ConverterError;
pub use number::NumberPrinterParser;
pub use outcome::ParseOutcome;
pub use printer_parser::DateTimePrinterParser;
pub use source::{LocaleTextStore, TextEntries, TextSource};
pub use text::FieldTextConverter;
pub use types::{Field, Locale, SignStyle, TextStyle};
