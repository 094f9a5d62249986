//! Plain decimal printing and parsing of a field value.

use std::fmt;

use crate::consts::{FALLBACK_MAX_WIDTH, FALLBACK_MIN_WIDTH, MAX_NUMBER_WIDTH};
use crate::{ConverterError, DateTimePrinterParser, Field, ParseContext, ParseOutcome, PrintContext, SignStyle};

/// Prints and parses a field value as decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberPrinterParser {
    field:      Field,
    min_width:  usize,
    max_width:  usize,
    sign_style: SignStyle,
}

impl NumberPrinterParser {
    /// Creates a printer-parser reading `min_width..=max_width` digits.
    ///
    /// # Errors
    /// Returns `ConverterError::InvalidWidth` if a width is outside `1..=19`
    /// or `min_width > max_width`.
    pub fn new(field: Field, min_width: usize, max_width: usize, sign_style: SignStyle) -> Result<Self, ConverterError> {
        if min_width < 1 || max_width > MAX_NUMBER_WIDTH || min_width > max_width {
            return Err(ConverterError::InvalidWidth {
                field,
                min_width,
                max_width,
            });
        }
        Ok(Self {
            field,
            min_width,
            max_width,
            sign_style,
        })
    }

    /// The decimal form used when no text is available: 1 to 19 digits,
    /// `-` on negative values only.
    pub const fn fallback(field: Field) -> Self {
        Self {
            field,
            min_width: FALLBACK_MIN_WIDTH,
            max_width: FALLBACK_MAX_WIDTH,
            sign_style: SignStyle::Normal,
        }
    }

    pub const fn field(&self) -> Field {
        self.field
    }

    pub const fn min_width(&self) -> usize {
        self.min_width
    }

    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    pub const fn sign_style(&self) -> SignStyle {
        self.sign_style
    }

    fn format_value(&self, value: i64) -> Result<String, ConverterError> {
        let digits = value.unsigned_abs().to_string();
        if digits.len() > self.max_width {
            return Err(ConverterError::WidthExceeded {
                field: self.field,
                value,
                max_width: self.max_width,
            });
        }

        let mut out = String::with_capacity(self.max_width + 1);
        if value >= 0 {
            match self.sign_style {
                SignStyle::Always => out.push('+'),
                SignStyle::ExceedsPad if self.min_width < MAX_NUMBER_WIDTH && digits.len() > self.min_width => {
                    out.push('+');
                },
                _ => {},
            }
        } else {
            match self.sign_style {
                SignStyle::Normal | SignStyle::Always | SignStyle::ExceedsPad => out.push('-'),
                SignStyle::NotNegative => {
                    return Err(ConverterError::NegativeNotAllowed {
                        field: self.field,
                        value,
                    });
                },
                SignStyle::Never => {},
            }
        }

        for _ in digits.len()..self.min_width {
            out.push('0');
        }
        out.push_str(&digits);
        Ok(out)
    }
}

impl DateTimePrinterParser for NumberPrinterParser {
    fn print(&self, context: &dyn PrintContext, buf: &mut String) -> Result<bool, ConverterError> {
        let Some(value) = context.value(self.field) else {
            return Ok(false);
        };
        buf.push_str(&self.format_value(value)?);
        Ok(true)
    }

    fn parse(&self, context: &mut dyn ParseContext, text: &str, position: usize) -> Result<ParseOutcome, ConverterError> {
        let length = text.len();
        if position > length {
            return Err(ConverterError::InvalidPosition {
                position: i64::try_from(position).unwrap_or(i64::MAX),
                length,
            });
        }
        let failed = ParseOutcome::NotMatched { position };
        let bytes = text.as_bytes();
        let strict = context.is_strict();

        let mut cursor = position;
        let mut negative = false;
        match bytes.get(cursor) {
            Some(b'+') => {
                if strict && !self.sign_style.accepts_plus_strict() {
                    return Ok(failed);
                }
                cursor += 1;
            },
            Some(b'-') => {
                if strict && !self.sign_style.accepts_minus_strict() {
                    return Ok(failed);
                }
                negative = true;
                cursor += 1;
            },
            Some(_) if strict && self.sign_style == SignStyle::Always => return Ok(failed),
            _ => {},
        }

        let digits_start = cursor;
        let mut total: i64 = 0;
        while cursor - digits_start < self.max_width {
            let Some(digit) = bytes.get(cursor).filter(|b| b.is_ascii_digit()) else {
                break;
            };
            // accumulate negatively so that i64::MIN stays representable
            let Some(next) = total
                .checked_mul(10)
                .and_then(|t| t.checked_sub(i64::from(digit - b'0')))
            else {
                return Ok(failed);
            };
            total = next;
            cursor += 1;
        }

        if cursor - digits_start < self.min_width {
            return Ok(failed);
        }

        let value = if negative {
            if strict && total == 0 {
                // "-0" is not a value
                return Ok(failed);
            }
            total
        } else {
            match total.checked_neg() {
                Some(value) => value,
                None => return Ok(failed),
            }
        };

        Ok(context.set_parsed_field(self.field, value, position, cursor))
    }
}

impl fmt::Display for NumberPrinterParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min_width == FALLBACK_MIN_WIDTH && self.max_width == FALLBACK_MAX_WIDTH && self.sign_style == SignStyle::Normal {
            write!(f, "Value({})", self.field)
        } else if self.min_width == self.max_width && self.sign_style == SignStyle::NotNegative {
            write!(f, "Value({},{})", self.field, self.min_width)
        } else {
            write!(
                f,
                "Value({},{},{},{})",
                self.field, self.min_width, self.max_width, self.sign_style
            )
        }
    }
}
