//! Per-call state handed to printer-parsers by the formatting pipeline.

use std::collections::HashMap;

use crate::{Field, Locale, ParseOutcome};

/// State read while printing.
pub trait PrintContext {
    /// The field's value, or `None` if it is not resolved yet.
    fn value(&self, field: Field) -> Option<i64>;

    fn locale(&self) -> &Locale;
}

/// Cursor state while parsing.
pub trait ParseContext {
    /// Whether unmatched text is a hard failure rather than a reason to try
    /// another strategy.
    fn is_strict(&self) -> bool;

    fn locale(&self) -> &Locale;

    /// Compares `length` bytes of `candidate` from `candidate_offset` against
    /// `text` from `text_offset`.
    fn sub_sequence_equals(
        &self,
        candidate: &str,
        candidate_offset: usize,
        text: &str,
        text_offset: usize,
        length: usize,
    ) -> bool;

    /// Commits a parsed value spanning `start..end`.
    ///
    /// Returns [`ParseOutcome::Matched`] ending at `end` on success.
    fn set_parsed_field(&mut self, field: Field, value: i64, start: usize, end: usize) -> ParseOutcome;
}

/// Print state backed by a map of field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimePrintContext {
    locale: Locale,
    values: HashMap<Field, i64>,
}

impl DateTimePrintContext {
    pub fn new(locale: impl Into<Locale>) -> Self {
        Self {
            locale: locale.into(),
            values: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, field: Field, value: i64) -> Self {
        let _ = self.values.insert(field, value);
        self
    }
}

impl PrintContext for DateTimePrintContext {
    fn value(&self, field: Field) -> Option<i64> {
        self.values.get(&field).copied()
    }

    fn locale(&self) -> &Locale {
        &self.locale
    }
}

/// Parse state collecting the fields matched so far.
///
/// Strict and case sensitive unless configured otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeParseContext {
    locale:         Locale,
    strict:         bool,
    case_sensitive: bool,
    parsed:         HashMap<Field, i64>,
}

impl DateTimeParseContext {
    pub fn new(locale: impl Into<Locale>) -> Self {
        Self {
            locale:         locale.into(),
            strict:         true,
            case_sensitive: true,
            parsed:         HashMap::new(),
        }
    }

    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub const fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Value committed for `field`, if any
    pub fn parsed(&self, field: Field) -> Option<i64> {
        self.parsed.get(&field).copied()
    }

    pub fn parsed_fields(&self) -> &HashMap<Field, i64> {
        &self.parsed
    }
}

impl ParseContext for DateTimeParseContext {
    fn is_strict(&self) -> bool {
        self.strict
    }

    fn locale(&self) -> &Locale {
        &self.locale
    }

    fn sub_sequence_equals(
        &self,
        candidate: &str,
        candidate_offset: usize,
        text: &str,
        text_offset: usize,
        length: usize,
    ) -> bool {
        let (Some(candidate_end), Some(text_end)) =
            (candidate_offset.checked_add(length), text_offset.checked_add(length))
        else {
            return false;
        };
        let (Some(left), Some(right)) = (
            candidate.get(candidate_offset..candidate_end),
            text.get(text_offset..text_end),
        ) else {
            return false;
        };

        if self.case_sensitive {
            left == right
        } else {
            let mut left = left.chars();
            let mut right = right.chars();
            loop {
                match (left.next(), right.next()) {
                    (None, None) => return true,
                    (Some(a), Some(b)) if a == b || chars_equal_ignore_case(a, b) => {},
                    _ => return false,
                }
            }
        }
    }

    fn set_parsed_field(&mut self, field: Field, value: i64, start: usize, end: usize) -> ParseOutcome {
        match self.parsed.insert(field, value) {
            Some(previous) if previous != value => {
                // keep the first value, the second parse conflicts with it
                let _ = self.parsed.insert(field, previous);
                tracing::trace!(%field, previous, value, start, "conflicting parsed value");
                ParseOutcome::NotMatched { position: start }
            },
            _ => ParseOutcome::Matched { end, value },
        }
    }
}

fn chars_equal_ignore_case(a: char, b: char) -> bool {
    a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}
