//! Shared helpers for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::{
    DateTimeParseContext, DateTimePrintContext, Field, FieldTextConverter, Locale, LocaleTextStore, TextEntries,
    TextSource, TextStyle,
};

pub fn print_ctx(field: Field, value: i64) -> DateTimePrintContext {
    DateTimePrintContext::new("en").with_value(field, value)
}

pub fn parse_ctx(strict: bool) -> DateTimeParseContext {
    DateTimeParseContext::new("en").with_strict(strict)
}

pub fn english_converter(field: Field, style: TextStyle) -> FieldTextConverter {
    FieldTextConverter::new(field, style, Arc::new(LocaleTextStore::english()))
}

/// Month-of-year converter in the short style over `source`
pub fn fixed_converter(source: FixedTextSource) -> FieldTextConverter {
    FieldTextConverter::new(Field::MonthOfYear, TextStyle::Short, Arc::new(source))
}

/// A source that returns the same candidates for every request, in the
/// given order, and records how it was called.
#[derive(Debug, Default)]
pub struct FixedTextSource {
    texts:          Vec<(i64, String)>,
    entries:        Option<Vec<(String, i64)>>,
    pub calls:      AtomicUsize,
    pub last_style: Mutex<Option<Option<TextStyle>>>,
}

impl FixedTextSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut self, entries: Vec<(&str, i64)>) -> Self {
        self.entries = Some(
            entries
                .into_iter()
                .map(|(text, value)| (text.to_owned(), value))
                .collect(),
        );
        self
    }

    pub fn with_text(mut self, value: i64, text: &str) -> Self {
        self.texts.push((value, text.to_owned()));
        self
    }
}

impl TextSource for FixedTextSource {
    fn text(&self, _field: Field, value: i64, _style: TextStyle, _locale: &Locale) -> Option<&str> {
        let _ = self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, text)| text.as_str())
    }

    fn text_entries(
        &self,
        _field: Field,
        style: Option<TextStyle>,
        _locale: &Locale,
    ) -> Option<TextEntries<'_>> {
        let _ = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_style.lock() {
            *last = Some(style);
        }
        let entries = self.entries.as_ref()?;
        Some(Box::new(entries.iter().map(|(text, value)| (text.as_str(), *value))))
    }
}
