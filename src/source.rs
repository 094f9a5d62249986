//! Providers of localized field text.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{
    AM_PM, DAYS_FULL, DAYS_NARROW, DAYS_SHORT, ENGLISH, ERAS_FULL, ERAS_NARROW, ERAS_SHORT,
    MONTHS_FULL, MONTHS_NARROW, MONTHS_SHORT,
};
use crate::{Field, Locale, TextStyle};

/// Candidate `(text, value)` pairs in match priority order.
pub type TextEntries<'a> = Box<dyn Iterator<Item = (&'a str, i64)> + 'a>;

/// Read-only source of localized text for field values.
///
/// Shared between threads by converters, so implementations must tolerate
/// concurrent reads.
pub trait TextSource: Send + Sync {
    /// Text for one value, or `None` if nothing is registered.
    fn text(&self, field: Field, value: i64, style: TextStyle, locale: &Locale) -> Option<&str>;

    /// Candidates for parsing, earlier entries winning over later ones.
    ///
    /// `style` of `None` asks for candidates of every style.
    fn text_entries(
        &self,
        field: Field,
        style: Option<TextStyle>,
        locale: &Locale,
    ) -> Option<TextEntries<'_>>;
}

type StyleTexts = BTreeMap<TextStyle, BTreeMap<i64, String>>;

/// In-memory text tables keyed by locale, field and style.
///
/// Serializes as `{ locale: { field: { style: { value: text } } } }`, so
/// tables can be loaded from any serde format. Parse candidates come out
/// longest text first; a text that maps to more than one value within the
/// requested styles is not offered for parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTextStore {
    locales: BTreeMap<Locale, BTreeMap<Field, StyleTexts>>,
}

impl LocaleTextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers texts for `field` in `style`, replacing texts already
    /// registered for the same values.
    #[must_use]
    pub fn with_texts<I, S>(mut self, locale: impl Into<Locale>, field: Field, style: TextStyle, texts: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let table = self
            .locales
            .entry(locale.into())
            .or_default()
            .entry(field)
            .or_default()
            .entry(style)
            .or_default();
        table.extend(texts.into_iter().map(|(value, text)| (value, text.into())));
        self
    }

    /// English month, weekday, half-day and era names under the `en` locale.
    pub fn english() -> Self {
        Self::new()
            .with_width_texts(Field::MonthOfYear, TextStyle::Full, &MONTHS_FULL)
            .with_width_texts(Field::MonthOfYear, TextStyle::Short, &MONTHS_SHORT)
            .with_width_texts(Field::MonthOfYear, TextStyle::Narrow, &MONTHS_NARROW)
            .with_width_texts(Field::DayOfWeek, TextStyle::Full, &DAYS_FULL)
            .with_width_texts(Field::DayOfWeek, TextStyle::Short, &DAYS_SHORT)
            .with_width_texts(Field::DayOfWeek, TextStyle::Narrow, &DAYS_NARROW)
            .with_zero_based_texts(Field::AmPmOfDay, TextStyle::Full, &AM_PM)
            .with_zero_based_texts(Field::AmPmOfDay, TextStyle::Short, &AM_PM)
            .with_zero_based_texts(Field::Era, TextStyle::Full, &ERAS_FULL)
            .with_zero_based_texts(Field::Era, TextStyle::Short, &ERAS_SHORT)
            .with_zero_based_texts(Field::Era, TextStyle::Narrow, &ERAS_NARROW)
    }

    /// Same texts in the in-context and standalone variant, values from 1.
    fn with_width_texts(self, field: Field, style: TextStyle, names: &[&str]) -> Self {
        let numbered = || (1_i64..).zip(names.iter().copied());
        self.with_texts(ENGLISH, field, style.as_normal(), numbered())
            .with_texts(ENGLISH, field, style.as_standalone(), numbered())
    }

    /// Same texts in the in-context and standalone variant, values from 0.
    fn with_zero_based_texts(self, field: Field, style: TextStyle, names: &[&str]) -> Self {
        let numbered = || (0_i64..).zip(names.iter().copied());
        self.with_texts(ENGLISH, field, style.as_normal(), numbered())
            .with_texts(ENGLISH, field, style.as_standalone(), numbered())
    }

    fn styles(&self, field: Field, locale: &Locale) -> Option<&StyleTexts> {
        self.locales.get(locale)?.get(&field)
    }
}

impl TextSource for LocaleTextStore {
    fn text(&self, field: Field, value: i64, style: TextStyle, locale: &Locale) -> Option<&str> {
        self.styles(field, locale)?
            .get(&style)?
            .get(&value)
            .map(String::as_str)
    }

    fn text_entries(
        &self,
        field: Field,
        style: Option<TextStyle>,
        locale: &Locale,
    ) -> Option<TextEntries<'_>> {
        let styles = self.styles(field, locale)?;
        let tables: Vec<&BTreeMap<i64, String>> = match style {
            Some(style) => vec![styles.get(&style)?],
            None => styles.values().collect(),
        };

        // None marks a text claimed by two different values
        let mut reverse: BTreeMap<&str, Option<i64>> = BTreeMap::new();
        for (value, text) in tables.into_iter().flatten() {
            let _ = reverse
                .entry(text.as_str())
                .and_modify(|seen| {
                    if *seen != Some(*value) {
                        *seen = None;
                    }
                })
                .or_insert(Some(*value));
        }

        let mut entries: Vec<(&str, i64)> = reverse
            .into_iter()
            .filter_map(|(text, value)| value.map(|value| (text, value)))
            .collect();
        entries.sort_by_key(|(text, _)| Reverse(text.len()));

        Some(Box::new(entries.into_iter()))
    }
}
