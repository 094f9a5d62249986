use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A calendar quantity whose value a converter prints or parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Field {
    #[display(fmt = "Era")]
    Era,
    #[display(fmt = "YearOfEra")]
    YearOfEra,
    #[display(fmt = "Year")]
    Year,
    #[display(fmt = "QuarterOfYear")]
    QuarterOfYear,
    #[display(fmt = "MonthOfYear")]
    MonthOfYear,
    #[display(fmt = "DayOfMonth")]
    DayOfMonth,
    #[display(fmt = "DayOfWeek")]
    DayOfWeek,
    #[display(fmt = "AmPmOfDay")]
    AmPmOfDay,
    #[display(fmt = "HourOfDay")]
    HourOfDay,
    #[display(fmt = "MinuteOfHour")]
    MinuteOfHour,
}

/// Width and case variant used to select localized text.
///
/// The standalone variants are used when the text appears on its own rather
/// than inside a full date, which matters for languages that inflect month
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextStyle {
    #[display(fmt = "FULL")]
    Full,
    #[display(fmt = "FULL_STANDALONE")]
    FullStandalone,
    #[display(fmt = "SHORT")]
    Short,
    #[display(fmt = "SHORT_STANDALONE")]
    ShortStandalone,
    #[display(fmt = "NARROW")]
    Narrow,
    #[display(fmt = "NARROW_STANDALONE")]
    NarrowStandalone,
}

impl TextStyle {
    /// Every style, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Full,
        Self::FullStandalone,
        Self::Short,
        Self::ShortStandalone,
        Self::Narrow,
        Self::NarrowStandalone,
    ];

    pub const fn is_standalone(self) -> bool {
        matches!(
            self,
            Self::FullStandalone | Self::ShortStandalone | Self::NarrowStandalone
        )
    }

    /// Returns the standalone variant of the same width
    pub const fn as_standalone(self) -> Self {
        match self {
            Self::Full | Self::FullStandalone => Self::FullStandalone,
            Self::Short | Self::ShortStandalone => Self::ShortStandalone,
            Self::Narrow | Self::NarrowStandalone => Self::NarrowStandalone,
        }
    }

    /// Returns the in-context (non-standalone) variant of the same width
    pub const fn as_normal(self) -> Self {
        match self {
            Self::Full | Self::FullStandalone => Self::Full,
            Self::Short | Self::ShortStandalone => Self::Short,
            Self::Narrow | Self::NarrowStandalone => Self::Narrow,
        }
    }
}

/// How a decimal printer-parser handles the sign of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignStyle {
    /// `-` for negative values only; strict parsing rejects `+`
    #[display(fmt = "NORMAL")]
    Normal,
    /// Always a sign
    #[display(fmt = "ALWAYS")]
    Always,
    /// Never a sign, the absolute value is printed
    #[display(fmt = "NEVER")]
    Never,
    /// Negative values are an error
    #[display(fmt = "NOT_NEGATIVE")]
    NotNegative,
    /// `+` once the digits exceed the minimum width
    #[display(fmt = "EXCEEDS_PAD")]
    ExceedsPad,
}

impl SignStyle {
    /// Whether a strict parse may consume a leading `+`
    pub(crate) const fn accepts_plus_strict(self) -> bool {
        matches!(self, Self::Always | Self::ExceedsPad)
    }

    /// Whether a strict parse may consume a leading `-`
    pub(crate) const fn accepts_minus_strict(self) -> bool {
        !matches!(self, Self::Never | Self::NotNegative)
    }
}

/// An opaque locale tag such as `en` or `fr-CA`.
///
/// Converters never interpret it; it is handed to the [`crate::TextSource`] as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self(tag.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_display() {
        assert_eq!(Field::MonthOfYear.to_string(), "MonthOfYear");
        assert_eq!(Field::DayOfWeek.to_string(), "DayOfWeek");
        assert_eq!(Field::AmPmOfDay.to_string(), "AmPmOfDay");
    }

    #[test]
    fn test_text_style_display() {
        assert_eq!(TextStyle::Full.to_string(), "FULL");
        assert_eq!(TextStyle::ShortStandalone.to_string(), "SHORT_STANDALONE");
        assert_eq!(TextStyle::Narrow.to_string(), "NARROW");
    }

    #[test]
    fn test_text_style_variants() {
        struct TestCase {
            style:      TextStyle,
            standalone: TextStyle,
            normal:     TextStyle,
        }

        let cases = [
            TestCase {
                style:      TextStyle::Full,
                standalone: TextStyle::FullStandalone,
                normal:     TextStyle::Full,
            },
            TestCase {
                style:      TextStyle::ShortStandalone,
                standalone: TextStyle::ShortStandalone,
                normal:     TextStyle::Short,
            },
            TestCase {
                style:      TextStyle::Narrow,
                standalone: TextStyle::NarrowStandalone,
                normal:     TextStyle::Narrow,
            },
        ];

        for case in &cases {
            assert_eq!(case.style.as_standalone(), case.standalone, "{}", case.style);
            assert_eq!(case.style.as_normal(), case.normal, "{}", case.style);
            assert!(case.style.as_standalone().is_standalone());
            assert!(!case.style.as_normal().is_standalone());
        }
    }

    #[test]
    fn test_text_style_serde() {
        let json = serde_json::to_string(&TextStyle::NarrowStandalone).unwrap();
        assert_eq!(json, "\"NARROW_STANDALONE\"");

        let parsed: TextStyle = serde_json::from_str("\"SHORT\"").unwrap();
        assert_eq!(parsed, TextStyle::Short);

        let result: Result<TextStyle, _> = serde_json::from_str("\"TINY\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_sign_style_strict_rules() {
        assert!(!SignStyle::Normal.accepts_plus_strict());
        assert!(SignStyle::Normal.accepts_minus_strict());
        assert!(SignStyle::Always.accepts_plus_strict());
        assert!(!SignStyle::NotNegative.accepts_minus_strict());
        assert!(!SignStyle::Never.accepts_minus_strict());
    }

    #[test]
    fn test_locale() {
        let locale = Locale::from("en");
        assert_eq!(locale.as_str(), "en");
        assert_eq!(locale.to_string(), "en");
        assert_eq!(locale, Locale::new(String::from("en")));

        let json = serde_json::to_string(&locale).unwrap();
        assert_eq!(json, "\"en\"");
    }
}
