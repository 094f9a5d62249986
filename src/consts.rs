/// Minimum digit count of the decimal fallback
pub const FALLBACK_MIN_WIDTH: usize = 1;

/// Maximum digit count of the decimal fallback (enough for any `i64`)
pub const FALLBACK_MAX_WIDTH: usize = 19;

/// Upper limit on any width a number printer-parser accepts
pub const MAX_NUMBER_WIDTH: usize = 19;

/// Locale tag of the built-in English text tables
pub const ENGLISH: &str = "en";

/// Month names in English, January first.
pub const MONTHS_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// [`MONTHS_FULL`] abbreviated to 3 letters.
pub const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// [`MONTHS_FULL`] abbreviated to 1 letter.
pub const MONTHS_NARROW: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

/// Weekday names in English, Monday first (ISO-8601 numbering, Monday = 1).
pub const DAYS_FULL: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// [`DAYS_FULL`] abbreviated to 3 letters.
pub const DAYS_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// [`DAYS_FULL`] abbreviated to 1 letter.
pub const DAYS_NARROW: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// Half-day markers, AM = 0
pub const AM_PM: [&str; 2] = ["AM", "PM"];

/// Era names, BCE = 0
pub const ERAS_FULL: [&str; 2] = ["Before Christ", "Anno Domini"];
/// [`ERAS_FULL`] abbreviated
pub const ERAS_SHORT: [&str; 2] = ["BC", "AD"];
/// [`ERAS_FULL`] abbreviated to 1 letter
pub const ERAS_NARROW: [&str; 2] = ["B", "A"];
