//! Locale-sensitive symbols consumed while parsing
//!
//! Every component that needs a separator, sign or calendar name asks a
//! [`SymbolContext`]. The parser never caches these answers between parse
//! calls, so swapping the context between calls takes effect immediately.

use chrono::{Datelike, Local};

/// Read-only capability set supplying locale symbols to the parser
pub trait SymbolContext {
    /// Decimal separator (`.` in en-US, `,` in de-DE)
    fn decimal_separator(&self) -> char;

    /// Thousands separator (`,` in en-US, `.` in de-DE)
    fn group_separator(&self) -> char;

    /// Currency symbol matched for `$` in a pattern
    fn currency_symbol(&self) -> &str;

    /// Percent symbol matched for `%` in a pattern
    fn percent_symbol(&self) -> char;

    /// Exponent marker; matched case-insensitively
    fn exponent_symbol(&self) -> &str;

    fn positive_sign(&self) -> char;

    fn negative_sign(&self) -> char;

    /// First glyph of a contiguous range of ten digit glyphs
    fn zero_digit(&self) -> char;

    /// Full month names, January first
    fn month_names(&self) -> &[String];

    /// Abbreviated month names, January first
    fn month_name_abbreviations(&self) -> &[String];

    /// Full weekday names, Monday first
    fn day_names(&self) -> &[String];

    /// Abbreviated weekday names, Monday first
    fn day_name_abbreviations(&self) -> &[String];

    /// Ante/post meridiem markers, in that order
    fn am_pms(&self) -> &[String];

    /// Year used when a pattern has no year field
    fn default_year(&self) -> i32;

    /// Window used to resolve two-digit years
    fn two_digit_year_window(&self) -> YearWindow;

    /// Numeric value of `c` if it lies in the context's digit range
    fn digit_value(&self, c: char) -> Option<u32> {
        let offset = (c as u32).checked_sub(self.zero_digit() as u32)?;
        (offset < 10).then_some(offset)
    }
}

/// Sliding 100-year window for resolving two-digit years.
///
/// A two-digit year resolves to the single year in
/// `[reference_year - (100 - years_forward), reference_year + years_forward - 1]`
/// that ends in the same two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearWindow {
    pub reference_year: i32,
    pub years_forward: i32,
}

impl YearWindow {
    /// Default number of years the window reaches past the reference year
    pub const DEFAULT_YEARS_FORWARD: i32 = 20;

    pub fn new(reference_year: i32, years_forward: i32) -> Self {
        Self {
            reference_year,
            years_forward: years_forward.clamp(0, 100),
        }
    }

    /// Window anchored at the current calendar year
    pub fn current() -> Self {
        Self::new(Local::now().year(), Self::DEFAULT_YEARS_FORWARD)
    }

    /// First year of the window (inclusive)
    pub fn start(&self) -> i32 {
        self.reference_year - (100 - self.years_forward)
    }

    /// Last year of the window (inclusive)
    pub fn end(&self) -> i32 {
        self.start() + 99
    }

    /// Resolve a two-digit year (`0..=99`) into the window
    pub fn resolve(&self, two_digit: u32) -> i32 {
        let start = self.start();
        start + (two_digit as i32 - start).rem_euclid(100)
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::current()
    }
}

/// Concrete symbol tables; the default is en-US
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbols {
    pub decimal_separator: char,
    pub group_separator: char,
    pub currency_symbol: String,
    pub percent_symbol: char,
    pub exponent_symbol: String,
    pub positive_sign: char,
    pub negative_sign: char,
    pub zero_digit: char,
    pub month_names: Vec<String>,
    pub month_name_abbreviations: Vec<String>,
    pub day_names: Vec<String>,
    pub day_name_abbreviations: Vec<String>,
    pub am_pms: Vec<String>,
    /// `None` means the current calendar year
    pub default_year: Option<i32>,
    /// `None` means [`YearWindow::current`]
    pub year_window: Option<YearWindow>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Symbols {
    pub fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            currency_symbol: "$".into(),
            percent_symbol: '%',
            exponent_symbol: "E".into(),
            positive_sign: '+',
            negative_sign: '-',
            zero_digit: '0',
            month_names: owned(&[
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
            ]),
            month_name_abbreviations: owned(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            day_names: owned(&[
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ]),
            day_name_abbreviations: owned(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
            am_pms: owned(&["AM", "PM"]),
            default_year: None,
            year_window: None,
        }
    }

    pub fn de_de() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '.',
            currency_symbol: "€".into(),
            month_names: owned(&[
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ]),
            month_name_abbreviations: owned(&[
                "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
            ]),
            day_names: owned(&[
                "Montag",
                "Dienstag",
                "Mittwoch",
                "Donnerstag",
                "Freitag",
                "Samstag",
                "Sonntag",
            ]),
            day_name_abbreviations: owned(&["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]),
            ..Self::en_us()
        }
    }

    pub fn fr_fr() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '\u{00A0}',
            currency_symbol: "€".into(),
            month_names: owned(&[
                "janvier",
                "février",
                "mars",
                "avril",
                "mai",
                "juin",
                "juillet",
                "août",
                "septembre",
                "octobre",
                "novembre",
                "décembre",
            ]),
            month_name_abbreviations: owned(&[
                "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
                "nov.", "déc.",
            ]),
            day_names: owned(&[
                "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
            ]),
            day_name_abbreviations: owned(&[
                "lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim.",
            ]),
            ..Self::en_us()
        }
    }

    /// Look up a preset by locale tag (`en-US`, `de_DE`, ...)
    pub fn for_locale(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Some(Self::en_us()),
            "de" | "de-de" => Some(Self::de_de()),
            "fr" | "fr-fr" => Some(Self::fr_fr()),
            _ => None,
        }
    }

    pub fn with_decimal_separator(mut self, c: char) -> Self {
        self.decimal_separator = c;
        self
    }

    pub fn with_group_separator(mut self, c: char) -> Self {
        self.group_separator = c;
        self
    }

    pub fn with_currency_symbol<S: Into<String>>(mut self, symbol: S) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_percent_symbol(mut self, c: char) -> Self {
        self.percent_symbol = c;
        self
    }

    pub fn with_exponent_symbol<S: Into<String>>(mut self, symbol: S) -> Self {
        self.exponent_symbol = symbol.into();
        self
    }

    pub fn with_signs(mut self, positive: char, negative: char) -> Self {
        self.positive_sign = positive;
        self.negative_sign = negative;
        self
    }

    pub fn with_zero_digit(mut self, c: char) -> Self {
        self.zero_digit = c;
        self
    }

    pub fn with_month_names(mut self, names: Vec<String>, abbreviations: Vec<String>) -> Self {
        self.month_names = names;
        self.month_name_abbreviations = abbreviations;
        self
    }

    pub fn with_day_names(mut self, names: Vec<String>, abbreviations: Vec<String>) -> Self {
        self.day_names = names;
        self.day_name_abbreviations = abbreviations;
        self
    }

    pub fn with_am_pms<S: Into<String>>(mut self, am: S, pm: S) -> Self {
        self.am_pms = vec![am.into(), pm.into()];
        self
    }

    pub fn with_default_year(mut self, year: i32) -> Self {
        self.default_year = Some(year);
        self
    }

    pub fn with_year_window(mut self, window: YearWindow) -> Self {
        self.year_window = Some(window);
        self
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::en_us()
    }
}

impl SymbolContext for Symbols {
    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    fn group_separator(&self) -> char {
        self.group_separator
    }

    fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    fn percent_symbol(&self) -> char {
        self.percent_symbol
    }

    fn exponent_symbol(&self) -> &str {
        &self.exponent_symbol
    }

    fn positive_sign(&self) -> char {
        self.positive_sign
    }

    fn negative_sign(&self) -> char {
        self.negative_sign
    }

    fn zero_digit(&self) -> char {
        self.zero_digit
    }

    fn month_names(&self) -> &[String] {
        &self.month_names
    }

    fn month_name_abbreviations(&self) -> &[String] {
        &self.month_name_abbreviations
    }

    fn day_names(&self) -> &[String] {
        &self.day_names
    }

    fn day_name_abbreviations(&self) -> &[String] {
        &self.day_name_abbreviations
    }

    fn am_pms(&self) -> &[String] {
        &self.am_pms
    }

    fn default_year(&self) -> i32 {
        self.default_year.unwrap_or_else(|| Local::now().year())
    }

    fn two_digit_year_window(&self) -> YearWindow {
        self.year_window.unwrap_or_else(YearWindow::current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_window_bounds() {
        let window = YearWindow::new(2000, 20);
        assert_eq!(window.start(), 1920);
        assert_eq!(window.end(), 2019);
    }

    #[test]
    fn test_year_window_resolve() {
        let window = YearWindow::new(2000, 20);
        assert_eq!(window.resolve(39), 1939);
        assert_eq!(window.resolve(19), 2019);
        assert_eq!(window.resolve(20), 1920);
        assert_eq!(window.resolve(80), 1980);
        assert_eq!(window.resolve(0), 2000);
    }

    #[test]
    fn test_year_window_tracks_reference_year() {
        let window = YearWindow::new(1900, 20);
        assert_eq!(window.resolve(19), 1919);
        assert_eq!(window.resolve(20), 1820);
        assert_eq!(window.resolve(99), 1899);
    }

    #[test]
    fn test_digit_value_ascii() {
        let symbols = Symbols::en_us();
        assert_eq!(symbols.digit_value('0'), Some(0));
        assert_eq!(symbols.digit_value('9'), Some(9));
        assert_eq!(symbols.digit_value('a'), None);
        assert_eq!(symbols.digit_value('/'), None);
    }

    #[test]
    fn test_digit_value_arabic_indic() {
        let symbols = Symbols::en_us().with_zero_digit('\u{0660}');
        assert_eq!(symbols.digit_value('\u{0663}'), Some(3));
        assert_eq!(symbols.digit_value('3'), None);
    }

    #[test]
    fn test_fixed_default_year() {
        let symbols = Symbols::en_us().with_default_year(1999);
        assert_eq!(symbols.default_year(), 1999);
    }

    #[test]
    fn test_locale_presets() {
        let de = Symbols::for_locale("de_DE").unwrap();
        assert_eq!(de.decimal_separator(), ',');
        assert_eq!(de.group_separator(), '.');
        assert_eq!(de.month_names()[2], "März");
        assert!(Symbols::for_locale("xx-YY").is_none());
    }
}
