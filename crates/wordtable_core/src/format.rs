//! Locale-bound number and timestamp formatting.
//!
//! Rendering never formats numbers itself; it goes through a
//! [`DisplayFormatter`] so tests and alternate locales can swap it out.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const ARABIC_THOUSANDS_SEPARATOR: char = '٬';
const ARABIC_LETTER_MARK: char = '\u{061C}';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale tag {0:?}")]
pub struct LocaleError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    EnUs,
    ArIq,
    CkbIq,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::ArIq => "ar-IQ",
            Locale::CkbIq => "ckb-IQ",
        }
    }

    fn uses_arabic_digits(self) -> bool {
        !matches!(self, Locale::EnUs)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "ar-iq" => Ok(Locale::ArIq),
            "ckb-iq" | "ckb" => Ok(Locale::CkbIq),
            _ => Err(LocaleError(tag.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Formatting capability handed to renderers.
pub trait DisplayFormatter {
    fn number(&self, value: i64) -> String;
    fn timestamp(&self, value: &NaiveDateTime) -> String;

    fn count(&self, value: u64) -> String {
        self.number(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// Formatter with separate locales for numerals and timestamps, mirroring how
/// the review page formats counts in `ar-IQ` and dates in `ckb-IQ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormatter {
    numbers: Locale,
    dates: Locale,
}

impl LocaleFormatter {
    pub fn new(numbers: Locale, dates: Locale) -> Self {
        Self { numbers, dates }
    }

    pub fn from_tags(numbers: &str, dates: &str) -> Result<Self, LocaleError> {
        Ok(Self::new(numbers.parse()?, dates.parse()?))
    }
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::new(Locale::ArIq, Locale::CkbIq)
    }
}

impl DisplayFormatter for LocaleFormatter {
    fn number(&self, value: i64) -> String {
        let separator = if self.numbers.uses_arabic_digits() {
            ARABIC_THOUSANDS_SEPARATOR
        } else {
            ','
        };
        let grouped = group_digits(value.unsigned_abs(), separator);
        let body = localize_digits(&grouped, self.numbers);
        match (value < 0, self.numbers.uses_arabic_digits()) {
            (false, _) => body,
            (true, false) => format!("-{body}"),
            (true, true) => format!("{ARABIC_LETTER_MARK}-{body}"),
        }
    }

    fn timestamp(&self, value: &NaiveDateTime) -> String {
        let pattern = match self.dates {
            Locale::EnUs => "%-m/%-d/%y, %-I:%M %p",
            Locale::ArIq => "%-d/%-m/%Y %H:%M",
            Locale::CkbIq => "%Y/%-m/%-d %H:%M",
        };
        localize_digits(&value.format(pattern).to_string(), self.dates)
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn localize_digits(text: &str, locale: Locale) -> String {
    if !locale.uses_arabic_digits() {
        return text.to_string();
    }
    text.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(d) => ARABIC_INDIC_DIGITS[d as usize],
            None => ch,
        })
        .collect()
}
