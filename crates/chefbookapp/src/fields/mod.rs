//! # Fields
//!
//! A [`Field`] wraps one raw input value together with its parsed form. Every
//! record attribute is stored as a field, and every assignment builds a new one:
//! fields are never edited in place.
//!
//! ## Kinds
//!
//! Validation and parsing are selected by [`FieldKind`] rather than by a type
//! per attribute:
//!
//! | Kind | Rule | Parsed as |
//! |------|------|-----------|
//! | `Identity` | any non-empty string | text |
//! | `Name` | 3 to 40 characters | text |
//! | `Phone` | exactly 10 ASCII digits | text |
//! | `Email` | `local@domain.tld` | text |
//! | `Date` | `DD.MM.YYYY`, a real calendar date | [`NaiveDate`] |
//! | `DateTime` | `DD.MM.YYYY HH:MM` | [`NaiveDateTime`] |
//! | `Address` | 3 to 255 characters, at least two comma-separated parts | text |
//! | `Note` | 3 to 255 characters | text |
//! | `Tag` | see [`tag`] | text |
//!
//! ## Two Ways In
//!
//! - [`Field::new`] validates, then parses. This is the path for user input.
//! - [`Field::trusted`] skips validation. It is the path for data read back
//!   from storage, which may have been written under older rules. Parsing is
//!   still attempted; a value that does not parse is kept verbatim as text so
//!   that it is written back unchanged.
//!
//! [`Field::render`] is the canonical string form. For canonical input,
//! `Field::new(kind, s)?.render() == s`.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

pub mod note;
pub mod tag;

pub use note::Note;
pub use tag::validate_tag_name;

pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 40;
pub const PHONE_LENGTH: usize = 10;
pub const ADDRESS_MIN_LENGTH: usize = 3;
pub const ADDRESS_MAX_LENGTH: usize = 255;
pub const NOTE_MIN_LENGTH: usize = 3;
pub const NOTE_MAX_LENGTH: usize = 255;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid date pattern"));
static DATE_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}$").expect("valid date-time pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Identity,
    Name,
    Phone,
    Email,
    Date,
    DateTime,
    Address,
    Note,
    Tag,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Identity => "id",
            FieldKind::Name => "name",
            FieldKind::Phone => "phone number",
            FieldKind::Email => "email",
            FieldKind::Date => "date",
            FieldKind::DateTime => "date and time",
            FieldKind::Address => "address",
            FieldKind::Note => "note",
            FieldKind::Tag => "tag",
        }
    }

    fn validate(self, raw: &str) -> Result<(), Violation> {
        match self {
            FieldKind::Identity => {
                if raw.is_empty() {
                    return Err(Violation::Empty);
                }
            }
            FieldKind::Name => check_length(raw, NAME_MIN_LENGTH, NAME_MAX_LENGTH)?,
            FieldKind::Phone => {
                if !raw.chars().all(|c| c.is_ascii_digit()) {
                    return Err(Violation::NonDigit);
                }
                if raw.len() != PHONE_LENGTH {
                    return Err(Violation::DigitCount(PHONE_LENGTH));
                }
            }
            FieldKind::Email => {
                if !EMAIL_PATTERN.is_match(raw) {
                    return Err(Violation::Email);
                }
            }
            FieldKind::Date => {
                if parse_date(raw).is_none() {
                    return Err(Violation::Format("DD.MM.YYYY"));
                }
            }
            FieldKind::DateTime => {
                if parse_date_time(raw).is_none() {
                    return Err(Violation::Format("DD.MM.YYYY HH:MM"));
                }
            }
            FieldKind::Address => {
                check_length(raw, ADDRESS_MIN_LENGTH, ADDRESS_MAX_LENGTH)?;
                let parts: Vec<&str> = raw.split(',').collect();
                if parts.len() < 2 || parts.iter().any(|part| part.trim().is_empty()) {
                    return Err(Violation::AddressParts);
                }
            }
            FieldKind::Note => check_length(raw, NOTE_MIN_LENGTH, NOTE_MAX_LENGTH)?,
            FieldKind::Tag => validate_tag_name(raw)?,
        }
        Ok(())
    }

    /// Parses without validating. Kinds that parse to a richer type fall back
    /// to text when the raw value does not parse.
    fn parse(self, raw: &str) -> FieldValue {
        let parsed = match self {
            FieldKind::Date => parse_date(raw).map(FieldValue::Date),
            FieldKind::DateTime => parse_date_time(raw).map(FieldValue::DateTime),
            _ => None,
        };
        parsed.unwrap_or_else(|| FieldValue::Text(raw.to_string()))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn check_length(raw: &str, min: usize, max: usize) -> Result<(), Violation> {
    let len = raw.chars().count();
    if len < min || len > max {
        return Err(Violation::Length { min, max });
    }
    Ok(())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if !DATE_PATTERN.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    if !DATE_TIME_PATTERN.is_match(raw) {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT).ok()
}

/// The constraint a rejected value broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("the value cannot be empty")]
    Empty,

    #[error("it must be between {min} and {max} characters long")]
    Length { min: usize, max: usize },

    #[error("it must contain only digits")]
    NonDigit,

    #[error("it must contain exactly {0} digits")]
    DigitCount(usize),

    #[error("it must be a valid email address")]
    Email,

    #[error("it must use the format {0}")]
    Format(&'static str),

    #[error("it must look like '[Address Line 1], [City], [Country]'")]
    AddressParts,

    #[error("a tag must start with a letter, found '{0}'")]
    TagStart(char),

    #[error("a tag cannot end with a hyphen")]
    TagTrailingHyphen,

    #[error("a tag cannot contain '--'")]
    TagDoubleHyphen,

    #[error("a tag may only use letters, digits, '_' and '-', found '{0}'")]
    TagCharacter(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The {kind} '{value}' was rejected: {violation}")]
pub struct ValidationError {
    pub kind: FieldKind,
    pub value: String,
    pub violation: Violation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    kind: FieldKind,
    raw: String,
    value: FieldValue,
}

impl Field {
    pub fn new(kind: FieldKind, raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if let Err(violation) = kind.validate(&raw) {
            return Err(ValidationError {
                kind,
                value: raw,
                violation,
            });
        }
        Ok(Self::trusted(kind, raw))
    }

    pub fn trusted(kind: FieldKind, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = kind.parse(&raw);
        Self { kind, raw, value }
    }

    /// A fresh, globally unique identity.
    pub fn generate_identity() -> Self {
        Self::trusted(FieldKind::Identity, Uuid::new_v4().to_string())
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self.value {
            FieldValue::Date(date) => Some(date),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self.value {
            FieldValue::DateTime(moment) => Some(moment),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        match &self.value {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Date(date) => date.format(DATE_FORMAT).to_string(),
            FieldValue::DateTime(moment) => moment.format(DATE_TIME_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(kind: FieldKind, raw: &str) -> Violation {
        Field::new(kind, raw).unwrap_err().violation
    }

    #[test]
    fn test_name_length_boundaries() {
        assert!(Field::new(FieldKind::Name, "Al").is_err());
        assert!(Field::new(FieldKind::Name, "Ann").is_ok());
        assert!(Field::new(FieldKind::Name, "a".repeat(40)).is_ok());
        assert_eq!(
            violation(FieldKind::Name, &"a".repeat(41)),
            Violation::Length { min: 3, max: 40 }
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 3 characters, 6 bytes
        assert!(Field::new(FieldKind::Name, "Юля").is_ok());
    }

    #[test]
    fn test_phone_rules() {
        assert!(Field::new(FieldKind::Phone, "0501234567").is_ok());
        assert_eq!(
            violation(FieldKind::Phone, "050123456"),
            Violation::DigitCount(10)
        );
        assert_eq!(
            violation(FieldKind::Phone, "05012345678"),
            Violation::DigitCount(10)
        );
        assert_eq!(violation(FieldKind::Phone, "050123456a"), Violation::NonDigit);
        assert_eq!(violation(FieldKind::Phone, "+380501234"), Violation::NonDigit);
    }

    #[test]
    fn test_email_rules() {
        assert!(Field::new(FieldKind::Email, "chef@example.com").is_ok());
        assert!(Field::new(FieldKind::Email, "first.last+tag@mail.co.uk").is_ok());
        assert_eq!(violation(FieldKind::Email, "chef@example"), Violation::Email);
        assert_eq!(violation(FieldKind::Email, "chef.example.com"), Violation::Email);
        assert_eq!(violation(FieldKind::Email, "chef@example.c"), Violation::Email);
    }

    #[test]
    fn test_date_parses_to_calendar_date() {
        let field = Field::new(FieldKind::Date, "01.01.2000").unwrap();
        assert_eq!(field.as_date(), NaiveDate::from_ymd_opt(2000, 1, 1));
    }

    #[test]
    fn test_date_rejects_other_formats_and_impossible_dates() {
        assert_eq!(
            violation(FieldKind::Date, "2000-01-01"),
            Violation::Format("DD.MM.YYYY")
        );
        assert!(Field::new(FieldKind::Date, "32.01.2000").is_err());
        assert!(Field::new(FieldKind::Date, "29.02.2023").is_err());
        assert!(Field::new(FieldKind::Date, "1.1.2000").is_err());
        assert!(Field::new(FieldKind::Date, "tomorrow").is_err());
    }

    #[test]
    fn test_date_time_rules() {
        let field = Field::new(FieldKind::DateTime, "14.10.2024 19:30").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 10, 14)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        assert_eq!(field.as_date_time(), Some(expected));
        assert!(Field::new(FieldKind::DateTime, "14.10.2024").is_err());
        assert!(Field::new(FieldKind::DateTime, "14.10.2024 25:00").is_err());
    }

    #[test]
    fn test_address_rules() {
        assert!(Field::new(FieldKind::Address, "1 Main St, Kyiv, Ukraine").is_ok());
        assert!(Field::new(FieldKind::Address, "a,b").is_ok());
        assert_eq!(
            violation(FieldKind::Address, "Main Street"),
            Violation::AddressParts
        );
        assert_eq!(
            violation(FieldKind::Address, "Main Street, "),
            Violation::AddressParts
        );
        assert_eq!(
            violation(FieldKind::Address, "ab,"),
            Violation::AddressParts
        );
        assert_eq!(
            violation(FieldKind::Address, "ab"),
            Violation::Length { min: 3, max: 255 }
        );
    }

    #[test]
    fn test_note_length() {
        assert!(Field::new(FieldKind::Note, "12").is_err());
        assert!(Field::new(FieldKind::Note, "here should be some text").is_ok());
        assert!(Field::new(FieldKind::Note, "n".repeat(256)).is_err());
    }

    #[test]
    fn test_identity_rules() {
        assert!(Field::new(FieldKind::Identity, "abc").is_ok());
        assert_eq!(violation(FieldKind::Identity, ""), Violation::Empty);
        let blank = Field::new(FieldKind::Identity, "   ").unwrap();
        assert_eq!(blank.raw(), "   ");
    }

    #[test]
    fn test_generated_identities_are_unique() {
        let a = Field::generate_identity();
        let b = Field::generate_identity();
        assert_ne!(a.raw(), b.raw());
        assert!(Uuid::parse_str(a.raw()).is_ok());
    }

    #[test]
    fn test_render_is_inverse_of_parse_for_canonical_input() {
        let cases = [
            (FieldKind::Date, "07.03.1991"),
            (FieldKind::DateTime, "31.12.2024 23:59"),
            (FieldKind::Phone, "0931112233"),
            (FieldKind::Email, "ann@kitchen.io"),
            (FieldKind::Name, "Ann Smith"),
            (FieldKind::Address, "5 Oak Rd, Lviv, Ukraine"),
            (FieldKind::Note, "prefers the window table"),
        ];
        for (kind, raw) in cases {
            assert_eq!(Field::new(kind, raw).unwrap().render(), raw, "{kind}");
        }
    }

    #[test]
    fn test_trusted_keeps_invalid_values_verbatim() {
        let name = Field::trusted(FieldKind::Name, "Al");
        assert_eq!(name.render(), "Al");

        let date = Field::trusted(FieldKind::Date, "2000-01-01");
        assert_eq!(date.as_date(), None);
        assert_eq!(date.render(), "2000-01-01");
    }

    #[test]
    fn test_trusted_still_parses_valid_dates() {
        let date = Field::trusted(FieldKind::Date, "15.06.1990");
        assert_eq!(date.as_date(), NaiveDate::from_ymd_opt(1990, 6, 15));
    }

    #[test]
    fn test_error_message_names_value_and_rule() {
        let err = Field::new(FieldKind::Phone, "123").unwrap_err();
        assert_eq!(
            err.to_string(),
            "The phone number '123' was rejected: it must contain exactly 10 digits"
        );
    }
}
