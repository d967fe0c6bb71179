//! Form validation.
//!
//! Invalid input is not an error: the action re-renders its view with a [`ModelState`]
//! holding one message per invalid field.

use std::sync::LazyLock;

use regex::Regex;

pub const NAME_MAX_LENGTH: usize = 50;
pub const JOB_TITLE_MAX_LENGTH: usize = 450;
pub const CONSULTANCY_NAME_MAX_LENGTH: usize = 160;
pub const ADDITIONAL_INFORMATION_MAX_LENGTH: usize = 450;
pub const ADDRESS_LINE_MAX_LENGTH: usize = 100;
pub const TELEPHONE_MAX_LENGTH: usize = 20;
pub const POSTCODE_MAX_LENGTH: usize = 10;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
        .expect("email pattern is valid")
});

static UK_POSTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[A-Z]{1,2}[0-9][A-Z0-9]?\s*[0-9][A-Z]{2}$").expect("postcode pattern is valid")
});

static TELEPHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9 ()-]{10,20}$").expect("telephone pattern is valid")
});

/// A single validation failure for a form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validation messages collected for one form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelState {
    errors: Vec<FieldError>,
}

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` against `field`. Only the first message per field is kept.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if self.error_for(field).is_none() {
            self.errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Requires a non-blank value no longer than `max_length` characters.
    ///
    /// Returns the trimmed value so callers store what was validated.
    pub fn require(
        &mut self,
        field: &'static str,
        value: Option<&str>,
        label: &str,
        max_length: usize,
    ) -> String {
        let value = value.map(str::trim).unwrap_or_default();

        if value.is_empty() {
            self.add(field, format!("Enter {}", label));
        } else if value.chars().count() > max_length {
            self.add(
                field,
                format!("{} must be {} characters or less", capitalise(label), max_length),
            );
        }

        value.to_string()
    }

    /// Like [`ModelState::require`] but an empty value is allowed.
    pub fn optional(
        &mut self,
        field: &'static str,
        value: Option<&str>,
        label: &str,
        max_length: usize,
    ) -> Option<String> {
        let value = value.map(str::trim).filter(|value| !value.is_empty())?;

        if value.chars().count() > max_length {
            self.add(
                field,
                format!("{} must be {} characters or less", capitalise(label), max_length),
            );
        }

        Some(value.to_string())
    }
}

fn capitalise(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn is_valid_email(value: &str) -> bool {
    value.len() <= 254 && EMAIL.is_match(value)
}

pub fn is_valid_uk_postcode(value: &str) -> bool {
    UK_POSTCODE.is_match(value.trim())
}

/// Telephone numbers may contain spaces, brackets and dashes but need at least ten digits.
pub fn is_valid_telephone(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();

    TELEPHONE.is_match(value.trim()) && (10..=15).contains(&digits)
}

/// Upper-cases a postcode and normalises the space before the inward code.
pub fn normalise_postcode(value: &str) -> String {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if compact.len() > 3 {
        let (outward, inward) = compact.split_at(compact.len() - 3);
        format!("{} {}", outward, inward)
    } else {
        compact
    }
}
