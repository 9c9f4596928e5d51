//! Contact form model, input screening and validation

use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

/// Validation failure for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Keep this under {max} characters")]
    TooLong {
        /// Maximum accepted length in characters
        max: usize,
    },
}

/// Screen free-form input before storing or echoing it
///
/// Drops control characters and angle brackets, collapses whitespace
/// runs and trims the ends.
pub fn sanitize(input: &str) -> String {
    let stripped: String =
        input.chars().filter(|c| !c.is_control() && *c != '<' && *c != '>').collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reject empty or whitespace-only values
pub fn validate_required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() { Err(FieldError::Required) } else { Ok(()) }
}

/// Reject values that do not look like an email address
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if EMAIL_PATTERN.is_match(value.trim()) { Ok(()) } else { Err(FieldError::InvalidEmail) }
}

/// Reject values longer than `max` characters
pub fn validate_max_length(value: &str, max: usize) -> Result<(), FieldError> {
    if value.chars().count() > max { Err(FieldError::TooLong { max }) } else { Ok(()) }
}

/// The fields of the contact form, in focus-traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in traversal order
    pub fn all() -> &'static [Field] {
        &[Self::Name, Self::Email, Self::Message]
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Maximum accepted length in characters
    pub fn max_len(&self) -> usize {
        match self {
            Self::Name => 100,
            Self::Email => 254,
            Self::Message => 2000,
        }
    }

    /// Next field in traversal order, wrapping around
    pub fn next(&self) -> Field {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// Previous field in traversal order, wrapping around
    pub fn prev(&self) -> Field {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

/// Contact form field storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Read a field by key
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Mutable access to a field by key
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Validate every field, returning the first error per field
    pub fn validate(&self) -> Vec<(Field, FieldError)> {
        let mut errors = Vec::new();

        for field in Field::all() {
            let value = self.field(*field);

            if let Err(err) = validate_required(value) {
                errors.push((*field, err));
                continue;
            }
            if let Err(err) = validate_max_length(value, field.max_len()) {
                errors.push((*field, err));
                continue;
            }
            if *field == Field::Email {
                if let Err(err) = validate_email(value) {
                    errors.push((*field, err));
                }
            }
        }

        errors
    }

    /// Copy of the form with every field screened
    pub fn sanitized(&self) -> ContactForm {
        ContactForm {
            name: sanitize(&self.name),
            email: sanitize(&self.email),
            message: sanitize(&self.message),
        }
    }
}

/// Sliding-window limit on form submissions
#[derive(Debug, Clone)]
pub struct SubmissionLimiter {
    max_submissions: usize,
    window: Duration,
    attempts: Vec<Instant>,
}

impl SubmissionLimiter {
    /// Allow at most `max_submissions` per `window`
    pub fn new(max_submissions: usize, window: Duration) -> Self {
        Self { max_submissions, window, attempts: Vec::new() }
    }

    /// Record a submission attempt; returns false when over the limit
    pub fn try_submit(&mut self, now: Instant) -> bool {
        self.attempts.retain(|at| now.duration_since(*at) < self.window);

        if self.attempts.len() >= self.max_submissions {
            return false;
        }
        self.attempts.push(now);
        true
    }
}

impl Default for SubmissionLimiter {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn sanitize_strips_markup_and_collapses_whitespace() {
        assert_eq!(sanitize("  <script>alert(1)</script>  hi   there "), "scriptalert(1)/script hi there");
        assert_eq!(sanitize("a\tb\nc"), "a b c");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn required_rejects_blank_values() {
        assert_eq!(validate_required(""), Err(FieldError::Required));
        assert_eq!(validate_required("   "), Err(FieldError::Required));
        assert_eq!(validate_required("x"), Ok(()));
    }

    #[test]
    fn email_validation_accepts_plausible_addresses() {
        assert_eq!(validate_email("ada@example.com"), Ok(()));
        assert_eq!(validate_email(" ada@example.com "), Ok(()));
    }

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        for bad in ["", "ada", "ada@", "@example.com", "a b@example.com", "ada@example"] {
            assert_eq!(validate_email(bad), Err(FieldError::InvalidEmail), "accepted {bad:?}");
        }
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        assert_eq!(validate_max_length("ééé", 3), Ok(()));
        assert_eq!(validate_max_length("éééé", 3), Err(FieldError::TooLong { max: 3 }));
    }

    #[test]
    fn validate_reports_one_error_per_field() {
        let form = ContactForm {
            name: String::new(),
            email: "not-an-email".to_string(),
            message: "hello".to_string(),
        };
        let errors = form.validate();
        assert_eq!(
            errors,
            vec![(Field::Name, FieldError::Required), (Field::Email, FieldError::InvalidEmail)]
        );
    }

    #[test]
    fn clean_form_validates_without_errors() {
        let form = ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "I would like to know more about the catalog.".to_string(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn field_traversal_wraps_in_both_directions() {
        assert_eq!(Field::Message.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::Message);
        for field in Field::all() {
            assert_eq!(field.next().prev(), *field);
        }
    }

    #[test]
    fn limiter_allows_up_to_the_cap_within_a_window() {
        let mut limiter = SubmissionLimiter::new(3, Duration::from_secs(60));
        let t0 = Instant::now();

        assert!(limiter.try_submit(t0));
        assert!(limiter.try_submit(t0 + Duration::from_secs(1)));
        assert!(limiter.try_submit(t0 + Duration::from_secs(2)));
        assert!(!limiter.try_submit(t0 + Duration::from_secs(3)));
    }

    #[test]
    fn limiter_frees_slots_once_the_window_slides() {
        let mut limiter = SubmissionLimiter::new(1, Duration::from_secs(10));
        let t0 = Instant::now();

        assert!(limiter.try_submit(t0));
        assert!(!limiter.try_submit(t0 + Duration::from_secs(5)));
        assert!(limiter.try_submit(t0 + Duration::from_secs(10)));
    }

    proptest! {
        #[test]
        fn sanitize_never_leaves_markup_or_control_chars(input in ".*") {
            let cleaned = sanitize(&input);
            prop_assert!(!cleaned.contains('<'));
            prop_assert!(!cleaned.contains('>'));
            prop_assert!(!cleaned.chars().any(|c| c.is_control()));
        }

        #[test]
        fn sanitize_is_idempotent(input in ".*") {
            let once = sanitize(&input);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn max_length_never_passes_oversized_values(value in ".{0,64}", max in 0usize..32) {
            let result = validate_max_length(&value, max);
            if value.chars().count() > max {
                prop_assert_eq!(result, Err(FieldError::TooLong { max }));
            } else {
                prop_assert_eq!(result, Ok(()));
            }
        }
    }
}
