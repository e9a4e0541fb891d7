//! Field-error accumulation shared by every entity validator.
//!
//! A validator records at most one message per field: the first violation
//! wins and later ones for the same field are dropped. Fields are checked
//! independently, so one bad field never hides another.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

use super::error::AppError;

pub const MSG_EMPTY: &str = "is empty";
pub const MSG_INVALID: &str = "is invalid";
pub const MSG_INVALID_EMAIL: &str = "is not a valid email format";
pub const MSG_FUTURE_DATE: &str = "cannot be in the future";

pub fn too_long_message(max: usize) -> String {
    format!("must be less than {} characters", max)
}

/// Keyed collection of field errors, first message per field wins
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already failed
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.errors
    }

    /// Required text: non-empty and at most `max` characters
    pub fn check_required_text(&mut self, field: &str, value: &str, max: usize) {
        if value.is_empty() {
            self.add(field, MSG_EMPTY);
        } else if char_len(value) > max {
            self.add(field, too_long_message(max));
        }
    }

    /// Optional text: only the length bound applies
    pub fn check_max_len(&mut self, field: &str, value: &str, max: usize) {
        if char_len(value) > max {
            self.add(field, too_long_message(max));
        }
    }

    pub fn check_id(&mut self, field: &str, value: Uuid) {
        if value.is_nil() {
            self.add(field, MSG_EMPTY);
        }
    }

    pub fn check_not_future(&mut self, field: &str, value: NaiveDate, today: NaiveDate) {
        if value > today {
            self.add(field, MSG_FUTURE_DATE);
        }
    }
}

/// Entity validators compose over a [`FieldErrors`] and inherit reporting.
pub trait Validator {
    fn field_errors(&self) -> &FieldErrors;

    fn into_field_errors(self) -> FieldErrors;

    fn has_errors(&self) -> bool {
        self.field_errors().has_errors()
    }

    fn errors(&self) -> &BTreeMap<String, String> {
        self.field_errors().errors()
    }

    /// Fail with an aggregated validation error tagged with `origin`
    fn finish(self, origin: &str) -> Result<(), AppError>
    where
        Self: Sized,
    {
        let errors = self.into_field_errors();
        if errors.has_errors() {
            return Err(AppError::validation(origin, errors.into_inner()));
        }
        Ok(())
    }
}

pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Trim in place, the convention for every incoming text field
pub fn trimmed(value: &str) -> String {
    value.trim().to_string()
}
