//! Declarative field validation for request structs.
//!
//! Rules are chained on a `Validator`; every field is checked and all
//! violations are reported together. A field reports only its first failing
//! rule. Optional rules (`one_of`, `max`, `timestamp`, ...) skip absent and
//! empty values; use `required` to demand presence.

use url::Url;

use crate::error::{ApiError, FieldError, ValidationErrors};

pub const BLANK: &str = "cannot be blank";
pub const INVALID_VALUE: &str = "must be a valid value";
pub const INVALID_TIMESTAMP: &str = "must be a valid Unix timestamp";
pub const INVALID_URL: &str = "must be a valid URL";

#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(mut self, field: &'static str, message: impl Into<String>) -> Self {
        if !self.errors.iter().any(|e| e.field == field) {
            self.errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
        self
    }

    /// Only the empty string is blank; whitespace is passed through.
    pub fn required(self, field: &'static str, value: &str) -> Self {
        if value.is_empty() {
            self.fail(field, BLANK)
        } else {
            self
        }
    }

    /// Require `value` only when `condition` holds, e.g. when a sibling
    /// field that could stand in for it is empty.
    pub fn required_when(
        self,
        field: &'static str,
        value: Option<&str>,
        condition: bool,
        message: &str,
    ) -> Self {
        if condition && value.map_or(true, str::is_empty) {
            self.fail(field, message)
        } else {
            self
        }
    }

    pub fn one_of(self, field: &'static str, value: Option<&str>, allowed: &[&str]) -> Self {
        match value {
            Some(v) if !v.is_empty() && !allowed.contains(&v) => self.fail(field, INVALID_VALUE),
            _ => self,
        }
    }

    /// Comma-separated list whose every item must be in `allowed`.
    pub fn each_of(self, field: &'static str, value: Option<&str>, allowed: &[&str]) -> Self {
        let Some(v) = value.filter(|v| !v.is_empty()) else {
            return self;
        };
        if v.split(',').map(str::trim).all(|item| allowed.contains(&item)) {
            self
        } else {
            self.fail(field, INVALID_VALUE)
        }
    }

    pub fn max<N: Into<u64>>(self, field: &'static str, value: Option<N>, max: u64) -> Self {
        match value.map(Into::into) {
            Some(v) if v > max => self.fail(field, format!("must be no greater than {max}")),
            _ => self,
        }
    }

    /// Date parameters are Unix timestamps passed as base-10 strings.
    pub fn timestamp(self, field: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() && v.parse::<i64>().is_err() => self.fail(field, INVALID_TIMESTAMP),
            _ => self,
        }
    }

    /// Absolute URL with a host, e.g. a callback address.
    pub fn url(self, field: &'static str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        match Url::parse(value) {
            Ok(url) if url.has_host() => self,
            _ => self.fail(field, INVALID_URL),
        }
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(ValidationErrors::new(self.errors)))
        }
    }
}
