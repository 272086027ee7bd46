use super::*;
use fancy_regex::Regex;

/// One of the three validated contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn selector(self) -> &'static str {
        match self {
            Self::Name => "#name",
            Self::Email => "#email",
            Self::Message => "#message",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }
}

/// Field predicates of the contact form.
#[derive(Debug, Clone)]
pub struct ContactValidator {
    name_min_chars: usize,
    message_min_chars: usize,
    email: Regex,
}

impl ContactValidator {
    pub fn from_config(config: &ContactConfig) -> Result<Self> {
        let email = Regex::new(&config.email_pattern).map_err(|err| {
            Error::Config(format!(
                "contact.email_pattern `{}` does not compile: {err}",
                config.email_pattern
            ))
        })?;
        Ok(Self {
            name_min_chars: config.name_min_chars,
            message_min_chars: config.message_min_chars,
            email,
        })
    }

    /// Whether `value` passes the rule of `field`.
    pub fn accepts(&self, field: ContactField, value: &str) -> Result<bool> {
        match field {
            ContactField::Name => Ok(value.trim().chars().count() >= self.name_min_chars),
            // The address is matched untrimmed: surrounding blanks are rejected.
            ContactField::Email => self
                .email
                .is_match(value)
                .map_err(|err| Error::Validation(err.to_string())),
            ContactField::Message => Ok(value.trim().chars().count() >= self.message_min_chars),
        }
    }

    /// Advisory status shown when a field loses focus.
    pub fn blur_status(&self, field: ContactField, value: &str) -> Result<FieldStatus> {
        if value.trim().is_empty() {
            return Ok(FieldStatus::Untouched);
        }
        Ok(if self.accepts(field, value)? {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        })
    }
}

impl Default for ContactValidator {
    fn default() -> Self {
        // The built-in pattern is a literal that always compiles.
        match Self::from_config(&ContactConfig::default()) {
            Ok(validator) => validator,
            Err(err) => unreachable!("default email pattern rejected: {err}"),
        }
    }
}
