//! The `subdomain` URL option.

use serde_json::Value;

use crate::url::error::{RewriteError, INVALID_DIRECTIVE};

/// How the subdomain of a generated URL should be treated.
///
/// Absence of the option is modelled as `Option::None` by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubdomainDirective {
    /// `null`: leave the host alone.
    Unset,
    /// `false`: switch to the configured default subdomain.
    UseDefault,
    /// A string: switch to this label.
    Explicit(String),
}

impl SubdomainDirective {
    /// Parse an option value. Anything but `null`, `false` or a string is rejected.
    pub fn from_value(value: &Value) -> Result<Self, RewriteError> {
        match value {
            Value::Null => Ok(SubdomainDirective::Unset),
            Value::Bool(false) => Ok(SubdomainDirective::UseDefault),
            Value::String(label) => Ok(SubdomainDirective::Explicit(label.clone())),
            _ => Err(RewriteError::InvalidArgument(INVALID_DIRECTIVE.to_string())),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            SubdomainDirective::Unset => Value::Null,
            SubdomainDirective::UseDefault => Value::Bool(false),
            SubdomainDirective::Explicit(label) => Value::String(label),
        }
    }
}

impl From<&str> for SubdomainDirective {
    fn from(label: &str) -> Self {
        SubdomainDirective::Explicit(label.to_string())
    }
}

impl From<String> for SubdomainDirective {
    fn from(label: String) -> Self {
        SubdomainDirective::Explicit(label)
    }
}
