//! Validation Module
//!
//! Field-presence and format checks run before the repository is touched.
//!
//! ## Rules
//! - Full record (create): `ip` present, `fqdn` present, at least one tag,
//!   `ip` parses as IPv4 or IPv6
//! - IP only (partial update carrying an `ip`): `ip` present and well-formed
//!
//! The first failing check for a field wins; later checks for the same field
//! are not recorded.

use std::collections::BTreeMap;
use std::fmt;
use std::net::IpAddr;

use serde::Serialize;

use crate::model::ServerInput;

/// Per-field error messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Accumulates field errors across a series of checks
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless `ok` holds or the field already failed
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.errors
                .0
                .entry(field.to_string())
                .or_insert_with(|| message.to_string());
        }
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

/// True when `ip` is a textual IPv4 or IPv6 address
pub fn is_valid_ip(ip: &str) -> bool {
    ip.parse::<IpAddr>().is_ok()
}

/// Checks required for storing a brand new record
pub fn validate_full(input: &ServerInput) -> FieldErrors {
    let mut v = Validator::new();
    v.check(!input.ip.is_empty(), "ip", "must be provided");
    v.check(!input.fqdn.is_empty(), "fqdn", "must be provided");
    v.check(!input.tags.is_empty(), "tags", "must be provided");
    v.check(is_valid_ip(&input.ip), "ip", "must be a valid IP address");
    v.into_errors()
}

/// Checks applied to a partial update that supplies an `ip`
pub fn validate_ip_only(input: &ServerInput) -> FieldErrors {
    let mut v = Validator::new();
    v.check(!input.ip.is_empty(), "ip", "must be provided");
    v.check(is_valid_ip(&input.ip), "ip", "must be a valid IP address");
    v.into_errors()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut v = Validator::new();
        v.check(false, "ip", "must be provided");
        v.check(false, "ip", "must be a valid IP address");
        let errors = v.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("ip"), Some("must be provided"));
    }

    #[test]
    fn display_lists_fields_in_order() {
        let mut v = Validator::new();
        v.check(false, "tags", "must be provided");
        v.check(false, "fqdn", "must be provided");
        assert_eq!(
            v.into_errors().to_string(),
            "fqdn: must be provided, tags: must be provided"
        );
    }
}
