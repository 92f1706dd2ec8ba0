//! Synchronous, pre-submit form checks

use std::collections::BTreeMap;

/// Per-field error messages keyed by the wire field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Record "`label` is required" when `value` is blank
    pub fn require(&mut self, field: &'static str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, format!("{} is required", label));
        }
    }

    pub fn require_email(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "Email is required");
        } else if !is_valid_email(value) {
            self.add(field, "Enter a valid email address");
        }
    }

    /// Required non-negative number; returns the parsed value when valid
    pub fn require_number(&mut self, field: &'static str, label: &str, value: &str) -> Option<f64> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.add(field, format!("{} is required", label));
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Some(n),
            _ => {
                self.add(field, format!("{} must be a number", label));
                None
            }
        }
    }
}

/// `local@domain.tld` with no whitespace
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("nimal@mephub.lk"));
        assert!(is_valid_email(" a.b@c.co "));
        assert!(!is_valid_email("nimal"));
        assert!(!is_valid_email("@mephub.lk"));
        assert!(!is_valid_email("nimal@mephub"));
        assert!(!is_valid_email("nimal@.lk"));
        assert!(!is_valid_email("ni mal@mephub.lk"));
        assert!(!is_valid_email("a@b@c.lk"));
    }

    #[test]
    fn test_require_number() {
        let mut errors = FieldErrors::new();
        assert_eq!(errors.require_number("years", "Years", "4.5"), Some(4.5));
        assert!(errors.is_empty());
        assert_eq!(errors.require_number("years", "Years", "four"), None);
        assert_eq!(errors.get("years"), Some("Years must be a number"));
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("email", "first");
        errors.add("email", "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("first"));
        assert!(errors.into_result().is_err());
    }
}
