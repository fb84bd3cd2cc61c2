//! Domain error model.

use std::collections::BTreeMap;

/// Per-field validation failure map.
///
/// Keys are wire field names (`companyName`, `jobTitle`, `dateApplied`,
/// `status`) so a presentation layer can attach each message to its input.
/// Always non-empty when returned from a validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. The last message per field wins.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "validation failed: ")?;
        for (idx, (field, message)) in self.fields.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_keyed_by_field() {
        let mut errors = ValidationErrors::new();
        errors.push("companyName", "Company Name is required.");
        errors.push("dateApplied", "Please enter a valid date.");

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.message("companyName"),
            Some("Company Name is required.")
        );
        assert_eq!(errors.message("jobTitle"), None);
    }

    #[test]
    fn display_joins_all_messages() {
        let mut errors = ValidationErrors::new();
        errors.push("companyName", "Company Name is required.");
        errors.push("status", "Status is required.");

        let rendered = errors.to_string();
        assert!(rendered.contains("companyName: Company Name is required."));
        assert!(rendered.contains("status: Status is required."));
    }
}
