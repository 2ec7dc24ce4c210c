use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selected filter values per field id
///
/// A field that is absent or has no values places no constraint. Values are
/// kept in the order they were selected; duplicates are not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilters {
    fields: BTreeMap<String, Vec<String>>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active values for a field, empty if the field was never touched
    pub fn values(&self, field_id: &str) -> &[String] {
        self.fields.get(field_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_active(&self, field_id: &str, value: &str) -> bool {
        self.values(field_id).iter().any(|v| v == value)
    }

    /// Turn a single value on or off
    /// Turning on appends; turning off removes every occurrence
    pub fn set(&mut self, field_id: &str, value: &str, is_active: bool) {
        if is_active {
            self.fields
                .entry(field_id.to_string())
                .or_default()
                .push(value.to_string());
            return;
        }

        if let Some(values) = self.fields.get_mut(field_id) {
            values.retain(|v| v != value);
            if values.is_empty() {
                self.fields.remove(field_id);
            }
        }
    }

    /// True if any field has at least one active value
    pub fn any_selected(&self) -> bool {
        self.fields.values().any(|values| !values.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        !self.any_selected()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, values)| (field.as_str(), values.as_slice()))
    }
}

impl<F, V> FromIterator<(F, V)> for ActiveFilters
where
    F: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, V)>>(iter: I) -> Self {
        let mut filters = ActiveFilters::new();
        for (field, value) in iter {
            filters
                .fields
                .entry(field.into())
                .or_default()
                .push(value.into());
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_field_is_empty() {
        let filters = ActiveFilters::new();
        assert!(filters.values("countries").is_empty());
        assert!(!filters.is_active("countries", "US"));
        assert!(!filters.any_selected());
    }

    #[test]
    fn test_turn_off_untouched_field_is_noop() {
        let mut filters = ActiveFilters::new();
        filters.set("countries", "US", false);
        assert_eq!(filters, ActiveFilters::new());
    }

    #[test]
    fn test_on_then_off_restores_state() {
        let mut filters: ActiveFilters = [("resellerLevel", "Gold")].into_iter().collect();
        let before = filters.clone();

        filters.set("countries", "US", true);
        assert!(filters.is_active("countries", "US"));
        assert!(filters.any_selected());

        filters.set("countries", "US", false);
        assert_eq!(filters, before);
    }

    #[test]
    fn test_turn_on_appends_in_order() {
        let mut filters = ActiveFilters::new();
        filters.set("countries", "US", true);
        filters.set("countries", "DE", true);
        filters.set("countries", "US", true);
        assert_eq!(filters.values("countries"), ["US", "DE", "US"]);

        filters.set("countries", "US", false);
        assert_eq!(filters.values("countries"), ["DE"]);
    }

    #[test]
    fn test_empty_string_value() {
        let mut filters = ActiveFilters::new();
        filters.set("resellerLevel", "", true);
        assert!(filters.is_active("resellerLevel", ""));
        assert!(filters.any_selected());
    }
}
