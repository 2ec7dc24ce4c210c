use crate::fields::FilterField;
use serde::Serialize;
use std::collections::HashSet;

/// Every distinct value observed per filterable field in the full dataset,
/// independent of the current selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterUniverse {
    fields: Vec<(String, Vec<String>)>,
}

impl FilterUniverse {
    /// Values observed for a field, in first-occurrence order
    pub fn values(&self, field_id: &str) -> &[String] {
        self.fields
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, field_id: &str, value: &str) -> bool {
        self.values(field_id).iter().any(|v| v == value)
    }

    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(id, values)| (id.as_str(), values.as_slice()))
    }
}

/// Collect the filter universe for `items`
/// Multi-valued fields are flattened before deduplication
pub fn extract_filters<T>(items: &[T], fields: &[FilterField<T>]) -> FilterUniverse {
    let fields = fields
        .iter()
        .map(|field| {
            let mut seen = HashSet::new();
            let values = items
                .iter()
                .flat_map(|item| field.values_of(item))
                .filter(|value| seen.insert(*value))
                .map(str::to_string)
                .collect();
            (field.id.to_string(), values)
        })
        .collect();

    FilterUniverse { fields }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::reseller_fields;
    use crate::models::RawReseller;
    use crate::transform::transform_for_filtering;
    use serde_json::json;

    #[test]
    fn test_extract_distinct_values_in_first_occurrence_order() {
        let raw: Vec<RawReseller> = serde_json::from_value(json!([
            {"company": "A", "countries": ["US", "DE"], "resellerLevel": "Silver"},
            {"company": "B", "countries": ["DE", "FR"], "resellerLevel": "Gold", "international": true},
            {"company": "C", "countries": ["US"], "resellerLevel": "Silver"}
        ]))
        .unwrap();
        let resellers = transform_for_filtering(&raw);

        let universe = extract_filters(&resellers, &reseller_fields());

        assert_eq!(
            universe.values("countries"),
            ["US", "DE", "International", "FR"]
        );
        assert_eq!(universe.values("resellerLevel"), ["Silver", "Gold"]);
        assert_eq!(
            universe.field_ids().collect::<Vec<_>>(),
            vec!["countries", "resellerLevel"]
        );
    }

    #[test]
    fn test_empty_dataset_keeps_fields() {
        let universe = extract_filters(&[], &reseller_fields());
        assert_eq!(universe.iter().count(), 2);
        assert!(universe.values("countries").is_empty());
        assert!(universe.values("unknown").is_empty());
        assert!(!universe.contains("countries", "US"));
    }
}
