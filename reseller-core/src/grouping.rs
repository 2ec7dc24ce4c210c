use crate::fields::FilterField;
use crate::models::Reseller;
use std::collections::HashMap;

/// Group name for resellers holding no value for the grouping field
pub const UNSPECIFIED_GROUP: &str = "_unspecified_";

/// Group a result list by a filterable field
/// Resellers with multiple values for the field appear in multiple groups
pub fn group_resellers<'a>(
    items: &[&'a Reseller],
    field: &FilterField<Reseller>,
) -> HashMap<String, Vec<&'a Reseller>> {
    let mut groups: HashMap<String, Vec<&'a Reseller>> = HashMap::new();

    for &item in items {
        let values = field.values_of(item);

        if values.is_empty() {
            groups
                .entry(UNSPECIFIED_GROUP.to_string())
                .or_default()
                .push(item);
        } else {
            for value in values {
                groups.entry(value.to_string()).or_default().push(item);
            }
        }
    }

    groups
}

/// Get sorted group names from a grouped map
pub fn get_sorted_group_names(groups: &HashMap<String, Vec<&Reseller>>) -> Vec<String> {
    let mut group_names: Vec<String> = groups.keys().cloned().collect();
    group_names.sort();
    group_names
}
