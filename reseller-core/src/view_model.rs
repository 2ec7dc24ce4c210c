use crate::extraction::FilterUniverse;
use crate::fields::{find_field, FilterField};
use crate::filter_state::ActiveFilters;
use serde::Serialize;
use std::collections::HashSet;

/// Label shown for an empty filter value; the value itself stays ""
pub const EMPTY_LABEL: &str = "__EMPTY__";

/// One selectable value inside a filter group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPart {
    pub id: String,
    pub display_name: String,
    pub is_active: bool,
    pub is_disabled: bool,
}

/// A filterable field with its options in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroup {
    pub id: String,
    pub display_name: String,
    pub parts: Vec<FilterPart>,
}

impl FilterGroup {
    pub fn part(&self, id: &str) -> Option<&FilterPart> {
        self.parts.iter().find(|part| part.id == id)
    }
}

pub fn display_label(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_LABEL
    } else {
        value
    }
}

fn build_group(
    field_id: &str,
    display_name: &str,
    values: &[String],
    active_filters: &ActiveFilters,
    is_disabled: impl Fn(&str) -> bool,
) -> FilterGroup {
    // UTF-16 code unit order, as browsers sort strings
    let mut sorted_values: Vec<&String> = values.iter().collect();
    sorted_values.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));

    FilterGroup {
        id: field_id.to_string(),
        display_name: display_name.to_string(),
        parts: sorted_values
            .into_iter()
            .map(|value| FilterPart {
                id: value.clone(),
                display_name: display_label(value).to_string(),
                is_active: active_filters.is_active(field_id, value),
                is_disabled: is_disabled(value),
            })
            .collect(),
    }
}

/// Filter groups for narrowing mode
///
/// An option is disabled when no item in `filtered` holds that value, since
/// selecting it could only empty the result. Fields in `all_filters` that
/// have no descriptor in `fields` can never match, so all their options are
/// disabled.
pub fn build_filters_view_model_narrow<T>(
    fields: &[FilterField<T>],
    all_filters: &FilterUniverse,
    active_filters: &ActiveFilters,
    filtered: &[&T],
) -> Vec<FilterGroup> {
    all_filters
        .iter()
        .map(|(field_id, values)| {
            let field = find_field(fields, field_id);
            let allowed: HashSet<&str> = field
                .map(|field| {
                    filtered
                        .iter()
                        .flat_map(|item| field.values_of(item))
                        .collect()
                })
                .unwrap_or_default();
            let display_name = field.map(|f| f.display_name).unwrap_or(field_id);

            build_group(field_id, display_name, values, active_filters, |value| {
                !allowed.contains(value)
            })
        })
        .collect()
}

/// Filter groups for expansion mode; nothing is ever disabled
pub fn build_filters_view_model_expand<T>(
    fields: &[FilterField<T>],
    all_filters: &FilterUniverse,
    active_filters: &ActiveFilters,
) -> Vec<FilterGroup> {
    all_filters
        .iter()
        .map(|(field_id, values)| {
            let display_name = find_field(fields, field_id)
                .map(|f| f.display_name)
                .unwrap_or(field_id);
            build_group(field_id, display_name, values, active_filters, |_| false)
        })
        .collect()
}
