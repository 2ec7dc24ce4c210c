use crate::fields::FilterField;
use crate::filter_state::ActiveFilters;
use crate::filtration::{FilterStage, Filtration, FiltrationContext};
use std::collections::HashSet;

/// Parse filter strings in the format "field=value" into active filters
/// Multiple values for the same field are collected in order; strings
/// without '=' are skipped
pub fn parse_filter_args(filter_strings: &[String]) -> ActiveFilters {
    filter_strings
        .iter()
        .filter_map(|filter_str| filter_str.split_once('='))
        .map(|(field, value)| (field.trim(), value.trim()))
        .collect()
}

/// Intersection-style stage for one field
/// Keeps items holding every active value of the field
pub struct NarrowingFilter<T> {
    field: FilterField<T>,
}

impl<T> NarrowingFilter<T> {
    pub fn new(field: FilterField<T>) -> Self {
        Self { field }
    }
}

impl<T> FilterStage<T> for NarrowingFilter<T> {
    fn apply<'a>(
        &self,
        items: Vec<&'a T>,
        active_filters: &ActiveFilters,
        _context: &FiltrationContext<'a, '_, T>,
    ) -> Vec<&'a T> {
        let selected = active_filters.values(self.field.id);
        if selected.is_empty() {
            return items;
        }

        items
            .into_iter()
            .filter(|item| {
                let values = self.field.values_of(item);
                selected.iter().all(|s| values.contains(&s.as_str()))
            })
            .collect()
    }
}

/// Union-style stage for one field
/// Adds back every item of the full dataset holding any active value
pub struct ExpansionFilter<T> {
    field: FilterField<T>,
}

impl<T> ExpansionFilter<T> {
    pub fn new(field: FilterField<T>) -> Self {
        Self { field }
    }
}

impl<T> FilterStage<T> for ExpansionFilter<T> {
    fn apply<'a>(
        &self,
        items: Vec<&'a T>,
        active_filters: &ActiveFilters,
        context: &FiltrationContext<'a, '_, T>,
    ) -> Vec<&'a T> {
        let selected = active_filters.values(self.field.id);
        if selected.is_empty() {
            return items;
        }

        let subset = context.all_items.iter().filter(|item| {
            self.field
                .values_of(item)
                .iter()
                .any(|value| selected.iter().any(|s| s.as_str() == *value))
        });

        // Dedup by record identity, first occurrence wins
        let mut seen = HashSet::new();
        items
            .into_iter()
            .chain(subset)
            .filter(|item| seen.insert(*item as *const T))
            .collect()
    }
}

/// Pipeline with one narrowing stage per field, in field order
pub fn narrowing_filtration<T: 'static>(fields: &[FilterField<T>]) -> Filtration<T> {
    fields
        .iter()
        .fold(Filtration::new(), |filtration, field| {
            filtration.stage(NarrowingFilter::new(*field))
        })
}

/// Pipeline with one expansion stage per field, in field order
pub fn expansion_filtration<T: 'static>(fields: &[FilterField<T>]) -> Filtration<T> {
    fields
        .iter()
        .fold(Filtration::new(), |filtration, field| {
            filtration.stage(ExpansionFilter::new(*field))
        })
}
