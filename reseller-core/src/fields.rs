use crate::models::Reseller;
use std::fmt;

pub const COUNTRIES: &str = "countries";
pub const RESELLER_LEVEL: &str = "resellerLevel";

/// Descriptor for one filterable field of `T`
///
/// Every field is read through `values`, which returns all values the item
/// holds for it. Single-valued fields return exactly one value, so the
/// filter stages treat both kinds the same way.
pub struct FilterField<T> {
    pub id: &'static str,
    pub display_name: &'static str,
    values: fn(&T) -> Vec<&str>,
}

impl<T> FilterField<T> {
    pub fn new(id: &'static str, display_name: &'static str, values: fn(&T) -> Vec<&str>) -> Self {
        Self {
            id,
            display_name,
            values,
        }
    }

    /// All values `item` holds for this field
    pub fn values_of<'a>(&self, item: &'a T) -> Vec<&'a str> {
        (self.values)(item)
    }

    pub fn has_value(&self, item: &T, value: &str) -> bool {
        self.values_of(item).contains(&value)
    }
}

impl<T> Clone for FilterField<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FilterField<T> {}

impl<T> fmt::Debug for FilterField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterField")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .finish()
    }
}

fn country_values(reseller: &Reseller) -> Vec<&str> {
    reseller.countries.iter().map(String::as_str).collect()
}

fn reseller_level_values(reseller: &Reseller) -> Vec<&str> {
    vec![reseller.reseller_level.as_str()]
}

/// The filterable fields of a reseller, in filtration and display order
pub fn reseller_fields() -> Vec<FilterField<Reseller>> {
    vec![
        FilterField::new(COUNTRIES, COUNTRIES, country_values),
        FilterField::new(RESELLER_LEVEL, RESELLER_LEVEL, reseller_level_values),
    ]
}

/// Look up a registered field by id
pub fn find_field<'f, T>(fields: &'f [FilterField<T>], id: &str) -> Option<&'f FilterField<T>> {
    fields.iter().find(|field| field.id == id)
}
