// Public modules
pub mod directory;
pub mod error;
pub mod extraction;
pub mod fields;
pub mod filter_state;
pub mod filtering;
pub mod filtration;
pub mod grouping;
pub mod io;
pub mod mode;
pub mod models;
pub mod schema;
pub mod schema_validation;
pub mod sorting;
pub mod transform;
pub mod validation;
pub mod view_model;

// Re-export commonly used types for convenience
pub use directory::{DirectoryView, ResellerDirectory};
pub use error::LoadError;
pub use extraction::{extract_filters, FilterUniverse};
pub use fields::{find_field, reseller_fields, FilterField, COUNTRIES, RESELLER_LEVEL};
pub use filter_state::ActiveFilters;
pub use filtering::{
    expansion_filtration, narrowing_filtration, parse_filter_args, ExpansionFilter,
    NarrowingFilter,
};
pub use filtration::{FilterStage, Filtration, FiltrationContext};
pub use grouping::{get_sorted_group_names, group_resellers, UNSPECIFIED_GROUP};
pub use io::{load_resellers, parse_resellers, sample_resellers, SAMPLE_RESELLERS};
pub use mode::FilterMode;
pub use models::{RawReseller, Reseller};
pub use schema::reseller_schema;
pub use schema_validation::validate_against_schema;
pub use sorting::{normalize_for_sorting, sort_resellers, strip_leading_articles};
pub use transform::{transform_for_filtering, INTERNATIONAL_COUNTRY};
pub use validation::{dataset_warnings, validate_resellers};
pub use view_model::{
    build_filters_view_model_expand, build_filters_view_model_narrow, display_label, FilterGroup,
    FilterPart, EMPTY_LABEL,
};
