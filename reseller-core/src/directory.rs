use crate::extraction::{extract_filters, FilterUniverse};
use crate::fields::{reseller_fields, FilterField};
use crate::filter_state::ActiveFilters;
use crate::mode::FilterMode;
use crate::models::{RawReseller, Reseller};
use crate::transform::transform_for_filtering;
use crate::view_model::{
    build_filters_view_model_expand, build_filters_view_model_narrow, FilterGroup,
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Snapshot of everything a rendering layer needs
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryView<'a> {
    pub is_loading: bool,
    pub current_filter_type: FilterMode,
    pub filter_types: &'static [FilterMode],
    pub filtered_resellers: Vec<&'a Reseller>,
    pub filters: Vec<FilterGroup>,
}

/// Filterable reseller directory
///
/// Owns the dataset, the filter universe derived from it, the current mode
/// and the active selections. Every query recomputes from that state, so
/// there is nothing to invalidate after a mutation.
#[derive(Debug)]
pub struct ResellerDirectory {
    fields: Vec<FilterField<Reseller>>,
    resellers: Vec<Reseller>,
    all_filters: FilterUniverse,
    initial_filters: ActiveFilters,
    active_filters: ActiveFilters,
    mode: FilterMode,
    is_loading: bool,
}

impl ResellerDirectory {
    /// A directory still waiting for its dataset
    pub fn new() -> Self {
        Self::with_initial_filters(ActiveFilters::new())
    }

    /// A loading directory whose selections start (and reset) to `initial`
    pub fn with_initial_filters(initial: ActiveFilters) -> Self {
        let fields = reseller_fields();
        let all_filters = extract_filters(&[], &fields);

        Self {
            fields,
            resellers: Vec::new(),
            all_filters,
            active_filters: initial.clone(),
            initial_filters: initial,
            mode: FilterMode::default(),
            is_loading: true,
        }
    }

    /// A directory that is ready immediately
    pub fn from_resellers(raw_resellers: &[RawReseller]) -> Self {
        let mut directory = Self::new();
        directory.finish_loading(raw_resellers);
        directory
    }

    /// Install the dataset; only the first call has any effect
    /// Returns whether the dataset was accepted
    pub fn finish_loading(&mut self, raw_resellers: &[RawReseller]) -> bool {
        if !self.is_loading {
            warn!("dataset already loaded, ignoring {} records", raw_resellers.len());
            return false;
        }

        self.resellers = transform_for_filtering(raw_resellers);
        self.all_filters = extract_filters(&self.resellers, &self.fields);
        self.is_loading = false;

        info!(
            resellers = self.resellers.len(),
            fields = self.fields.len(),
            "reseller dataset loaded"
        );
        true
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn fields(&self) -> &[FilterField<Reseller>] {
        &self.fields
    }

    /// The full transformed dataset, empty while loading
    pub fn resellers(&self) -> &[Reseller] {
        &self.resellers
    }

    pub fn all_filters(&self) -> &FilterUniverse {
        &self.all_filters
    }

    pub fn active_filters(&self) -> &ActiveFilters {
        &self.active_filters
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn filter_modes(&self) -> &'static [FilterMode] {
        &FilterMode::ALL
    }

    /// Turn one (field, value) selection on or off
    pub fn toggle_filter(&mut self, field_id: &str, value: &str, is_active: bool) {
        self.active_filters.set(field_id, value, is_active);
        debug!(field = field_id, value, is_active, "filter toggled");
    }

    /// Switch mode; selections go back to their initial state
    pub fn set_mode(&mut self, mode: FilterMode) {
        self.reset();
        self.mode = mode;
        info!(mode = %mode, "filter mode changed");
    }

    /// Restore the initial selections, keeping the mode
    pub fn reset(&mut self) {
        self.active_filters = self.initial_filters.clone();
    }

    /// Resellers passing the current mode's filtration
    pub fn filtered_resellers(&self) -> Vec<&Reseller> {
        let start_from_empty = self
            .mode
            .starts_from_empty(self.active_filters.any_selected());

        let filtered = self.mode.filtration(&self.fields).apply(
            &self.resellers,
            &self.active_filters,
            &self.all_filters,
            start_from_empty,
        );

        debug!(
            mode = %self.mode,
            matched = filtered.len(),
            total = self.resellers.len(),
            "filtration applied"
        );
        filtered
    }

    /// Filter groups for the current mode and selections
    pub fn filters(&self) -> Vec<FilterGroup> {
        self.build_filters(&self.filtered_resellers())
    }

    pub fn view(&self) -> DirectoryView<'_> {
        let filtered_resellers = self.filtered_resellers();
        let filters = self.build_filters(&filtered_resellers);

        DirectoryView {
            is_loading: self.is_loading,
            current_filter_type: self.mode,
            filter_types: self.filter_modes(),
            filtered_resellers,
            filters,
        }
    }

    fn build_filters(&self, filtered: &[&Reseller]) -> Vec<FilterGroup> {
        match self.mode {
            FilterMode::Narrowing => build_filters_view_model_narrow(
                &self.fields,
                &self.all_filters,
                &self.active_filters,
                filtered,
            ),
            FilterMode::Expansion => build_filters_view_model_expand(
                &self.fields,
                &self.all_filters,
                &self.active_filters,
            ),
        }
    }
}

impl Default for ResellerDirectory {
    fn default() -> Self {
        Self::new()
    }
}
