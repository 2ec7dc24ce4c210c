use reseller_core::*;
use std::path::PathBuf;

/// Application state management
/// Owns the directory plus the presentation choices made on the command line
#[derive(Debug)]
pub struct AppState {
    /// The filterable directory; stays in its loading state until data arrives
    pub directory: ResellerDirectory,
    /// Dataset file, or None for the bundled sample
    pub data_file: Option<PathBuf>,
    /// Field used to order the displayed resellers
    pub sort_by: Option<String>,
    /// Filter field used to group the displayed resellers
    pub group_by: Option<String>,
}

impl AppState {
    pub fn new(data_file: Option<PathBuf>) -> Self {
        Self {
            directory: ResellerDirectory::new(),
            data_file,
            sort_by: None,
            group_by: None,
        }
    }

    /// Name of the dataset being browsed
    pub fn source_label(&self) -> String {
        self.data_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| "built-in sample".to_string())
    }

    /// Filtered resellers in display order
    pub fn displayed_resellers(&self) -> Vec<&Reseller> {
        let mut resellers = self.directory.filtered_resellers();
        if let Some(ref sort_field) = self.sort_by {
            sort_resellers(&mut resellers, sort_field);
        }
        resellers
    }

    /// The grouping field, if one is set and registered
    pub fn group_field(&self) -> Option<&FilterField<Reseller>> {
        self.group_by
            .as_deref()
            .and_then(|id| find_field(self.directory.fields(), id))
    }
}
