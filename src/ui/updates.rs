use reseller_core::{get_sorted_group_names, group_resellers};

use crate::state::AppState;
use crate::ui::formatting::{
    format_filter_group, format_group_heading, format_mode_selector, format_reseller,
};

/// Render the whole directory screen from the current application state
pub fn render_directory(state: &AppState) -> String {
    let directory = &state.directory;
    if directory.is_loading() {
        return "Loading...".to_string();
    }

    let mut sections = vec![
        format!("# Resellers ({})", state.source_label()),
        format_mode_selector(directory.mode(), directory.filter_modes()),
    ];

    let resellers = state.displayed_resellers();
    sections.push(format!("**Matching Resellers:** {}", resellers.len()));

    if resellers.is_empty() {
        sections.push("_No resellers match the active filters._".to_string());
    } else if let Some(field) = state.group_field() {
        let groups = group_resellers(&resellers, field);
        for group_name in get_sorted_group_names(&groups) {
            if let Some(group_items) = groups.get(&group_name) {
                sections.push(format_group_heading(field.display_name, &group_name));
                sections.extend(group_items.iter().map(|r| format_reseller(r)));
            }
        }
    } else {
        sections.extend(resellers.iter().map(|r| format_reseller(r)));
    }

    sections.extend(directory.filters().iter().map(format_filter_group));
    sections.join("\n\n")
}
