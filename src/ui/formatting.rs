use colored::Colorize;
use reseller_core::{display_label, FilterGroup, FilterMode, FilterPart, Reseller};

/// Format the mode selector as a row of radio buttons
pub fn format_mode_selector(current: FilterMode, modes: &[FilterMode]) -> String {
    modes
        .iter()
        .map(|mode| {
            if *mode == current {
                format!("(•) {}", mode.as_str().bold())
            } else {
                format!("( ) {}", mode)
            }
        })
        .collect::<Vec<_>>()
        .join("   ")
}

/// Format one reseller card
pub fn format_reseller(reseller: &Reseller) -> String {
    let mut lines = vec![
        format!("### {}", reseller.company.bold()),
        reseller.email.clone(),
        format!("{} {}", "Level:".bold(), reseller.reseller_level),
    ];
    lines.extend(
        reseller
            .countries
            .iter()
            .map(|country| format!("- {}", country)),
    );
    lines.push("---".dimmed().to_string());
    lines.join("\n")
}

/// Format a single checkbox; disabled options are struck through
pub fn format_part(part: &FilterPart) -> String {
    let marker = match (part.is_active, part.is_disabled) {
        (true, _) => "[x]",
        (false, true) => "[-]",
        (false, false) => "[ ]",
    };

    let label = if part.is_disabled {
        part.display_name.strikethrough().dimmed().to_string()
    } else {
        part.display_name.clone()
    };

    format!("{} {}", marker, label)
}

/// Format a filter group with its checkboxes
pub fn format_filter_group(group: &FilterGroup) -> String {
    let mut lines = vec![format!("#### Filter: {}", group.display_name).cyan().to_string()];
    lines.extend(group.parts.iter().map(format_part));
    lines.join("\n")
}

/// Heading for a group of resellers
pub fn format_group_heading(field_name: &str, group_name: &str) -> String {
    format!("## {}: {}", field_name, display_label(group_name))
}
