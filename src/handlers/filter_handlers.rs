use reseller_core::{display_label, parse_filter_args, FilterMode};

use crate::state::AppState;

/// Flip one filter checkbox
/// Unknown fields or values and disabled options leave the state unchanged
pub fn toggle_filter(state: &mut AppState, field_id: &str, value: &str) -> Result<String, String> {
    let directory = &state.directory;

    if !directory.all_filters().field_ids().any(|id| id == field_id) {
        let known: Vec<_> = directory.all_filters().field_ids().collect();
        return Err(format!(
            "unknown filter '{}' (available: {})",
            field_id,
            known.join(", ")
        ));
    }

    let filters = directory.filters();
    let part = filters
        .iter()
        .find(|group| group.id == field_id)
        .and_then(|group| group.part(value))
        .ok_or_else(|| format!("'{}' is not a value of {}", value, field_id))?;

    if part.is_disabled {
        return Err(format!(
            "{} '{}' is disabled: no listed reseller has it",
            field_id,
            display_label(value)
        ));
    }

    let is_active = !part.is_active;
    state.directory.toggle_filter(field_id, value, is_active);

    Ok(format!(
        "{} '{}' {}",
        field_id,
        display_label(value),
        if is_active { "selected" } else { "cleared" }
    ))
}

/// Switch filter mode; selections are cleared
pub fn switch_mode(state: &mut AppState, mode: FilterMode) -> String {
    state.directory.set_mode(mode);
    format!("Switched to {} mode, filters cleared", mode)
}

/// Clear all selections without changing mode
pub fn clear_filters(state: &mut AppState) -> String {
    state.directory.reset();
    "Filters cleared".to_string()
}

/// Apply "field=value" arguments as successive toggles
/// Returns one warning per argument that could not be applied
pub fn apply_filter_args(state: &mut AppState, filter_args: &[String]) -> Vec<String> {
    let mut warnings: Vec<String> = filter_args
        .iter()
        .filter(|arg| !arg.contains('='))
        .map(|arg| format!("Invalid filter format '{}'. Expected 'field=value'", arg))
        .collect();

    let requested = parse_filter_args(filter_args);
    for (field, values) in requested.iter() {
        for value in values {
            if state.directory.active_filters().is_active(field, value) {
                continue;
            }
            if let Err(warning) = toggle_filter(state, field, value) {
                warnings.push(warning);
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use reseller_core::sample_resellers;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(None);
        state
            .directory
            .finish_loading(&sample_resellers().unwrap());
        state
    }

    #[test]
    fn test_toggle_on_and_off() {
        let mut state = loaded_state();

        let message = toggle_filter(&mut state, "countries", "Canada").unwrap();
        assert_eq!(message, "countries 'Canada' selected");
        assert!(state.directory.active_filters().is_active("countries", "Canada"));

        let message = toggle_filter(&mut state, "countries", "Canada").unwrap();
        assert_eq!(message, "countries 'Canada' cleared");
        assert!(state.directory.active_filters().is_empty());
    }

    #[test]
    fn test_unknown_field_and_value() {
        let mut state = loaded_state();

        let err = toggle_filter(&mut state, "email", "x").unwrap_err();
        assert!(err.contains("available: countries, resellerLevel"));

        assert!(toggle_filter(&mut state, "countries", "Atlantis").is_err());
        assert!(state.directory.active_filters().is_empty());
    }

    #[test]
    fn test_disabled_option_is_refused() {
        let mut state = loaded_state();
        toggle_filter(&mut state, "countries", "Japan").unwrap();

        let err = toggle_filter(&mut state, "resellerLevel", "Gold").unwrap_err();
        assert!(err.contains("disabled"));
        assert!(!state.directory.active_filters().is_active("resellerLevel", "Gold"));
    }

    #[test]
    fn test_expansion_never_refuses() {
        let mut state = loaded_state();
        switch_mode(&mut state, FilterMode::Expansion);
        toggle_filter(&mut state, "countries", "Japan").unwrap();
        toggle_filter(&mut state, "resellerLevel", "Gold").unwrap();

        assert_eq!(state.directory.filtered_resellers().len(), 3);
    }

    #[test]
    fn test_switch_mode_and_clear() {
        let mut state = loaded_state();
        toggle_filter(&mut state, "countries", "Canada").unwrap();

        assert_eq!(
            switch_mode(&mut state, FilterMode::Expansion),
            "Switched to expansion mode, filters cleared"
        );
        assert!(state.directory.active_filters().is_empty());

        toggle_filter(&mut state, "countries", "Canada").unwrap();
        clear_filters(&mut state);
        assert!(state.directory.active_filters().is_empty());
        assert_eq!(state.directory.mode(), FilterMode::Expansion);
    }

    #[test]
    fn test_apply_filter_args() {
        let mut state = loaded_state();
        let args = vec![
            "countries=Germany".to_string(),
            "countries=Germany".to_string(),
            "resellerLevel=Bronze".to_string(),
            "nonsense".to_string(),
        ];

        let warnings = apply_filter_args(&mut state, &args);

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("nonsense"));
        assert!(warnings[1].contains("disabled"));
        assert_eq!(state.directory.active_filters().values("countries"), ["Germany"]);
    }
}
