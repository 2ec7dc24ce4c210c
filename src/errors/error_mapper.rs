use reseller_core::LoadError;
use std::io::ErrorKind;
use std::path::Path;

/// Map dataset loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_file_load_error(error: &LoadError, path: Option<&Path>) -> (String, String, String) {
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in sample".to_string());

    match error {
        LoadError::Io { source: err, .. } if err.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The reseller file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                source
            ),
        ),
        LoadError::Io { source: err, .. } if err.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", source),
        ),
        LoadError::Io { .. } => (
            "Error Loading File".to_string(),
            "Failed to read reseller file.".to_string(),
            error.to_string(),
        ),
        LoadError::Json(err) => (
            "Invalid JSON".to_string(),
            format!("{} is not valid JSON.", source),
            err.to_string(),
        ),
        LoadError::Schema(errors) => (
            "Schema Error".to_string(),
            "The reseller data does not match the expected structure.".to_string(),
            numbered(errors),
        ),
        LoadError::Validation(errors) => (
            "Validation Error".to_string(),
            "The reseller data has validation errors.".to_string(),
            numbered(errors),
        ),
    }
}

fn numbered(errors: &[String]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, error)| format!("{}. {}", i + 1, error))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reseller_core::{load_resellers, parse_resellers};

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/resellers.json");
        let err = load_resellers(path).unwrap_err();

        let (title, _, details) = map_file_load_error(&err, Some(path));

        assert_eq!(title, "File Not Found");
        assert!(details.contains("/nonexistent/resellers.json"));
    }

    #[test]
    fn test_validation_errors_are_numbered() {
        let err = LoadError::Validation(vec!["first".to_string(), "second".to_string()]);
        let (title, _, details) = map_file_load_error(&err, None);

        assert_eq!(title, "Validation Error");
        assert_eq!(details, "1. first\n2. second");
    }

    #[test]
    fn test_invalid_json_names_source() {
        let err = parse_resellers("not json").unwrap_err();
        let (title, message, _) = map_file_load_error(&err, None);

        assert_eq!(title, "Invalid JSON");
        assert_eq!(message, "built-in sample is not valid JSON.");
    }

    #[test]
    fn test_schema_error() {
        let err = parse_resellers(r#"[{"company": 1}]"#).unwrap_err();
        let (title, _, details) = map_file_load_error(&err, None);

        assert_eq!(title, "Schema Error");
        assert!(details.starts_with("1. "));
    }
}
