use serde_json::Value;

/// Validate data against a JSON Schema
/// Returns every violation, each formatted with the instance path it occurred at
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
