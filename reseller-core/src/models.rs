use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A reseller record exactly as the data source supplies it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReseller {
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub international: bool,
    #[serde(default)]
    pub countries: Vec<String>,
    pub reseller_level: String,
    #[serde(default)]
    pub url: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A reseller prepared for filtering
/// `countries` already carries the synthetic "International" entry when the
/// source record was flagged international
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reseller {
    pub company: String,
    pub email: String,
    pub international: bool,
    pub countries: Vec<String>,
    pub reseller_level: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Reseller {
    /// Key used by rendering layers to tell records apart
    /// Not guaranteed to be unique across a dataset
    pub fn display_key(&self) -> String {
        format!("{}{}", self.url, self.company)
    }

    /// Get a field as a single display string
    /// Multi-valued fields are joined with ", "
    pub fn field_as_string(&self, field_name: &str) -> Option<String> {
        match field_name {
            "company" => Some(self.company.clone()),
            "email" => Some(self.email.clone()),
            "url" => Some(self.url.clone()),
            "resellerLevel" => Some(self.reseller_level.clone()),
            "countries" => Some(self.countries.join(", ")),
            other => self.extra.get(other).map(|value| match value {
                serde_json::Value::String(s) => s.clone(),
                _ => value.to_string(),
            }),
        }
    }
}
