use crate::models::RawReseller;
use crate::transform::INTERNATIONAL_COUNTRY;
use std::collections::HashSet;

/// Validate raw reseller records
/// Returns Ok(()) if valid, or Err(Vec<String>) with every problem found
pub fn validate_resellers(resellers: &[RawReseller]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (idx, reseller) in resellers.iter().enumerate() {
        let reseller_ref = format!("Reseller #{} ('{}')", idx + 1, reseller.company);
        validate_reseller(reseller, &reseller_ref, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_reseller(reseller: &RawReseller, reseller_ref: &str, errors: &mut Vec<String>) {
    if reseller.company.trim().is_empty() {
        errors.push(format!("{}: company cannot be empty", reseller_ref));
    }
}

/// Oddities that filtering tolerates but that likely indicate a data mistake
pub fn dataset_warnings(resellers: &[RawReseller]) -> Vec<String> {
    let mut warnings = Vec::new();

    for (idx, reseller) in resellers.iter().enumerate() {
        let reseller_ref = format!("Reseller #{} ('{}')", idx + 1, reseller.company);

        let mut seen = HashSet::new();
        for country in &reseller.countries {
            if !seen.insert(country) {
                warnings.push(format!("{}: duplicate country '{}'", reseller_ref, country));
            }
        }

        // The sentinel is injected from the flag, so the card will list it twice
        if reseller.international && reseller.countries.iter().any(|c| c == INTERNATIONAL_COUNTRY) {
            warnings.push(format!(
                "{}: lists '{}' explicitly while flagged international",
                reseller_ref, INTERNATIONAL_COUNTRY
            ));
        }
    }

    warnings
}
