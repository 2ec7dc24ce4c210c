use crate::models::Reseller;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Sort a result list by the specified field ("company" or any reseller field)
/// Only reorders the references; the dataset itself is untouched
pub fn sort_resellers(items: &mut [&Reseller], sort_field: &str) {
    items.sort_by(|a, b| {
        if sort_field == "company" {
            // Library science sorting: strip articles, normalize unicode
            let a_key = normalize_for_sorting(&a.company);
            let b_key = normalize_for_sorting(&b.company);

            match a_key.cmp(&b_key) {
                Ordering::Equal => a.company.cmp(&b.company),
                other => other,
            }
        } else {
            let a_val = a.field_as_string(sort_field).unwrap_or_default();
            let b_val = b.field_as_string(sort_field).unwrap_or_default();

            // Primary sort by normalized field, secondary by company
            match normalize_for_sorting(&a_val).cmp(&normalize_for_sorting(&b_val)) {
                Ordering::Equal => {
                    normalize_for_sorting(&a.company).cmp(&normalize_for_sorting(&b.company))
                }
                other => other,
            }
        }
    });
}

/// Normalize string for library science sorting
/// - Strip leading articles (a, an, the)
/// - Normalize unicode (NFD then lowercase)
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);

    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn leading_articles() -> &'static Regex {
    static ARTICLES: OnceLock<Regex> = OnceLock::new();
    ARTICLES.get_or_init(|| {
        Regex::new(r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|i|gli|un|une|een)\s+")
            .expect("leading article pattern is valid")
    })
}

/// Strip leading articles following library science conventions
pub fn strip_leading_articles(s: &str) -> String {
    leading_articles().replace(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawReseller;
    use crate::transform::transform_for_filtering;
    use serde_json::json;

    fn dataset() -> Vec<Reseller> {
        let raw: Vec<RawReseller> = serde_json::from_value(json!([
            {"company": "Zeta Corp", "countries": ["US"], "resellerLevel": "Gold"},
            {"company": "The Acme Company", "countries": ["DE"], "resellerLevel": "Silver"},
            {"company": "beta", "countries": ["FR"], "resellerLevel": "Gold"}
        ]))
        .unwrap();
        transform_for_filtering(&raw)
    }

    #[test]
    fn test_strip_leading_articles() {
        assert_eq!(strip_leading_articles("The Acme Company"), "Acme Company");
        assert_eq!(strip_leading_articles("an Outlet"), "Outlet");
        assert_eq!(strip_leading_articles("Theatre Supply"), "Theatre Supply");
    }

    #[test]
    fn test_normalize_for_sorting() {
        assert_eq!(normalize_for_sorting("The   Élan  Group "), "e\u{301}lan group");
    }

    #[test]
    fn test_sort_by_company() {
        let items = dataset();
        let mut refs: Vec<&Reseller> = items.iter().collect();

        sort_resellers(&mut refs, "company");

        let names: Vec<_> = refs.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(names, vec!["The Acme Company", "beta", "Zeta Corp"]);
    }

    #[test]
    fn test_sort_by_level_then_company() {
        let items = dataset();
        let mut refs: Vec<&Reseller> = items.iter().collect();

        sort_resellers(&mut refs, "resellerLevel");

        let names: Vec<_> = refs.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(names, vec!["beta", "Zeta Corp", "The Acme Company"]);
    }
}
