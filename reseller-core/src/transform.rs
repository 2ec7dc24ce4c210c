use crate::models::{RawReseller, Reseller};

/// Synthetic country injected for resellers flagged as international
pub const INTERNATIONAL_COUNTRY: &str = "International";

/// Prepare raw records for filtering
/// Same length and order as the input; international resellers get
/// `INTERNATIONAL_COUNTRY` prepended to their countries
pub fn transform_for_filtering(raw_resellers: &[RawReseller]) -> Vec<Reseller> {
    raw_resellers.iter().map(transform_reseller).collect()
}

fn transform_reseller(raw: &RawReseller) -> Reseller {
    let countries = if raw.international {
        std::iter::once(INTERNATIONAL_COUNTRY.to_string())
            .chain(raw.countries.iter().cloned())
            .collect()
    } else {
        raw.countries.clone()
    };

    Reseller {
        company: raw.company.clone(),
        email: raw.email.clone(),
        international: raw.international,
        countries,
        reseller_level: raw.reseller_level.clone(),
        url: raw.url.clone(),
        extra: raw.extra.clone(),
    }
}
