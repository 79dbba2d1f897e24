//! Turning a picked geocoding candidate into form values.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::address::AddressCandidate;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

const MUNICIPALITY_PREFIXES: [&str; 2] = ["Municipality of ", "Municipal of "];

/// Address fields derived from a selected candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedAddress {
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

/// Derives the address, city and postal code for `candidate`.
///
/// `current_address` is what the visitor has typed so far. It only matters
/// when the candidate carries no house number: street-level results usually
/// don't, and the number the visitor already typed is kept instead.
pub fn select_suggestion(
    candidate: &AddressCandidate,
    current_address: Option<&str>,
) -> SelectedAddress {
    let house_number = candidate
        .detail(|a| a.house_number.as_ref())
        .or_else(|| current_address.and_then(|text| DIGIT_RUN.find(text)).map(|m| m.as_str()))
        .unwrap_or_default();

    let road = candidate
        .detail(|a| a.road.as_ref())
        .or_else(|| candidate.name.as_deref().filter(|name| !name.is_empty()))
        .unwrap_or(candidate.display_name.as_str());

    let address = if house_number.is_empty() {
        road.to_string()
    } else {
        format!("{road} {house_number}")
    };

    SelectedAddress {
        address,
        city: city_of(candidate),
        postal_code: candidate
            .detail(|a| a.postcode.as_ref())
            .unwrap_or_default()
            .to_string(),
    }
}

fn city_of(candidate: &AddressCandidate) -> String {
    if let Some(place) = candidate
        .detail(|a| a.city.as_ref())
        .or_else(|| candidate.detail(|a| a.town.as_ref()))
        .or_else(|| candidate.detail(|a| a.village.as_ref()))
    {
        return place.to_string();
    }

    candidate
        .detail(|a| a.municipality.as_ref())
        .map(|municipality| {
            MUNICIPALITY_PREFIXES
                .iter()
                .fold(municipality.to_string(), |name, prefix| name.replacen(*prefix, "", 1))
        })
        .unwrap_or_default()
}
