use serde::{Deserialize, Serialize};

/// One result of a Nominatim free-text search.
///
/// Only the fields the contact form reads are modelled; everything else in the
/// response (bounding box, osm ids, importance, ...) is ignored by serde.
/// Candidates arrive fresh with every lookup and are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressCandidate {
    pub place_id: u64,
    /// Full comma-separated label, e.g. `"Xanthippou 11, Agioi Anargyroi, ..."`.
    pub display_name: String,
    /// Short name of the matched feature. Often the road for street results.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<AddressDetails>,
}

/// Structured address breakdown returned when `addressdetails=1` is requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressDetails {
    pub road: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub municipality: Option<String>,
    pub postcode: Option<String>,
}

impl AddressCandidate {
    /// Structured detail lookup that treats empty strings as missing, the way
    /// the selection rules expect.
    pub fn detail<F>(&self, field: F) -> Option<&str>
    where
        F: Fn(&AddressDetails) -> Option<&String>,
    {
        self.address
            .as_ref()
            .and_then(field)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nominatim_search_result() {
        let json = r#"[{
            "place_id": 123456,
            "licence": "Data © OpenStreetMap contributors",
            "osm_type": "way",
            "lat": "37.98",
            "lon": "23.74",
            "display_name": "Xanthippou 11, Agioi Anargyroi, Greece",
            "name": "Xanthippou",
            "address": {
                "road": "Xanthippou",
                "house_number": "11",
                "municipality": "Municipality of Agioi Anargyroi",
                "postcode": "13562",
                "country": "Greece"
            }
        }]"#;

        let candidates: Vec<AddressCandidate> = serde_json::from_str(json).unwrap();
        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert_eq!(candidate.place_id, 123456);
        assert_eq!(candidate.name.as_deref(), Some("Xanthippou"));
        assert_eq!(candidate.detail(|a| a.house_number.as_ref()), Some("11"));
        assert_eq!(candidate.detail(|a| a.city.as_ref()), None);
        assert_eq!(
            candidate.detail(|a| a.municipality.as_ref()),
            Some("Municipality of Agioi Anargyroi")
        );
    }

    #[test]
    fn missing_address_block_is_tolerated() {
        let json = r#"{"place_id": 7, "display_name": "Somewhere"}"#;
        let candidate: AddressCandidate = serde_json::from_str(json).unwrap();
        assert!(candidate.address.is_none());
        assert!(candidate.name.is_none());
        assert_eq!(candidate.detail(|a| a.road.as_ref()), None);
    }

    #[test]
    fn empty_detail_counts_as_missing() {
        let candidate = AddressCandidate {
            place_id: 1,
            display_name: "X".into(),
            name: None,
            address: Some(AddressDetails {
                house_number: Some(String::new()),
                ..Default::default()
            }),
        };
        assert_eq!(candidate.detail(|a| a.house_number.as_ref()), None);
    }
}
