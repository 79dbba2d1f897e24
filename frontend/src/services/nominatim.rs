use common::config::NOMINATIM_SEARCH_URL;
use common::error::LookupError;
use common::model::address::AddressCandidate;
use common::requests::{nominatim_search_headers, nominatim_search_params};
use gloo_net::http::Request;

/// Free-text address search against Nominatim.
///
/// One request, no retry. An empty vector means nothing matched.
pub async fn search(query: &str) -> Result<Vec<AddressCandidate>, LookupError> {
    let params = nominatim_search_params(query);
    let mut request = Request::get(NOMINATIM_SEARCH_URL)
        .query(params.iter().map(|(name, value)| (*name, value.as_str())));
    for (name, value) in nominatim_search_headers() {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LookupError::Status(response.status()));
    }

    response
        .json::<Vec<AddressCandidate>>()
        .await
        .map_err(|e| LookupError::Decode(e.to_string()))
}
