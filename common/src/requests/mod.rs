//! Wire shapes of the two outbound requests.
//!
//! The frontend performs the actual HTTP calls; this module only decides what
//! goes on the wire so it can be checked without a browser.

use serde::Serialize;

use crate::config::{
    EMAILJS_PUBLIC_KEY, EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, NOMINATIM_LANGUAGE,
    NOMINATIM_RESULT_LIMIT,
};
use crate::model::contact::EmailTemplateParams;

/// Query parameters of a Nominatim free-text search for `query`.
pub fn nominatim_search_params(query: &str) -> Vec<(&'static str, String)> {
    vec![
        ("q", query.to_string()),
        ("format", "json".to_string()),
        ("addressdetails", "1".to_string()),
        ("limit", NOMINATIM_RESULT_LIMIT.to_string()),
    ]
}

/// Headers sent with every Nominatim search.
pub fn nominatim_search_headers() -> [(&'static str, &'static str); 1] {
    [("Accept-Language", NOMINATIM_LANGUAGE)]
}

/// Body of an EmailJS `email/send` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailSendRequest {
    pub service_id: String,
    pub template_id: String,
    /// The account's public key. EmailJS still calls it `user_id` on the wire.
    pub user_id: String,
    pub template_params: EmailTemplateParams,
}

impl EmailSendRequest {
    /// Wraps `params` with the site's fixed service, template and key.
    pub fn contact(params: EmailTemplateParams) -> Self {
        Self {
            service_id: EMAILJS_SERVICE_ID.to_string(),
            template_id: EMAILJS_TEMPLATE_ID.to_string(),
            user_id: EMAILJS_PUBLIC_KEY.to_string(),
            template_params: params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_params_request_five_detailed_json_results() {
        let params = nominatim_search_params("Xanthippou 11");
        assert_eq!(
            params,
            vec![
                ("q", "Xanthippou 11".to_string()),
                ("format", "json".to_string()),
                ("addressdetails", "1".to_string()),
                ("limit", "5".to_string()),
            ]
        );
        assert_eq!(nominatim_search_headers(), [("Accept-Language", "en")]);
    }

    #[test]
    fn contact_request_serializes_provider_envelope() {
        let request = EmailSendRequest::contact(EmailTemplateParams {
            full_name: Some("Giannis".into()),
            email: Some("giannis@gmail.com".into()),
            city: Some("Thessaloniki".into()),
            postal_code: Some("54623".into()),
            address: Some("Aristotelous 16".into()),
            message: None,
        });

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "service_id": "smelly_cat",
                "template_id": "template_xnmrr73",
                "user_id": "727E-EGLO6xY0RUd1",
                "template_params": {
                    "fullName": "Giannis",
                    "email": "giannis@gmail.com",
                    "city": "Thessaloniki",
                    "postalCode": "54623",
                    "address": "Aristotelous 16",
                    "message": null
                }
            })
        );
    }
}
