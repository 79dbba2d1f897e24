use common::config::EMAILJS_SEND_URL;
use common::error::SendError;
use common::model::contact::EmailTemplateParams;
use common::requests::EmailSendRequest;
use gloo_net::http::Request;

/// Delivers the contact form through the site's EmailJS template.
///
/// Anything but a 2xx answer is a failure; the provider's error text is kept
/// for logging only.
pub async fn send_contact(params: EmailTemplateParams) -> Result<(), SendError> {
    let request = Request::post(EMAILJS_SEND_URL)
        .json(&EmailSendRequest::contact(params))
        .map_err(|e| SendError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SendError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(SendError::Rejected { status, body })
    }
}
