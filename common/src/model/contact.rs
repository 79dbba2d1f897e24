use serde::{Deserialize, Serialize};

/// Raw values of the contact form controls.
///
/// `None` is an untouched (or reset) control; `Some("")` is a control the
/// visitor emptied. Validation treats both as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormValues {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub message: Option<String>,
    pub terms: bool,
}

/// The six values handed to the email template.
///
/// Field names follow the template variables configured at the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplateParams {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub message: Option<String>,
}

impl From<&ContactFormValues> for EmailTemplateParams {
    fn from(values: &ContactFormValues) -> Self {
        Self {
            full_name: values.full_name.clone(),
            email: values.email.clone(),
            city: values.city.clone(),
            postal_code: values.postal_code.clone(),
            address: values.address.clone(),
            message: values.message.clone(),
        }
    }
}
