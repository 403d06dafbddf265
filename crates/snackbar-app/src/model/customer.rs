use super::CustomerId;
use serde::{Deserialize, Serialize};

/// Represents a registered customer.
///
/// `authentication_id` is the external principal identifier handed over by
/// the identity provider; it is the only contract the workflow relies on to
/// connect a logged-in user to their customer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    pub id: CustomerId,
    pub authentication_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Customer {
    pub fn new(id: CustomerId, authentication_id: impl Into<String>) -> Self {
        Self {
            id,
            authentication_id: authentication_id.into(),
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
        }
    }
}
