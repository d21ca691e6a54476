use serde::{Deserialize, Serialize};

use crate::domain::customer::{CustomerRecord, join_names};

/// Rental contract with the denormalized customer columns of the backend view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContractRecord {
    pub id: String,
    #[serde(default)]
    pub contract_number: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub start_datetime: Option<String>,
    #[serde(default)]
    pub end_datetime: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub customer_firstname: Option<String>,
    #[serde(default)]
    pub customer_lastname: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_city: Option<String>,
    #[serde(default)]
    pub customer_country: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub customer_postal_code: Option<String>,
}

impl ContractRecord {
    pub fn customer_full_name(&self) -> Option<String> {
        join_names(
            self.customer_firstname.as_deref(),
            self.customer_lastname.as_deref(),
        )
    }

    /// Rebuilds the customer from the contract columns when the contract
    /// references one.
    pub fn customer_snapshot(&self) -> Option<CustomerRecord> {
        let id = self.customer_id.as_ref().filter(|id| !id.is_empty())?;
        Some(CustomerRecord {
            id: id.clone(),
            firstname: Some(self.customer_firstname.clone().unwrap_or_default()),
            lastname: Some(self.customer_lastname.clone().unwrap_or_default()),
            email: Some(self.customer_email.clone().unwrap_or_default()),
            phone: self.customer_phone.clone(),
            birthday: None,
            country: self.customer_country.clone(),
            city: self.customer_city.clone(),
            address: self.customer_address.clone(),
            postal_code: self.customer_postal_code.clone(),
            created_by: self.created_by.clone(),
            created_at: None,
        })
    }
}
