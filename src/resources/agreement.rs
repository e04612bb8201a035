//! Agreements (contracts)

use crate::client::SkalinClient;
use crate::codec::{CalendarDate, CustomerScoped, Entity};
use crate::error::Result;
use crate::pagination::GetParams;
use serde::{Deserialize, Serialize};

/// Collection path
pub const AGREEMENTS_PATH: &str = "/agreements";

/// Path of a single agreement
pub fn agreement_path(id: &str) -> String {
    format!("{AGREEMENTS_PATH}/{id}")
}

/// Agreements of a customer
pub fn customer_agreements_path(customer_id: &str) -> String {
    format!("/customers/{customer_id}/agreements")
}

/// A contract between the customer and the Skalin user.
///
/// Numeric fields are optional so that `0` can be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Agreement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Vendor id of the customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// RefId of the customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrr: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,
}

impl Entity for Agreement {
    const KIND: &'static str = "agreement";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl CustomerScoped for Agreement {
    fn clear_customer_id(&mut self) {
        self.customer_id = None;
    }
}

impl SkalinClient {
    /// Create an agreement, or update the first one sharing its refId
    pub async fn save_agreement(&self, agreement: &Agreement) -> Result<Agreement> {
        self.save(AGREEMENTS_PATH, agreement).await
    }

    /// Update an agreement by id; returns the input as the API echoes nothing
    pub async fn update_agreement(&self, agreement: &Agreement) -> Result<Agreement> {
        let id = self.require_id(agreement)?;
        self.update(&agreement_path(id), agreement).await?;
        Ok(agreement.clone())
    }

    /// List every agreement matching `params`, following pagination
    pub async fn get_agreements(&self, params: Option<GetParams>) -> Result<Vec<Agreement>> {
        self.get_all(AGREEMENTS_PATH, params).await
    }

    /// Create an agreement under the customer with vendor id `customer_id`
    pub async fn create_agreement_for_customer(
        &self,
        agreement: &Agreement,
        customer_id: &str,
    ) -> Result<Agreement> {
        self.create_for_customer(&customer_agreements_path(customer_id), agreement)
            .await
    }

    /// Delete an agreement by id
    pub async fn delete_agreement(&self, agreement: &Agreement) -> Result<()> {
        let id = self.require_id(agreement)?;
        self.delete(&agreement_path(id)).await
    }
}
