//! Customers

use crate::client::SkalinClient;
use crate::codec::{
    null_as_default, serialize_attributes, skip_attributes, CustomAttributes, Entity,
};
use crate::error::Result;
use crate::pagination::GetParams;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Collection path
pub const CUSTOMERS_PATH: &str = "/customers";

/// Wire names of the declared customer fields
const CUSTOMER_FIELDS: &[&str] = &["id", "refId", "name", "stage", "tags", "lastActivityTs"];

/// A Skalin customer (an account)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_ts: Option<DateTime<Utc>>,
    /// Sent flattened into the customer object; never populated on decode
    #[serde(
        flatten,
        serialize_with = "serialize_customer_attributes",
        deserialize_with = "skip_attributes"
    )]
    pub custom_attributes: CustomAttributes,
}

fn serialize_customer_attributes<S: Serializer>(
    attributes: &CustomAttributes,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serialize_attributes(attributes, CUSTOMER_FIELDS, serializer)
}

impl Entity for Customer {
    const KIND: &'static str = "customer";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl SkalinClient {
    /// Create a customer, or update the first one sharing its refId
    pub async fn save_customer(&self, customer: &Customer) -> Result<Customer> {
        self.save(CUSTOMERS_PATH, customer).await
    }

    /// List every customer matching `params`, following pagination
    pub async fn get_customers(&self, params: Option<GetParams>) -> Result<Vec<Customer>> {
        self.get_all(CUSTOMERS_PATH, params).await
    }
}
