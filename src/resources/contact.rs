//! Contacts

use crate::client::SkalinClient;
use crate::codec::{
    null_as_default, serialize_attributes, skip_attributes, CustomAttributes, CustomerScoped,
    Entity,
};
use crate::error::Result;
use crate::pagination::GetParams;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Collection path
pub const CONTACTS_PATH: &str = "/contacts";

/// Path of a single contact
pub fn contact_path(id: &str) -> String {
    format!("{CONTACTS_PATH}/{id}")
}

/// Contacts of a customer
pub fn customer_contacts_path(customer_id: &str) -> String {
    format!("/customers/{customer_id}/contacts")
}

const CONTACT_FIELDS: &[&str] = &[
    "id",
    "customerId",
    "customer",
    "refId",
    "email",
    "firstName",
    "lastName",
    "phone",
    "tags",
    "lastActivityTs",
];

/// A person attached to a customer.
///
/// The customer link is either `customer_id` (vendor id) or `customer`
/// (the customer's refId); set one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_ts: Option<DateTime<Utc>>,
    #[serde(
        flatten,
        serialize_with = "serialize_contact_attributes",
        deserialize_with = "skip_attributes"
    )]
    pub custom_attributes: CustomAttributes,
}

fn serialize_contact_attributes<S: Serializer>(
    attributes: &CustomAttributes,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serialize_attributes(attributes, CONTACT_FIELDS, serializer)
}

impl Entity for Contact {
    const KIND: &'static str = "contact";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl CustomerScoped for Contact {
    fn clear_customer_id(&mut self) {
        self.customer_id = None;
    }
}

impl SkalinClient {
    /// Create a contact, or update the first one sharing its refId
    pub async fn save_contact(&self, contact: &Contact) -> Result<Contact> {
        self.save(CONTACTS_PATH, contact).await
    }

    /// Update a contact by id.
    ///
    /// The API does not echo the updated contact, so the input is returned.
    pub async fn update_contact(&self, contact: &Contact) -> Result<Contact> {
        let id = self.require_id(contact)?;
        self.update(&contact_path(id), contact).await?;
        Ok(contact.clone())
    }

    /// List every contact matching `params`, following pagination
    pub async fn get_contacts(&self, params: Option<GetParams>) -> Result<Vec<Contact>> {
        self.get_all(CONTACTS_PATH, params).await
    }

    /// Create a contact under the customer with vendor id `customer_id`
    pub async fn create_contact_for_customer(
        &self,
        contact: &Contact,
        customer_id: &str,
    ) -> Result<Contact> {
        self.create_for_customer(&customer_contacts_path(customer_id), contact)
            .await
    }

    /// Delete a contact by id
    pub async fn delete_contact(&self, contact: &Contact) -> Result<()> {
        let id = self.require_id(contact)?;
        self.delete(&contact_path(id)).await
    }
}
