//! Entity capability and custom attribute encoding

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

/// Open set of extra fields sent alongside a customer or contact
pub type CustomAttributes = serde_json::Map<String, Value>;

/// A resource the API can create, list and update.
///
/// The shared request pipeline is generic over this trait.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Singular resource name, used in messages
    const KIND: &'static str;

    /// Vendor-assigned id, `None` until the entity has been saved
    fn id(&self) -> Option<&str>;
}

/// An entity that can be attached to a customer
pub trait CustomerScoped: Entity {
    /// Drop the customer's vendor id. The refId form of the link is kept.
    fn clear_customer_id(&mut self);
}

/// `serialize_with` target for a flattened [`CustomAttributes`] field.
///
/// `declared` lists the wire names of the entity's own fields; attributes
/// using one of them are skipped.
pub fn serialize_attributes<S: Serializer>(
    attributes: &CustomAttributes,
    declared: &[&str],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(attributes.iter().filter(|(name, _)| {
        let collides = declared.contains(&name.as_str());
        if collides {
            warn!(attribute = %name, "custom attribute shadows a declared field, dropped");
        }
        !collides
    }))
}

/// `deserialize_with` target for fields the API may send as `null`.
///
/// `null` decodes as the type's default, like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `deserialize_with` target for a flattened [`CustomAttributes`] field.
///
/// The API never returns custom attributes, so leftover keys are consumed
/// and discarded.
pub fn skip_attributes<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<CustomAttributes, D::Error> {
    CustomAttributes::deserialize(deserializer)?;
    Ok(CustomAttributes::new())
}
