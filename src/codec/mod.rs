//! Entity codec module
//!
//! Wire rules shared by every resource:
//! - custom attributes are flattened into the entity object, never nested
//! - agreement dates travel as `YYYY-MM-DD`
//!
//! # Collisions
//!
//! A custom attribute named like a declared field of the entity is dropped
//! when encoding. Declared fields always win, whether or not they are set.

mod date;
mod entity;

pub use date::{CalendarDate, DATE_FORMAT};
pub use entity::{
    null_as_default, serialize_attributes, skip_attributes, CustomAttributes, CustomerScoped,
    Entity,
};

#[cfg(test)]
mod tests;
