//! Resource module
//!
//! Typed entities of the Skalin API and the [`SkalinClient`](crate::SkalinClient)
//! operations on them:
//!
//! | Resource | save | update | list | create for customer | delete | get one |
//! |----------|------|--------|------|---------------------|--------|---------|
//! | Customer | yes  |        | yes  |                     |        |         |
//! | Contact  | yes  | yes    | yes  | yes                 | yes    |         |
//! | Agreement| yes  | yes    | yes  | yes                 | yes    |         |
//! | Tag      |      |        | yes  |                     |        | yes     |

mod agreement;
mod contact;
mod customer;
mod tag;

pub use agreement::{agreement_path, customer_agreements_path, Agreement, AGREEMENTS_PATH};
pub use contact::{contact_path, customer_contacts_path, Contact, CONTACTS_PATH};
pub use customer::{Customer, CUSTOMERS_PATH};
pub use tag::{tag_path, Tag, TAGS_PATH};
