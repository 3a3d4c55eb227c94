use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Builds a contact with a freshly generated id.
    /// The id is opaque to the rest of the program and never changes.
    pub fn new(name: String, email: String, phone: String) -> Self {
        Contact {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
        }
    }
}
