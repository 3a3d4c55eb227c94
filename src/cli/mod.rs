pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "id:    {}\nname:  {}\nemail: {}\nphone: {}",
        contact.id, contact.name, contact.email, contact.phone
    )
}
