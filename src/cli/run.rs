use clap::Parser;
use dotenv::dotenv;

use crate::cli::display_contact;
use crate::prelude::{
    AppError, ContactStore,
    command::{Cli, Commands},
};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();
    let store = ContactStore::new(cli.db);

    match cli.command {
        Commands::Add { name, email, phone } => {
            match store.add(name, email, phone) {
                Ok(_) => {
                    println!("Contact added successfully");
                    Ok(())
                }
                // Rejection is a reported outcome, not a process failure.
                Err(AppError::DuplicateEmail(email)) => {
                    println!("Contact with email {email} is already in the list");
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }

        // Listing contacts
        Commands::List => {
            let contacts = store.read_all()?;

            if contacts.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (mut i, c) in contacts.iter().enumerate() {
                i += 1;
                println!(
                    "{i:>3}. {:<20} {:^30} {:<15} {:<36}",
                    c.name, c.email, c.phone, c.id
                );
            }

            Ok(())
        }

        Commands::Get { id } => {
            match store.find_by_id(&id)? {
                Some(contact) => println!("{}", display_contact(&contact)),
                None => println!("No contact found with id {id}"),
            }

            Ok(())
        }

        Commands::Remove { id } => {
            store.remove(&id)?;

            println!("Contact removed successfully");
            Ok(())
        }
    }
}
