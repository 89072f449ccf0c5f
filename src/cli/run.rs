use std::io::{BufRead, Write};

use clap::Parser;
use dotenv::dotenv;
use tracing::debug;

use super::{EMPTY_DIRECTORY, render_listing};
use crate::{
    cli::{
        command::{Cli, Commands},
        console::Console,
    },
    domain::{
        contact::{Contact, normalize_name},
        manager::{AddOutcome, Confirm, DirectoryManager, FixedAnswer, Lookup, RemoveOutcome},
    },
    errors::AppError,
    logging::init_logging,
    storage::{DirectoryStore, JsonStorage},
};

#[derive(Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddContact,
    ListContacts,
    FindContact,
    DeleteContact,
    Exit,
}

pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, AppError> {
    match input.trim() {
        "1" => Ok(MenuChoice::AddContact),
        "2" => Ok(MenuChoice::ListContacts),
        "3" => Ok(MenuChoice::FindContact),
        "4" => Ok(MenuChoice::DeleteContact),
        "5" => Ok(MenuChoice::Exit),
        other => Err(AppError::ParseCommand(other.to_string())),
    }
}

const MENU: &str = "\nContact Directory - choose an option:\n\
    1. Add contact\n\
    2. List contacts\n\
    3. Find contact\n\
    4. Delete contact\n\
    5. Exit";

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    init_logging(cli.verbosity());
    debug!(file = %cli.file.display(), "using directory file");

    let storage: Box<dyn DirectoryStore> = Box::new(JsonStorage::new(&cli.file));
    let manager = DirectoryManager::new(storage);
    let mut console = Console::stdio();

    match cli.command {
        Some(command) => run_command(&manager, &mut console, command),
        None => run_menu(&manager, &mut console),
    }
}

/// One-shot mode. Errors are returned so the process can exit non-zero.
pub fn run_command<S, R, W>(
    manager: &DirectoryManager<S>,
    console: &mut Console<R, W>,
    command: Commands,
) -> Result<(), AppError>
where
    S: DirectoryStore,
    R: BufRead,
    W: Write,
{
    match command {
        Commands::Add {
            name,
            phone,
            email,
            address,
            yes,
        } => add_contact(manager, console, yes, &name, Contact::new(phone, email, address)),
        Commands::List => list_contacts(manager, console),
        Commands::Find { name } => find_contact(manager, console, &name),
        Commands::Delete { name, yes } => delete_contact(manager, console, yes, &name),
    }
}

/// Interactive mode. Operation failures are reported and the menu comes back;
/// only a broken console ends the loop early.
pub fn run_menu<S, R, W>(
    manager: &DirectoryManager<S>,
    console: &mut Console<R, W>,
) -> Result<(), AppError>
where
    S: DirectoryStore,
    R: BufRead,
    W: Write,
{
    loop {
        console.say(MENU)?;

        let Some(action) = console.ask("> ")? else {
            console.say("\nBye!")?;
            return Ok(());
        };

        let result = match parse_menu_choice(&action) {
            Ok(MenuChoice::AddContact) => menu_add(manager, console),
            Ok(MenuChoice::ListContacts) => list_contacts(manager, console),
            Ok(MenuChoice::FindContact) => menu_find(manager, console),
            Ok(MenuChoice::DeleteContact) => menu_delete(manager, console),
            Ok(MenuChoice::Exit) => {
                console.say("Bye!")?;
                return Ok(());
            }
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            debug!(error = %e, "operation failed");
            console.say(&format!("Error: {e}"))?;
        }
    }
}

fn menu_add<S, R, W>(manager: &DirectoryManager<S>, console: &mut Console<R, W>) -> Result<(), AppError>
where
    S: DirectoryStore,
    R: BufRead,
    W: Write,
{
    let Some(name) = console.ask("Enter name: ")? else {
        return Ok(());
    };
    let Some(phone) = console.ask("Enter phone number: ")? else {
        return Ok(());
    };
    let Some(email) = console.ask("Enter email: ")? else {
        return Ok(());
    };
    let Some(address) = console.ask("Enter address: ")? else {
        return Ok(());
    };

    add_contact(manager, console, false, &name, Contact::new(phone, email, address))
}

fn menu_find<S, R, W>(manager: &DirectoryManager<S>, console: &mut Console<R, W>) -> Result<(), AppError>
where
    S: DirectoryStore,
    R: BufRead,
    W: Write,
{
    match console.ask("Enter name to find: ")? {
        Some(name) => find_contact(manager, console, &name),
        None => Ok(()),
    }
}

fn menu_delete<S, R, W>(
    manager: &DirectoryManager<S>,
    console: &mut Console<R, W>,
) -> Result<(), AppError>
where
    S: DirectoryStore,
    R: BufRead,
    W: Write,
{
    match console.ask("Enter name to delete: ")? {
        Some(name) => delete_contact(manager, console, false, &name),
        None => Ok(()),
    }
}

fn add_contact<S, R, W>(
    manager: &DirectoryManager<S>,
    console: &mut Console<R, W>,
    assume_yes: bool,
    name: &str,
    contact: Contact,
) -> Result<(), AppError>
where
    S: DirectoryStore,
    R: BufRead,
    W: Write,
{
    let outcome = {
        let mut yes = FixedAnswer(true);
        let confirm: &mut dyn Confirm = if assume_yes { &mut yes } else { &mut *console };
        manager.add_contact(name, contact, confirm)?
    };

    let name = normalize_name(name);
    match outcome {
        AddOutcome::Added => console.say(&format!("Contact '{name}' added.")),
        AddOutcome::Replaced => console.say(&format!("Contact '{name}' updated.")),
        AddOutcome::Kept => console.say(&format!("Contact '{name}' was left unchanged.")),
    }
}

fn list_contacts<S, R, W>(
    manager: &DirectoryManager<S>,
    console: &mut Console<R, W>,
) -> Result<(), AppError>
where
    S: DirectoryStore,
    R: BufRead,
    W: Write,
{
    let directory = manager.list_contacts()?;

    if directory.is_empty() {
        return console.say(EMPTY_DIRECTORY);
    }
    console.say(&render_listing(&directory))
}

fn find_contact<S, R, W>(
    manager: &DirectoryManager<S>,
    console: &mut Console<R, W>,
    name: &str,
) -> Result<(), AppError>
where
    S: DirectoryStore,
    R: BufRead,
    W: Write,
{
    let name = normalize_name(name);

    match manager.find_contact(name)? {
        Lookup::Empty => console.say(EMPTY_DIRECTORY),
        Lookup::Found(contact) => console.say(&render_listing(std::iter::once((name, &contact)))),
        Lookup::NotFound => console.say(&not_found(name)),
    }
}

fn delete_contact<S, R, W>(
    manager: &DirectoryManager<S>,
    console: &mut Console<R, W>,
    assume_yes: bool,
    name: &str,
) -> Result<(), AppError>
where
    S: DirectoryStore,
    R: BufRead,
    W: Write,
{
    let name = normalize_name(name);

    let outcome = {
        let mut yes = FixedAnswer(true);
        let confirm: &mut dyn Confirm = if assume_yes { &mut yes } else { &mut *console };
        manager.remove_contact(name, confirm)?
    };

    match outcome {
        RemoveOutcome::Empty => console.say(EMPTY_DIRECTORY),
        RemoveOutcome::NotFound => console.say(&not_found(name)),
        RemoveOutcome::Cancelled => console.say("Deletion cancelled."),
        RemoveOutcome::Removed(_) => console.say(&format!("Contact '{name}' deleted.")),
    }
}

fn not_found(name: &str) -> String {
    AppError::NotFound(format!("Contact '{name}'")).to_string()
}
