pub mod command;
pub mod console;
pub mod run;

pub use run::run_app;

use crate::domain::contact::Contact;

const RULE_WIDTH: usize = 30;

pub const EMPTY_DIRECTORY: &str = "The directory is empty.";

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn display_contact(name: &str, contact: &Contact) -> String {
    format!(
        "Name: {}\n\
        Phone: {}\n\
        Email: {}\n\
        Address: {}",
        name, contact.phone, contact.email, contact.address
    )
}

/// Frames each entry with a rule line above it, plus one after the last.
pub fn render_listing<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a Contact)>,
{
    let mut output = String::new();

    for (name, contact) in entries {
        output.push_str(&rule());
        output.push('\n');
        output.push_str(&display_contact(name, contact));
        output.push('\n');
    }
    output.push_str(&rule());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::Directory;

    #[test]
    fn check_display_contact() {
        let contact = Contact::new("12345", "ana@x.com", "Street 1");

        assert_eq!(
            display_contact("Ana", &contact),
            "Name: Ana\n\
            Phone: 12345\n\
            Email: ana@x.com\n\
            Address: Street 1"
        );
    }

    #[test]
    fn listing_is_framed_by_rules() {
        let mut directory = Directory::new();
        directory.upsert("Ana", Contact::new("1", "ana@x.com", "A"));
        directory.upsert("Bo", Contact::new("2", "bo@x.com", "B"));

        let listing = render_listing(&directory);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], rule());
        assert_eq!(lines[1], "Name: Ana");
        assert_eq!(lines[5], rule());
        assert_eq!(lines[6], "Name: Bo");
        assert_eq!(lines[10], rule());
        assert_eq!(rule().len(), 30);
    }

    #[test]
    fn single_entry_listing() {
        let contact = Contact::new("1", "ana@x.com", "A");
        let listing = render_listing(std::iter::once(("Ana", &contact)));

        assert!(listing.starts_with(&format!("{}\nName: Ana\n", rule())));
        assert!(listing.ends_with(&format!("Address: A\n{}", rule())));
    }
}
