use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::contact::Contact;

/// Top-level key the directory is stored under.
pub const CONTACTS_KEY: &str = "Kontakti";

/// Contacts keyed by name, kept in insertion order.
///
/// Small enough that a linear scan beats hashing; the order is what
/// `list` shows and what ends up in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, Contact)>,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.position(name).map(|idx| &self.entries[idx].1)
    }

    /// Inserts or fully replaces the record under `name`, returning the old one.
    /// A replaced record keeps its place in the order.
    pub fn upsert(&mut self, name: impl Into<String>, contact: Contact) -> Option<Contact> {
        let name = name.into();
        match self.position(&name) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, contact)),
            None => {
                self.entries.push((name, contact));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> DirectoryIter<'_> {
        DirectoryIter {
            inner: &self.entries,
            idx: 0,
        }
    }
}

pub struct DirectoryIter<'a> {
    inner: &'a [(String, Contact)],
    idx: usize,
}

impl<'a> Iterator for DirectoryIter<'a> {
    type Item = (&'a str, &'a Contact);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let (name, contact) = &self.inner[self.idx];
        self.idx += 1;
        Some((name.as_str(), contact))
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = (&'a str, &'a Contact);
    type IntoIter = DirectoryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, Contact)> for Directory {
    fn from_iter<I: IntoIterator<Item = (String, Contact)>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for (name, contact) in iter {
            directory.upsert(name, contact);
        }
        directory
    }
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, contact) in &self.entries {
            map.serialize_entry(name, contact)?;
        }
        map.end()
    }
}

struct DirectoryVisitor;

impl<'de> Visitor<'de> for DirectoryVisitor {
    type Value = Directory;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of contact names to contact records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Directory, A::Error> {
        let mut directory = Directory::new();
        // Repeated keys: the later record wins, same as a plain JSON object
        while let Some((name, contact)) = access.next_entry::<String, Contact>()? {
            directory.upsert(name, contact);
        }
        Ok(directory)
    }
}

impl<'de> Deserialize<'de> for Directory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DirectoryVisitor)
    }
}

/// The whole persisted file.
///
/// Keys other than [`CONTACTS_KEY`] are carried through untouched so a
/// rewrite never drops data this version does not understand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "Kontakti", default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Directory>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn with_contacts(directory: Directory) -> Self {
        Self {
            contacts: Some(directory),
            extra: Map::new(),
        }
    }

    /// Contacts section, if one exists and holds at least one contact.
    pub fn directory(&self) -> Option<&Directory> {
        self.contacts.as_ref().filter(|d| !d.is_empty())
    }

    /// Contacts section, created empty on first use.
    pub fn directory_mut(&mut self) -> &mut Directory {
        self.contacts.get_or_insert_with(Directory::new)
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.as_ref().map_or(0, Directory::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Directory {
        let mut directory = Directory::new();
        directory.upsert("Zoe", Contact::new("111", "zoe@x.com", "A"));
        directory.upsert("Ana", Contact::new("222", "ana@x.com", "B"));
        directory.upsert("Marko", Contact::new("333", "marko@x.com", "C"));
        directory
    }

    #[test]
    fn iterates_in_insertion_order() {
        let directory = sample();
        let names: Vec<&str> = directory.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zoe", "Ana", "Marko"]);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut directory = sample();
        let old = directory.upsert("Ana", Contact::new("999", "new@x.com", "New"));

        assert_eq!(old, Some(Contact::new("222", "ana@x.com", "B")));
        assert_eq!(directory.len(), 3);
        assert_eq!(directory.get("Ana"), Some(&Contact::new("999", "new@x.com", "New")));

        let names: Vec<&str> = directory.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zoe", "Ana", "Marko"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let directory = sample();
        assert!(directory.contains("Ana"));
        assert!(!directory.contains("ana"));
        assert!(directory.get("ANA").is_none());
    }

    #[test]
    fn remove_returns_the_record() {
        let mut directory = sample();
        assert_eq!(directory.remove("Zoe"), Some(Contact::new("111", "zoe@x.com", "A")));
        assert_eq!(directory.remove("Zoe"), None);
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn json_keeps_file_order() -> Result<(), serde_json::Error> {
        let json = r#"{"b":{"Telefon":"1","Email":"b@x","Adresa":""},
                       "a":{"Telefon":"2","Email":"a@x","Adresa":""}}"#;
        let directory: Directory = serde_json::from_str(json)?;

        let names: Vec<&str> = directory.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);

        let written = serde_json::to_string(&directory)?;
        assert!(written.find("\"b\"") < written.find("\"a\""));
        Ok(())
    }

    #[test]
    fn document_without_contacts_key() -> Result<(), serde_json::Error> {
        let document: Document = serde_json::from_str("{}")?;
        assert!(document.contacts.is_none());
        assert!(document.directory().is_none());
        assert_eq!(serde_json::to_string(&document)?, "{}");
        Ok(())
    }

    #[test]
    fn empty_contacts_section_counts_as_no_directory() -> Result<(), serde_json::Error> {
        let document: Document = serde_json::from_str(r#"{"Kontakti":{}}"#)?;
        assert!(document.contacts.is_some());
        assert!(document.directory().is_none());
        Ok(())
    }

    #[test]
    fn document_keeps_sibling_keys() -> Result<(), serde_json::Error> {
        let json = r#"{"Kontakti":{"Ana":{"Telefon":"1","Email":"a@x","Adresa":"S"}},"Verzija":2}"#;
        let mut document: Document = serde_json::from_str(json)?;

        document.directory_mut().remove("Ana");
        let written = serde_json::to_string(&document)?;

        assert!(written.contains("\"Verzija\":2"));
        assert!(written.contains("\"Kontakti\":{}"));
        Ok(())
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(serde_json::from_str::<Document>(r#"{"Kontakti":[1,2]}"#).is_err());
        assert!(serde_json::from_str::<Document>(r#"{"Kontakti":{"Ana":{"Telefon":1}}}"#).is_err());
        assert!(serde_json::from_str::<Document>("[]").is_err());
    }
}
