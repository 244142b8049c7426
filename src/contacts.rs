// Contacts module - the record type, its store, and its fixed view configurations
//
// The store is passed to handlers through application state; nothing here is
// global. View configurations are built once at startup by the factory
// functions at the bottom and shared read-only afterwards.

use serde::Serialize;
use serde_json::{json, Value};

use crate::server::routes::{CONTACT_DETAIL_VIEW, CONTACT_EDIT_VIEW};
use crate::templates::{DETAIL_TEMPLATE, TABLE_TEMPLATE};
use crate::views::{DetailView, Field, Record, TableView, TableViewAction, ViewConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub pk: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(pk: u64, name: &str, email: &str, phone: &str) -> Self {
        Self {
            pk,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl Record for Contact {
    fn pk(&self) -> String {
        self.pk.to_string()
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "pk" => Some(json!(self.pk)),
            "name" => Some(json!(self.name)),
            "email" => Some(json!(self.email)),
            "phone" => Some(json!(self.phone)),
            _ => None,
        }
    }
}

/// Read access to the contact list
pub trait ContactStore: Send + Sync {
    /// Every contact, in store order
    fn all(&self) -> Vec<Contact>;

    /// First contact whose key stringifies to `pk`
    fn find(&self, pk: &str) -> Option<Contact>;
}

/// Fixed in-memory list
#[derive(Debug, Clone, Default)]
pub struct InMemoryContacts {
    contacts: Vec<Contact>,
}

impl InMemoryContacts {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// The three demo contacts served by default
    pub fn sample() -> Self {
        Self::new(vec![
            Contact::new(0, "Marfa", "marfa@example.com", "541 555 0100"),
            Contact::new(1, "Ula", "ula@example.com", "541 555 0101"),
            Contact::new(2, "Cadence", "cadence@example.com", "541 555 0102"),
        ])
    }
}

impl ContactStore for InMemoryContacts {
    fn all(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn find(&self, pk: &str) -> Option<Contact> {
        self.contacts.iter().find(|c| c.pk.to_string() == pk).cloned()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View configuration
// ─────────────────────────────────────────────────────────────────────────────

pub fn contact_fields() -> Vec<Field<Contact>> {
    vec![
        Field::text_with("name", |c: &Contact| json!(c.name)).with_label("Name"),
        Field::text_with("email", |c: &Contact| json!(c.email)).with_label("Email"),
        Field::text_with("phone", |c: &Contact| json!(c.phone)).with_label("Phone"),
    ]
}

pub fn contact_actions() -> Vec<TableViewAction> {
    vec![
        TableViewAction::new(CONTACT_DETAIL_VIEW, "View"),
        TableViewAction::new(CONTACT_EDIT_VIEW, "Edit"),
    ]
}

pub fn table_view() -> TableView<Contact> {
    TableView::new(
        ViewConfig::new()
            .fields(contact_fields())
            .actions(contact_actions())
            .template(TABLE_TEMPLATE),
    )
}

pub fn detail_view() -> DetailView<Contact> {
    DetailView::new(
        ViewConfig::new()
            .fields(contact_fields())
            .actions(contact_actions())
            .template(DETAIL_TEMPLATE),
    )
}
