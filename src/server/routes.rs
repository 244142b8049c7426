//! Named routes and reverse URL lookup
//!
//! Handlers are registered under the paths in this table, and actions resolve
//! their URLs from the same table, so the two can never disagree.

use std::collections::HashMap;

use crate::views::{UrlResolver, ViewError};

pub const CONTACT_TABLE_VIEW: &str = "contact_table_view";
pub const CONTACT_DETAIL_VIEW: &str = "contact_detail_view";
pub const CONTACT_EDIT_VIEW: &str = "contact_edit_view";

/// Placeholder segment substituted by [`RouteTable::url_for`]
const PK_SEGMENT: &str = ":pk";

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<&'static str, &'static str>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The contact list routes
    pub fn contacts() -> Self {
        let mut table = Self::new();
        table.register(CONTACT_TABLE_VIEW, "/contacts");
        table.register(CONTACT_DETAIL_VIEW, "/contacts/:pk");
        table.register(CONTACT_EDIT_VIEW, "/contacts/:pk/edit");
        table
    }

    pub fn register(&mut self, name: &'static str, path: &'static str) {
        self.routes.insert(name, path);
    }

    /// Registered path pattern for `name`
    pub fn path(&self, name: &str) -> Option<&'static str> {
        self.routes.get(name).copied()
    }
}

impl UrlResolver for RouteTable {
    fn url_for(&self, target: &str, pk: &str) -> Result<String, ViewError> {
        let unresolved = || ViewError::RouteResolution {
            target: target.to_string(),
        };

        let pattern = self.path(target).ok_or_else(unresolved)?;
        if !pattern.split('/').any(|segment| segment == PK_SEGMENT) {
            return Err(unresolved());
        }

        let encoded = urlencoding::encode(pk);
        Ok(pattern
            .split('/')
            .map(|segment| {
                if segment == PK_SEGMENT {
                    &*encoded
                } else {
                    segment
                }
            })
            .collect::<Vec<_>>()
            .join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_url() {
        let routes = RouteTable::contacts();
        assert_eq!(
            routes.url_for(CONTACT_DETAIL_VIEW, "2").unwrap(),
            "/contacts/2"
        );
        assert_eq!(
            routes.url_for(CONTACT_EDIT_VIEW, "2").unwrap(),
            "/contacts/2/edit"
        );
    }

    #[test]
    fn test_pk_is_encoded() {
        let routes = RouteTable::contacts();
        assert_eq!(
            routes.url_for(CONTACT_DETAIL_VIEW, "a/b").unwrap(),
            "/contacts/a%2Fb"
        );
        assert_eq!(
            routes.url_for(CONTACT_EDIT_VIEW, "a b/é").unwrap(),
            "/contacts/a%20b%2F%C3%A9/edit"
        );
    }

    #[test]
    fn test_unregistered_route() {
        let routes = RouteTable::contacts();
        let err = routes.url_for("contact_delete_view", "2").unwrap_err();
        assert!(matches!(err, ViewError::RouteResolution { ref target } if target == "contact_delete_view"));
    }

    #[test]
    fn test_route_without_pk_segment() {
        let routes = RouteTable::contacts();
        assert!(routes.url_for(CONTACT_TABLE_VIEW, "2").is_err());
    }

    #[test]
    fn test_path_lookup() {
        let routes = RouteTable::contacts();
        assert_eq!(routes.path(CONTACT_TABLE_VIEW), Some("/contacts"));
        assert_eq!(routes.path("nope"), None);
    }
}
