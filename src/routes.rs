//! Canonical route table and location matching.
//!
//! SYSTEM CONTEXT
//! ==============
//! `leptos_router` owns browser history and link interception; this module
//! decides which page a location renders and which path a symbolic route
//! name navigates to. The root component feeds it the current location and
//! renders the resolved entry's page.
//!
//! Matching ignores the query string and fragment, treats one trailing slash
//! as optional, and compares ASCII case-insensitively. Anything unmatched
//! resolves to the not-found entry.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

use crate::pages::Page;

/// Symbolic route names used for navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Menu,
    Login,
    Register,
    UserOrders,
    AdminOrders,
    NotFound,
}

impl RouteName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Menu => "Menu",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::UserOrders => "UserOrders",
            Self::AdminOrders => "AdminOrders",
            Self::NotFound => "NotFound",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the current location is encoded in the browser URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// HTML5 history: `/orders`.
    #[default]
    Web,
    /// Fragment routing: `/#/orders`.
    Hash,
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: RouteName,
    pub page: Page,
    /// Document title shown while the route is active.
    pub title: &'static str,
}

/// Routes the application serves, in match order.
pub const CANONICAL_ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/", name: RouteName::Home, page: Page::Home, title: "Home" },
    RouteEntry { path: "/menu", name: RouteName::Menu, page: Page::Menu, title: "Menu" },
    RouteEntry { path: "/login", name: RouteName::Login, page: Page::Login, title: "Sign in" },
    RouteEntry { path: "/register", name: RouteName::Register, page: Page::Register, title: "Register" },
    RouteEntry { path: "/orders", name: RouteName::UserOrders, page: Page::UserOrders, title: "My orders" },
    RouteEntry {
        path: "/admin/orders",
        name: RouteName::AdminOrders,
        page: Page::AdminOrders,
        title: "All orders",
    },
];

/// Catch-all rendered for any location without a table entry.
pub const NOT_FOUND_ROUTE: RouteEntry =
    RouteEntry { path: "*", name: RouteName::NotFound, page: Page::NotFound, title: "Page not found" };

/// Error returned by [`RouteTable::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route path must start with '/': {0}")]
    RelativePath(&'static str),
    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),
    #[error("duplicate route name: {0}")]
    DuplicateName(RouteName),
}

/// Validated, immutable route table plus its history mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    not_found: RouteEntry,
    history: HistoryMode,
}

impl RouteTable {
    /// Build a table, rejecting relative paths and duplicate paths or names.
    pub fn new(entries: Vec<RouteEntry>, not_found: RouteEntry, history: HistoryMode) -> Result<Self, RouteTableError> {
        for (i, entry) in entries.iter().enumerate() {
            if !entry.path.starts_with('/') {
                return Err(RouteTableError::RelativePath(entry.path));
            }
            let path = normalize_path(entry.path);
            for earlier in &entries[..i] {
                if normalize_path(earlier.path) == path {
                    return Err(RouteTableError::DuplicatePath(entry.path));
                }
                if earlier.name == entry.name {
                    return Err(RouteTableError::DuplicateName(entry.name));
                }
            }
            if entry.name == not_found.name {
                return Err(RouteTableError::DuplicateName(entry.name));
            }
        }
        Ok(Self { entries, not_found, history })
    }

    /// The application's route table. Its invariants are covered by tests.
    pub fn canonical(history: HistoryMode) -> Self {
        Self { entries: CANONICAL_ROUTES.to_vec(), not_found: NOT_FOUND_ROUTE, history }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn history(&self) -> HistoryMode {
        self.history
    }

    /// First entry whose path matches `path`, if any.
    pub fn match_path(&self, path: &str) -> Option<&RouteEntry> {
        let wanted = normalize_path(path);
        self.entries.iter().find(|entry| normalize_path(entry.path) == wanted)
    }

    /// Entry for `path`, falling back to the not-found entry.
    pub fn resolve(&self, path: &str) -> &RouteEntry {
        if let Some(entry) = self.match_path(path) {
            return entry;
        }
        log::debug!("no route for {path:?}");
        &self.not_found
    }

    /// The part of the browser location that routing looks at: the pathname
    /// in web mode, the fragment in hash mode.
    ///
    /// `hash` may be given with or without its leading `#`. An empty
    /// fragment routes as `/`.
    pub fn routed_path<'a>(&self, pathname: &'a str, hash: &'a str) -> &'a str {
        match self.history {
            HistoryMode::Web => pathname,
            HistoryMode::Hash => {
                let path = hash.strip_prefix('#').unwrap_or(hash);
                if path.is_empty() { "/" } else { path }
            }
        }
    }

    /// Entry for the browser location, read according to the history mode.
    pub fn resolve_location(&self, pathname: &str, hash: &str) -> &RouteEntry {
        self.resolve(self.routed_path(pathname, hash))
    }

    /// Registered path for `name`. The not-found entry has none.
    pub fn path_for(&self, name: RouteName) -> Option<&'static str> {
        self.entries.iter().find(|entry| entry.name == name).map(|entry| entry.path)
    }

    /// Link target for `name` under the table's history mode.
    pub fn href_for(&self, name: RouteName) -> Option<String> {
        let path = self.path_for(name)?;
        Some(match self.history {
            HistoryMode::Web => path.to_owned(),
            HistoryMode::Hash => format!("#{path}"),
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::canonical(HistoryMode::default())
    }
}

/// Reduce a location to its comparable form: no query or fragment, no
/// trailing slash (except the root), lowercase, and `/`-prefixed.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim();
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    let mut normalized = String::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(&trimmed.to_ascii_lowercase());
    normalized
}
