//! Navigation location as seen by guards.

use serde::{Deserialize, Serialize};

/// The page a guard bounced the visitor away from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReturnTo {
    pub pathname: String,
}

/// State carried along with a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NavState {
    pub from: Option<ReturnTo>,
}

impl NavState {
    pub fn from_path(pathname: impl Into<String>) -> Self {
        Self {
            from: Some(ReturnTo {
                pathname: pathname.into(),
            }),
        }
    }
}

/// A return path waiting for the next sign-in.
///
/// Each remembered path gets a ticket. A holder can only release the entry
/// it was handed, so a login page that goes away never drops a newer bounce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingReturn {
    entry: Option<(u64, ReturnTo)>,
    issued: u64,
}

impl PendingReturn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remember(&mut self, from: ReturnTo) -> u64 {
        self.issued += 1;
        self.entry = Some((self.issued, from));
        self.issued
    }

    pub fn current(&self) -> Option<&ReturnTo> {
        self.entry.as_ref().map(|(_, from)| from)
    }

    pub fn ticket(&self) -> Option<u64> {
        self.entry.as_ref().map(|(ticket, _)| *ticket)
    }

    /// Drop the entry if it is still the one `ticket` refers to.
    pub fn release(&mut self, ticket: u64) -> bool {
        if self.ticket() == Some(ticket) {
            self.entry = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}

/// A location produced by the navigation layer for one visit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    /// Raw query string including the leading `?`, or empty.
    pub search: String,
    pub state: Option<NavState>,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: String::new(),
            state: None,
        }
    }

    /// Split an href into path and query, dropping any fragment.
    pub fn parse(href: &str) -> Self {
        let href = href.split('#').next().unwrap_or_default();
        match href.split_once('?') {
            Some((path, query)) => Self {
                pathname: normalize_path(path),
                search: format!("?{}", query),
                state: None,
            },
            None => Self::new(normalize_path(href)),
        }
    }

    pub fn with_state(mut self, state: NavState) -> Self {
        self.state = Some(state);
        self
    }

    /// Path plus query.
    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }

    /// The guarded page to resume after signing in, if any.
    pub fn return_to(&self) -> Option<&str> {
        self.state
            .as_ref()
            .and_then(|s| s.from.as_ref())
            .map(|f| f.pathname.as_str())
    }
}

fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
