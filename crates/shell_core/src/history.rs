//! Browser-style history stack and the navigator that drives the route table.

use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::routing::{ResolvedView, RouteTable, MAX_REDIRECT_DEPTH};

const LOCATION_BASE: &str = "http://shell.local/";

/// Session history: a list of locations and a cursor into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// Appends a location, dropping anything ahead of the cursor.
    pub fn push(&mut self, location: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location.into());
        self.cursor = self.entries.len() - 1;
    }

    /// Overwrites the current entry in place.
    pub fn replace(&mut self, location: impl Into<String>) {
        self.entries[self.cursor] = location.into();
    }

    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn contains(&self, location: &str) -> bool {
        self.entries.iter().any(|entry| entry == location)
    }
}

/// The settled result of a navigation: what is mounted and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub location: String,
    pub path: String,
    /// Either `Render` or `NotFound`; redirects are never mounted.
    pub view: ResolvedView,
    pub redirected_from: Option<String>,
}

/// Parses an in-app location. Only absolute paths are accepted; empty input
/// means the root. Scheme-relative (`//host`), absolute URLs, relative paths
/// and backslashes yield `None` so they can never alias a mounted route.
fn parse_location(location: &str) -> Option<Url> {
    let base = Url::parse(LOCATION_BASE).ok()?;
    let location = location.trim();
    if location.is_empty() {
        return Some(base);
    }
    if !location.starts_with('/') || location.starts_with("//") || location.contains('\\') {
        return None;
    }
    let url = base.join(location).ok()?;
    let same_origin = url.scheme() == base.scheme()
        && url.host_str() == base.host_str()
        && url.port() == base.port();
    same_origin.then_some(url)
}

/// Canonical form of a location: path plus optional query and fragment.
/// Dot segments are collapsed the way a browser would.
pub fn normalize_location(location: &str) -> Option<String> {
    let url = parse_location(location)?;
    let mut normalized = url.path().to_string();
    if let Some(query) = url.query() {
        normalized.push('?');
        normalized.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        normalized.push('#');
        normalized.push_str(fragment);
    }
    Some(normalized)
}

/// Path component of a location; this is what the route table matches.
pub fn location_path(location: &str) -> Option<String> {
    parse_location(location).map(|url| url.path().to_string())
}

fn canonical_or_raw(location: &str) -> String {
    normalize_location(location).unwrap_or_else(|| location.trim().to_string())
}

pub struct Navigator {
    table: RouteTable,
    history: History,
    current: Navigation,
}

impl Navigator {
    /// Opens the session at `initial_location` and settles it, following any
    /// redirect with a history replace.
    pub fn start(table: RouteTable, initial_location: &str) -> Self {
        let location = canonical_or_raw(initial_location);
        let mut navigator = Self {
            table,
            history: History::new(location.clone()),
            current: Navigation {
                path: location.clone(),
                view: ResolvedView::NotFound {
                    path: location.clone(),
                },
                location,
                redirected_from: None,
            },
        };
        navigator.settle();
        navigator
    }

    /// Link-click navigation. Navigating to the location already shown
    /// replaces the entry instead of growing history.
    pub fn navigate(&mut self, location: &str) -> &Navigation {
        let location = canonical_or_raw(location);
        if location == self.history.current() {
            debug!(%location, "navigate to current location (replace)");
            self.history.replace(location);
        } else {
            debug!(from = %self.history.current(), to = %location, "navigate (push)");
            self.history.push(location);
        }
        self.settle()
    }

    pub fn back(&mut self) -> Option<&Navigation> {
        self.history.back()?;
        Some(self.settle())
    }

    pub fn forward(&mut self) -> Option<&Navigation> {
        self.history.forward()?;
        Some(self.settle())
    }

    pub fn current(&self) -> &Navigation {
        &self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Whether a header link to `path` points at the mounted route.
    pub fn is_active(&self, path: &str) -> bool {
        !self.current.view.is_not_found() && self.current.path == path
    }

    fn settle(&mut self) -> &Navigation {
        let mut location = self.history.current().to_string();
        let mut redirected_from: Option<String> = None;

        for _ in 0..=MAX_REDIRECT_DEPTH {
            let Some(path) = location_path(&location) else {
                debug!(%location, "location is not an in-app path");
                self.current = Navigation {
                    path: location.clone(),
                    view: ResolvedView::NotFound {
                        path: location.clone(),
                    },
                    location,
                    redirected_from,
                };
                return &self.current;
            };
            match self.table.resolve(&path) {
                ResolvedView::Redirect { to } => {
                    debug!(from = %path, %to, "redirect (replace)");
                    redirected_from.get_or_insert(path);
                    let to = canonical_or_raw(&to);
                    self.history.replace(to.clone());
                    location = to;
                }
                view => {
                    if let ResolvedView::NotFound { path } = &view {
                        debug!(%path, "no live route");
                    }
                    self.current = Navigation {
                        location,
                        path,
                        view,
                        redirected_from,
                    };
                    return &self.current;
                }
            }
        }

        // Validated tables never get here.
        warn!(%location, "redirect chain exceeded maximum depth");
        let path = location_path(&location).unwrap_or_else(|| location.clone());
        self.current = Navigation {
            location,
            view: ResolvedView::NotFound { path: path.clone() },
            path,
            redirected_from,
        };
        &self.current
    }
}

#[cfg(test)]
#[path = "tests/history_tests.rs"]
mod tests;
