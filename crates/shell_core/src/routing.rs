//! Route table: the declarative path → screen mapping and its validation.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use shared::{domain::ScreenId, error::ShellError};
use tracing::debug;

/// Longest redirect chain the navigator follows before giving up.
pub const MAX_REDIRECT_DEPTH: usize = 5;

pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteTarget {
    Render { screen: ScreenId },
    Redirect { to: String },
}

/// Header link metadata for a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label_key: &'static str,
    pub icon: NavIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Brain,
    Database,
    Boxes,
    Chart,
    Report,
    Home,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: String,
    pub target: RouteTarget,
    pub enabled: bool,
    pub nav: Option<NavItem>,
}

impl RouteEntry {
    pub fn render(path: impl Into<String>, screen: ScreenId) -> Self {
        Self {
            path: path.into(),
            target: RouteTarget::Render { screen },
            enabled: true,
            nav: None,
        }
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: RouteTarget::Redirect { to: to.into() },
            enabled: true,
            nav: None,
        }
    }

    pub fn with_nav(mut self, label_key: &'static str, icon: NavIcon) -> Self {
        self.nav = Some(NavItem { label_key, icon });
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn screen(&self) -> Option<ScreenId> {
        match self.target {
            RouteTarget::Render { screen } => Some(screen),
            RouteTarget::Redirect { .. } => None,
        }
    }
}

/// Outcome of matching one path against the live table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedView {
    Render { screen: ScreenId },
    /// Navigate to `to` replacing the current history entry.
    Redirect { to: String },
    NotFound { path: String },
}

impl ResolvedView {
    pub fn screen(&self) -> Option<ScreenId> {
        match self {
            Self::Render { screen } => Some(*screen),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// The routes declared by the dashboard.
///
/// Disabled entries are kept so a deployment can switch them on through
/// configuration; `/` → Dashboard conflicts with the `/` redirect and needs
/// that redirect disabled first.
pub fn default_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::render(ROOT_PATH, ScreenId::Dashboard)
            .with_nav("dashboard", NavIcon::Home)
            .disabled(),
        RouteEntry::redirect(ROOT_PATH, "/query"),
        RouteEntry::render("/query", ScreenId::QueryForm).with_nav("intelligentQA", NavIcon::Brain),
        RouteEntry::render("/inventory", ScreenId::InventoryCheck)
            .with_nav("inventoryCheck", NavIcon::Boxes)
            .disabled(),
        RouteEntry::render("/charts", ScreenId::ChartDisplay)
            .with_nav("chartDisplay", NavIcon::Chart)
            .disabled(),
        RouteEntry::render("/reports", ScreenId::ReportGenerator)
            .with_nav("reportGenerator", NavIcon::Report)
            .disabled(),
        RouteEntry::render("/datasources", ScreenId::DataSourceManager)
            .with_nav("dataSourceManagement", NavIcon::Database),
    ]
}

/// Validated, immutable route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    declared: Vec<RouteEntry>,
    live: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new(declared: Vec<RouteEntry>) -> Result<Self, ShellError> {
        let mut live = HashMap::new();
        for (idx, entry) in declared.iter().enumerate() {
            validate_path(&entry.path)?;
            if let RouteTarget::Redirect { to } = &entry.target {
                validate_path(to)?;
            }
            if !entry.enabled {
                continue;
            }
            if live.insert(entry.path.clone(), idx).is_some() {
                return Err(ShellError::DuplicateRoute {
                    path: entry.path.clone(),
                });
            }
        }

        let table = Self { declared, live };
        for entry in table.live_entries() {
            if let RouteTarget::Redirect { .. } = entry.target {
                table.final_screen(&entry.path)?;
            }
        }
        match table.final_screen(ROOT_PATH) {
            Ok(_) => {}
            Err(ShellError::RouteNotFound { .. }) => return Err(ShellError::UnreachableRoot),
            Err(err) => return Err(err),
        }

        debug!(
            declared = table.declared.len(),
            live = table.live.len(),
            "route table built"
        );
        Ok(table)
    }

    pub fn with_defaults() -> Result<Self, ShellError> {
        Self::new(default_routes())
    }

    /// Exact match against live entries.
    pub fn resolve(&self, path: &str) -> ResolvedView {
        match self.lookup(path).map(|entry| &entry.target) {
            Some(RouteTarget::Render { screen }) => ResolvedView::Render { screen: *screen },
            Some(RouteTarget::Redirect { to }) => ResolvedView::Redirect { to: to.clone() },
            None => ResolvedView::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Screen that `path` ends up rendering once redirects are followed.
    /// A miss is reported against `path` itself, never a redirect hop.
    pub fn resolve_screen(&self, path: &str) -> Result<ScreenId, ShellError> {
        self.final_screen(path).map_err(|err| match err {
            ShellError::RouteNotFound { .. } => ShellError::RouteNotFound {
                path: path.to_string(),
            },
            other => other,
        })
    }

    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.live.get(path).map(|idx| &self.declared[*idx])
    }

    /// Every declared entry, enabled or not, in declaration order.
    pub fn declared(&self) -> &[RouteEntry] {
        &self.declared
    }

    /// Enabled entries in declaration order.
    pub fn live_entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.declared.iter().filter(|entry| entry.enabled)
    }

    fn final_screen(&self, path: &str) -> Result<ScreenId, ShellError> {
        let mut seen = HashSet::new();
        let mut current = path;
        for _ in 0..=MAX_REDIRECT_DEPTH {
            if !seen.insert(current) {
                return Err(ShellError::RedirectLoop {
                    path: path.to_string(),
                });
            }
            match self.lookup(current).map(|entry| &entry.target) {
                Some(RouteTarget::Render { screen }) => return Ok(*screen),
                Some(RouteTarget::Redirect { to }) => {
                    if self.lookup(to).is_none() {
                        return Err(ShellError::DanglingRedirect {
                            from: current.to_string(),
                            to: to.clone(),
                        });
                    }
                    current = to;
                }
                None => {
                    return Err(ShellError::RouteNotFound {
                        path: current.to_string(),
                    })
                }
            }
        }
        Err(ShellError::RedirectLoop {
            path: path.to_string(),
        })
    }
}

fn validate_path(path: &str) -> Result<(), ShellError> {
    let invalid = |reason| ShellError::InvalidRoutePath {
        path: path.to_string(),
        reason,
    };
    if !path.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if path.contains(['?', '#']) {
        return Err(invalid("must not carry a query or fragment"));
    }
    if path
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.contains('*'))
    {
        return Err(invalid("parameters and wildcards are not supported"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/routing_tests.rs"]
mod tests;
