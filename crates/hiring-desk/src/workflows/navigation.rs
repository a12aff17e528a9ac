//! Screen selection for the hiring desk shell.
//!
//! The selected screen is an explicit value owned by whoever drives the
//! shell; interested components register listeners instead of reading a
//! process-wide global.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Dashboard,
    Jobs,
    PostJob,
}

impl Screen {
    pub const fn ordered() -> [Self; 3] {
        [Self::Dashboard, Self::Jobs, Self::PostJob]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Jobs => "Jobs",
            Self::PostJob => "Post a Job",
        }
    }
}

/// Entries shown in the sidebar. Only some of them have a screen of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavItem {
    Home,
    Jobs,
    Team,
    Reports,
    Messages,
}

impl NavItem {
    pub const fn ordered() -> [Self; 5] {
        [Self::Home, Self::Jobs, Self::Team, Self::Reports, Self::Messages]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Jobs => "Jobs",
            Self::Team => "Team",
            Self::Reports => "Reports",
            Self::Messages => "Messages",
        }
    }

    /// Screen the item opens. Items without a screen fall back to the dashboard.
    pub const fn target(self) -> Screen {
        match self {
            Self::Jobs => Screen::Jobs,
            Self::Home | Self::Team | Self::Reports | Self::Messages => Screen::Dashboard,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub item: NavItem,
    pub label: &'static str,
    pub active: bool,
}

type Listener = Box<dyn FnMut(Screen, Screen) + Send>;

/// Holder for the currently selected screen.
pub struct ScreenSelector {
    current: Screen,
    listeners: Vec<Listener>,
}

impl ScreenSelector {
    pub fn new(initial: Screen) -> Self {
        Self {
            current: initial,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Register a callback invoked with `(previous, next)` on every change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(Screen, Screen) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Switch screens, returning whether the selection changed.
    pub fn select(&mut self, screen: Screen) -> bool {
        if screen == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, screen);
        for listener in &mut self.listeners {
            listener(previous, screen);
        }
        true
    }

    pub fn follow(&mut self, item: NavItem) -> bool {
        self.select(item.target())
    }

    /// Sidebar entries with the one matching the current screen highlighted.
    pub fn nav_entries(&self) -> Vec<NavEntry> {
        NavItem::ordered()
            .into_iter()
            .map(|item| NavEntry {
                item,
                label: item.label(),
                active: match item {
                    NavItem::Home => self.current == Screen::Dashboard,
                    NavItem::Jobs => self.current == Screen::Jobs,
                    _ => false,
                },
            })
            .collect()
    }
}

impl Default for ScreenSelector {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}

impl fmt::Debug for ScreenSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenSelector")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
