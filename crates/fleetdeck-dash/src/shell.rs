//! Navigation state: which page is visible. The single piece of
//! mutable state in the system, owned by the embedding shell.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    Overview,
    Security,
    ArchitectureManagement,
}

impl ViewId {
    pub const ALL: [ViewId; 3] = [
        ViewId::Overview,
        ViewId::Security,
        ViewId::ArchitectureManagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Overview => "overview",
            ViewId::Security => "security",
            ViewId::ArchitectureManagement => "architecture-management",
        }
    }

    /// Navigation label shown for this entry.
    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Overview => "Dashboard",
            ViewId::Security => "Security",
            ViewId::ArchitectureManagement => "Architecture",
        }
    }

    /// Total parse: unknown ids yield `None` and the caller keeps its
    /// current selection.
    pub fn parse(s: &str) -> Option<ViewId> {
        match s {
            "overview" => Some(ViewId::Overview),
            "security" => Some(ViewId::Security),
            "architecture-management" => Some(ViewId::ArchitectureManagement),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    selected: ViewId,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            selected: ViewId::Overview,
        }
    }

    pub fn selected(&self) -> ViewId {
        self.selected
    }

    pub fn select(&mut self, view: ViewId) {
        self.selected = view;
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
