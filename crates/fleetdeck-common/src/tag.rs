use serde::{Deserialize, Serialize};

/// Closed set of color tags produced by the classification rules.
///
/// The embedding UI decides what each tag looks like; the core only
/// guarantees that every classified value maps into this set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Success,
    Warning,
    Destructive,
    Info,
    Secondary,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Success => "success",
            Tag::Warning => "warning",
            Tag::Destructive => "destructive",
            Tag::Info => "info",
            Tag::Secondary => "secondary",
        }
    }
}

/// Opaque icon tags, resolved to actual glyphs by the embedding UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    CheckCircle,
    AlertTriangle,
    AlertCircle,
    Clock,
    Server,
    Activity,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::CheckCircle => "check_circle",
            Icon::AlertTriangle => "alert_triangle",
            Icon::AlertCircle => "alert_circle",
            Icon::Clock => "clock",
            Icon::Server => "server",
            Icon::Activity => "activity",
        }
    }
}
