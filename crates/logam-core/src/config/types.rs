//! Deployment environments and output formats named in configuration.

use crate::encoder::FieldLayout;

/// Development environment.
pub const ENV_DEVELOPMENT: &str = "development";
/// Live production environment.
pub const ENV_PRODUCTION: &str = "production";
/// QA or staging environment.
pub const ENV_STAGING: &str = "staging";
/// A developer's own workstation.
pub const ENV_WORKSTATION: &str = "workstation";

/// Format name that selects the human-readable console encoder.
pub const FORMAT_CONSOLE: &str = "console";

/// Deployment environment. The set is open: anything unrecognized is kept
/// as [`Environment::Other`] and treated like production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Staging,
    Workstation,
    Other(String),
}

impl Environment {
    /// Parse an environment name. Matching is exact, like the constants.
    pub fn parse(s: &str) -> Self {
        match s {
            ENV_DEVELOPMENT => Self::Development,
            ENV_PRODUCTION => Self::Production,
            ENV_STAGING => Self::Staging,
            ENV_WORKSTATION => Self::Workstation,
            other => Self::Other(other.to_string()),
        }
    }

    /// Encoder field-layout preset for this environment.
    pub fn field_layout(&self) -> FieldLayout {
        match self {
            Self::Development | Self::Workstation => FieldLayout::Development,
            _ => FieldLayout::Production,
        }
    }
}
