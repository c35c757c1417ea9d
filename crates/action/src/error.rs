//! Common error infrastructure for grid-action.
//!
//! Describing an action never fails. Errors only arise at the edges where
//! foreign data is turned into actions: raw direction codes, text tokens and
//! environment configuration. Each edge has its own `thiserror` enum, and all
//! of them carry a stable code through [`ActionDomainError`].

/// Common trait for all grid-action errors.
///
/// Use `#[derive(thiserror::Error)]` for the `Display`/`Error` impl and give
/// every variant its own code.
pub trait ActionDomainError: std::fmt::Display + std::fmt::Debug {
    /// Returns a static identifier for this error variant, suitable for
    /// log fields and test assertions.
    fn error_code(&self) -> &'static str;
}

// ============================================================================
// Direction Errors
// ============================================================================

/// Errors raised when converting foreign data into a [`crate::Direction`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionError {
    /// Code outside the `0..=4` range.
    #[error("invalid direction code {0}")]
    InvalidCode(u8),

    #[error("unknown direction label `{0}`")]
    UnknownLabel(String),
}

impl ActionDomainError for DirectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCode(_) => "DIRECTION_INVALID_CODE",
            Self::UnknownLabel(_) => "DIRECTION_UNKNOWN_LABEL",
        }
    }
}

// ============================================================================
// Action Parse Errors
// ============================================================================

/// Errors raised when parsing an action token such as `UP:3`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionParseError {
    #[error("empty action token")]
    Empty,

    #[error(transparent)]
    Direction(#[from] DirectionError),

    /// Cost is not a plain decimal that fits in `u32`.
    #[error("invalid cost `{0}`")]
    InvalidCost(String),

    /// More than one separator, as in `UP:3:4`.
    #[error("malformed action token `{0}`")]
    Malformed(String),
}

impl ActionDomainError for ActionParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "ACTION_EMPTY_TOKEN",
            Self::Direction(inner) => inner.error_code(),
            Self::InvalidCost(_) => "ACTION_INVALID_COST",
            Self::Malformed(_) => "ACTION_MALFORMED_TOKEN",
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while loading [`crate::ActionConfig`] from the environment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {key} has invalid value `{value}`")]
    InvalidValue { key: &'static str, value: String },
}

impl ActionDomainError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
        }
    }
}
