//! Grid move actions and their costs.
//!
//! `grid-action` defines the edge label of a 4-connected grid search: a
//! [`Direction`] (four cardinal moves plus wait) paired with a [`Cost`].
//! Search engines construct [`Action`] values while expanding nodes and
//! render them with [`Action::describe`] for traces and debugging output.
pub mod action;
pub mod config;
pub mod cost;
pub mod direction;
pub mod error;

pub use action::Action;
pub use config::ActionConfig;
pub use cost::Cost;
pub use direction::Direction;
pub use error::{ActionDomainError, ActionParseError, ConfigError, DirectionError};
