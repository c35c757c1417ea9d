use std::env;

use crate::cost::Cost;
use crate::direction::Direction;
use crate::error::ConfigError;

/// Tunable costs applied when an action is built without an explicit cost.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionConfig {
    /// Cost assigned to every direction unless overridden.
    pub default_cost: Cost,
    /// Overrides `default_cost` for [`Direction::Wait`] only.
    pub wait_cost: Option<Cost>,
}

impl ActionConfig {
    pub const DEFAULT_COST: Cost = Cost::UNIT;

    pub const ENV_DEFAULT_COST: &'static str = "GRID_ACTION_DEFAULT_COST";
    pub const ENV_WAIT_COST: &'static str = "GRID_ACTION_WAIT_COST";

    pub const fn new() -> Self {
        Self {
            default_cost: Self::DEFAULT_COST,
            wait_cost: None,
        }
    }

    pub const fn with_default_cost(mut self, cost: Cost) -> Self {
        self.default_cost = cost;
        self
    }

    pub const fn with_wait_cost(mut self, cost: Cost) -> Self {
        self.wait_cost = Some(cost);
        self
    }

    /// Effective cost of `direction` under this configuration.
    pub fn cost_for(&self, direction: Direction) -> Cost {
        match (direction, self.wait_cost) {
            (Direction::Wait, Some(cost)) => cost,
            _ => self.default_cost,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GRID_ACTION_DEFAULT_COST` - Cost of every action (default: 1)
    /// - `GRID_ACTION_WAIT_COST` - Cost of wait actions (default: same as above)
    ///
    /// Unset variables fall back to defaults; malformed ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(cost) = read_cost(&lookup, Self::ENV_DEFAULT_COST)? {
            config.default_cost = cost;
        }
        config.wait_cost = read_cost(&lookup, Self::ENV_WAIT_COST)?;

        tracing::debug!(
            default_cost = %config.default_cost,
            wait_cost = ?config.wait_cost.map(Cost::get),
            "loaded action config"
        );
        Ok(config)
    }
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_cost<F>(lookup: &F, key: &'static str) -> Result<Option<Cost>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match Cost::parse_decimal(raw.trim()) {
        Some(cost) => Ok(Some(cost)),
        None => Err(ConfigError::InvalidValue { key, value: raw }),
    }
}
