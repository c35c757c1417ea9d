//! The action record: one grid move paired with its cost.
//!
//! An [`Action`] is the edge label a grid search attaches to each successor.
//! It carries no position of its own; [`Action::apply_to`] resolves the
//! destination from a caller-supplied cell.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::config::ActionConfig;
use crate::cost::Cost;
use crate::direction::Direction;
use crate::error::ActionParseError;

/// Characters that split a token into direction and cost.
const SEPARATORS: [char; 2] = [':', ' '];

/// A direction paired with the cost of executing it.
///
/// Fields are public so a search engine can build a default action and
/// fill it in while expanding a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub direction: Direction,
    pub cost: Cost,
}

impl Action {
    /// Returns a wait action with unit cost.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with(direction: Direction, cost: Cost) -> Self {
        Self { direction, cost }
    }

    /// Builds an action whose cost comes from `config`.
    pub fn from_config(direction: Direction, config: &ActionConfig) -> Self {
        Self::with(direction, config.cost_for(direction))
    }

    /// Parses an action token, taking the cost of a bare `DIR` from `config`.
    pub fn parse_with_config(token: &str, config: &ActionConfig) -> Result<Self, ActionParseError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ActionParseError::Empty);
        }

        let (label, cost) = match token.split_once(SEPARATORS) {
            Some((label, cost)) => (label, Some(cost.trim())),
            None => (token, None),
        };
        if cost.is_some_and(|raw| raw.contains(SEPARATORS)) {
            return Err(ActionParseError::Malformed(token.to_owned()));
        }

        let direction = label.parse::<Direction>()?;
        let cost = match cost {
            Some(raw) => Cost::parse_decimal(raw)
                .ok_or_else(|| ActionParseError::InvalidCost(raw.to_owned()))?,
            None => config.cost_for(direction),
        };

        Ok(Self::with(direction, cost))
    }

    /// Cell reached by taking this action from `(x, y)`, or `None` if the
    /// move would leave the `i32` coordinate range.
    pub fn apply_to(&self, (x, y): (i32, i32)) -> Option<(i32, i32)> {
        let (dx, dy) = self.direction.delta();
        Some((x.checked_add(dx)?, y.checked_add(dy)?))
    }

    /// Renders `"<DIRNAME> <cost>"` and prints it as a line on stdout.
    pub fn describe(&self) -> String {
        self.describe_to(&mut io::stdout().lock())
    }

    /// Renders `"<DIRNAME> <cost>"` and writes it as a line to `out`.
    ///
    /// The rendered line is returned even if the write fails; the failure is
    /// logged rather than surfaced.
    pub fn describe_to<W: Write>(&self, out: &mut W) -> String {
        let line = self.to_string();
        tracing::trace!(code = self.direction.code(), %line, "describing action");
        if let Err(err) = writeln!(out, "{line}") {
            tracing::warn!(%line, error = %err, "failed to write action description");
        }
        line
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.cost)
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parses `DIR`, `DIR:COST` or `DIR COST`. A bare direction keeps the
    /// default unit cost.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_config(s, &ActionConfig::default())
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Self::with(direction, Cost::default())
    }
}
