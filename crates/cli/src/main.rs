//! Terminal entry point: describes the actions named on the command line.
//!
//! ```text
//! grid-action up:3 left wait:0
//! ```
//!
//! Each token is `DIR` or `DIR:COST`; a bare `DIR` takes its cost from
//! `GRID_ACTION_DEFAULT_COST` / `GRID_ACTION_WAIT_COST`. With no tokens the
//! default action is described.
use anyhow::{Context, Result};
use grid_action::{Action, ActionConfig, ActionDomainError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // stdout carries describe lines only
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(std::io::stderr)
        .init();

    let config = ActionConfig::from_env()
        .inspect_err(|err| tracing::error!(code = err.error_code(), "{err}"))
        .context("failed to load action config")?;
    let tokens: Vec<String> = std::env::args().skip(1).collect();

    for action in parse_actions(&tokens, &config)? {
        action.describe();
    }

    Ok(())
}

/// `RUST_LOG` directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn parse_actions(tokens: &[String], config: &ActionConfig) -> Result<Vec<Action>> {
    if tokens.is_empty() {
        tracing::info!("no actions given, describing the default action");
        return Ok(vec![Action::default()]);
    }

    tokens
        .iter()
        .map(|token| {
            Action::parse_with_config(token, config)
                .inspect_err(|err| tracing::warn!(code = err.error_code(), %token, "{err}"))
                .with_context(|| format!("invalid action token `{token}`"))
        })
        .collect()
}
