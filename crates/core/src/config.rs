//! Grid options from the environment.

use std::env;

use tracing::debug;

use crate::error::GridError;
use crate::types::{Gravity, GridConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};

pub const ENV_WIDTH: &str = "MATCH_GRID_WIDTH";
pub const ENV_HEIGHT: &str = "MATCH_GRID_HEIGHT";
pub const ENV_GRAVITY: &str = "MATCH_GRID_GRAVITY";

/// Parse a gravity name, rejecting anything that is not a known direction
pub fn parse_gravity(name: &str) -> Result<Gravity, GridError> {
    Gravity::from_str(name).ok_or_else(|| GridError::UnknownGravity(name.to_string()))
}

/// Build a config from `MATCH_GRID_*` variables.
///
/// Unset or unparsable sizes fall back to the defaults. An unknown gravity
/// name is an error.
pub fn config_from_env() -> Result<GridConfig, GridError> {
    config_from_lookup(|key| env::var(key).ok())
}

fn config_from_lookup<F>(lookup: F) -> Result<GridConfig, GridError>
where
    F: Fn(&str) -> Option<String>,
{
    let width = lookup(ENV_WIDTH)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_WIDTH);
    let height = lookup(ENV_HEIGHT)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_HEIGHT);
    let gravity = match lookup(ENV_GRAVITY) {
        Some(name) => parse_gravity(&name)?,
        None => Gravity::None,
    };

    debug!(width, height, %gravity, "grid config from environment");
    Ok(GridConfig::new(width, height).gravity(gravity))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_variables_give_defaults() {
        let config = config_from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from_lookup(lookup_from(&[
            (ENV_WIDTH, "6"),
            (ENV_HEIGHT, " 4 "),
            (ENV_GRAVITY, "Down"),
        ]))
        .unwrap();
        assert_eq!(config, GridConfig::new(6, 4).gravity(Gravity::Down));
    }

    #[test]
    fn bad_size_falls_back_but_bad_gravity_fails() {
        let config = config_from_lookup(lookup_from(&[(ENV_WIDTH, "wide")])).unwrap();
        assert_eq!(config.width, DEFAULT_WIDTH);

        let err = config_from_lookup(lookup_from(&[(ENV_GRAVITY, "sideways")])).unwrap_err();
        assert_eq!(err, GridError::UnknownGravity("sideways".to_string()));
    }
}
