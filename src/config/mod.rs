//! Runtime configuration for state machines.
//!
//! Configuration is plain serde data so a host application can keep it next
//! to the rest of its settings. Every field has a default, so an empty JSON
//! object is a valid configuration.

use crate::core::StateKind;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Default cap on follow-up transitions requested from hooks per call.
pub const DEFAULT_MAX_CHAINED_TRANSITIONS: usize = 16;

/// Settings applied when a machine is constructed.
///
/// # Example
///
/// ```rust
/// use tickstate::config::MachineConfig;
/// use tickstate::state_kind;
///
/// state_kind! {
///     enum Mode {
///         Menu,
///         Playing,
///     }
/// }
///
/// let config: MachineConfig<Mode> =
///     MachineConfig::from_json(r#"{ "initial": "Menu" }"#).unwrap();
///
/// assert_eq!(config.initial, Some(Mode::Menu));
/// assert_eq!(config.max_chained_transitions, 16);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", default)]
pub struct MachineConfig<K: StateKind> {
    /// Kind to enter as soon as the machine is built
    pub initial: Option<K>,

    /// How many transitions requested from hooks are followed per
    /// `enter`/`update` call before further requests are dropped
    pub max_chained_transitions: usize,
}

impl<K: StateKind> Default for MachineConfig<K> {
    fn default() -> Self {
        Self {
            initial: None,
            max_chained_transitions: DEFAULT_MAX_CHAINED_TRANSITIONS,
        }
    }
}

impl<K: StateKind> MachineConfig<K> {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestKind {
        Menu,
        Playing,
    }

    impl StateKind for TestKind {
        fn name(&self) -> &str {
            match self {
                Self::Menu => "Menu",
                Self::Playing => "Playing",
            }
        }
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config: MachineConfig<TestKind> = MachineConfig::from_json("{}").unwrap();
        assert_eq!(config, MachineConfig::default());
        assert_eq!(config.initial, None);
        assert_eq!(
            config.max_chained_transitions,
            DEFAULT_MAX_CHAINED_TRANSITIONS
        );
    }

    #[test]
    fn fields_are_read_from_json() {
        let config: MachineConfig<TestKind> =
            MachineConfig::from_json(r#"{ "initial": "Playing", "max_chained_transitions": 2 }"#)
                .unwrap();

        assert_eq!(config.initial, Some(TestKind::Playing));
        assert_eq!(config.max_chained_transitions, 2);
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let result = MachineConfig::<TestKind>::from_json(r#"{ "initial": "Credits" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn config_survives_json() {
        let config = MachineConfig {
            initial: Some(TestKind::Menu),
            max_chained_transitions: 4,
        };

        let json = config.to_json().unwrap();
        let parsed: MachineConfig<TestKind> = MachineConfig::from_json(&json).unwrap();

        assert_eq!(parsed, config);
    }
}
