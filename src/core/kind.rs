//! Kind tags that identify state behaviours.
//!
//! A kind is the stable identity of one concrete state behaviour. The machine
//! looks states up by kind when entering them, so every kind appears at most
//! once in a machine's roster.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state kind tags.
///
/// Kinds are small copyable values, usually fieldless enums, that name each
/// mode a machine can be in. They carry no behaviour of their own.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: kinds are registry keys
/// - `Debug`: kinds show up in diagnostics
/// - `Serialize` + `Deserialize`: kinds can be named in configuration
///
/// # Example
///
/// ```rust
/// use tickstate::core::StateKind;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Mode {
///     Menu,
///     Playing,
///     Paused,
/// }
///
/// impl StateKind for Mode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Menu => "Menu",
///             Self::Playing => "Playing",
///             Self::Paused => "Paused",
///         }
///     }
/// }
///
/// assert_eq!(Mode::Paused.name(), "Paused");
/// ```
pub trait StateKind:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the kind's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestKind {
        Menu,
        Playing,
        Paused,
    }

    impl StateKind for TestKind {
        fn name(&self) -> &str {
            match self {
                Self::Menu => "Menu",
                Self::Playing => "Playing",
                Self::Paused => "Paused",
            }
        }
    }

    #[test]
    fn kind_name_returns_correct_value() {
        assert_eq!(TestKind::Menu.name(), "Menu");
        assert_eq!(TestKind::Playing.name(), "Playing");
        assert_eq!(TestKind::Paused.name(), "Paused");
    }

    #[test]
    fn kinds_are_usable_as_keys() {
        let kinds: HashSet<TestKind> = [TestKind::Menu, TestKind::Menu, TestKind::Paused]
            .into_iter()
            .collect();

        assert_eq!(kinds.len(), 2);
        assert!(kinds.contains(&TestKind::Paused));
        assert!(!kinds.contains(&TestKind::Playing));
    }

    #[test]
    fn kind_deserializes_from_its_name() {
        let kind: TestKind = serde_json::from_str("\"Playing\"").unwrap();
        assert_eq!(kind, TestKind::Playing);
    }
}
