//! The `State` trait shared by every status-like enum in the crate.
//!
//! A state is a small, comparable, serializable value. The trait only
//! answers questions about the value itself; it never mutates anything.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A discrete status a game (or one of its parts) can be in.
///
/// # Example
///
/// ```rust
/// use memory_pairs::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Round {
///     Dealing,
///     Playing,
///     Over,
/// }
///
/// impl State for Round {
///     fn name(&self) -> &str {
///         match self {
///             Self::Dealing => "Dealing",
///             Self::Playing => "Playing",
///             Self::Over => "Over",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Over)
///     }
/// }
///
/// assert!(Round::Over.is_final());
/// assert!(!Round::Playing.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Human readable name, used in logs and error messages.
    fn name(&self) -> &str;

    /// Whether nothing is expected to follow this state.
    ///
    /// Defaults to `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state represents a failure outcome.
    ///
    /// Defaults to `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Light {
        Off,
        On,
        Broken,
    }

    impl State for Light {
        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::On => "On",
                Self::Broken => "Broken",
            }
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[test]
    fn defaults_are_not_final() {
        assert!(!Light::Off.is_final());
        assert!(!Light::Broken.is_final());
    }

    #[test]
    fn overridden_predicates_apply() {
        assert!(Light::Broken.is_error());
        assert!(!Light::On.is_error());
        assert_eq!(Light::On.name(), "On");
    }
}
