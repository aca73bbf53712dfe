//! Macros for ergonomic kind declarations.

/// Declare a fieldless enum and implement `StateKind` for it.
///
/// The enum derives everything `StateKind` requires, so the calling crate
/// needs `serde` with the `derive` feature.
///
/// # Example
///
/// ```
/// use tickstate::core::StateKind;
/// use tickstate::state_kind;
///
/// state_kind! {
///     pub enum Mode {
///         Menu,
///         Playing,
///         Paused,
///     }
/// }
///
/// assert_eq!(Mode::Playing.name(), "Playing");
/// ```
#[macro_export]
macro_rules! state_kind {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateKind for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::StateKind;

    state_kind! {
        enum TestKind {
            Idle,
            Playing,
            Paused,
        }
    }

    #[test]
    fn state_kind_macro_generates_trait() {
        assert_eq!(TestKind::Idle.name(), "Idle");
        assert_eq!(TestKind::Playing.name(), "Playing");
        assert_eq!(TestKind::Paused.name(), "Paused");
    }

    #[test]
    fn state_kind_supports_visibility_and_attributes() {
        state_kind! {
            /// Documented kind
            pub enum PublicKind {
                /// First
                A,
                B,
            }
        }

        let kind = PublicKind::A;
        let copied = kind;
        assert_eq!(kind, copied);
        assert_ne!(PublicKind::A, PublicKind::B);
    }

    #[test]
    fn generated_kind_serializes_by_name() {
        let json = serde_json::to_string(&TestKind::Paused).unwrap();
        assert_eq!(json, "\"Paused\"");
    }
}
