//! Macros for ergonomic state type definition.

/// Generate a state enum together with its [`State`](crate::core::State)
/// implementation.
///
/// The variant name, lowercased at the call site if desired, becomes the
/// state's display name.
///
/// # Example
///
/// ```
/// use turnstile::state_enum;
///
/// state_enum! {
///     pub enum OrderState {
///         Pending,
///         Started,
///         Finished,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
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
            Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
