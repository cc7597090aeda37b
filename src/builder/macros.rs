//! Macros for declaring closed event and command alphabets.

/// Generate an `Event` implementation for a simple enum.
///
/// The enum gets `Clone`, `Copy`, `Eq`, `Hash`, `Debug` and serde derives,
/// a `Display` impl printing the variant name, and an `ALL` constant listing
/// every variant in declaration order.
///
/// # Example
///
/// ```
/// use trailcam::core::Event;
/// use trailcam::event_enum;
///
/// event_enum! {
///     pub enum Sensor {
///         Motion,
///         Still,
///         PowerOff,
///     }
///     terminal: [PowerOff]
/// }
///
/// assert!(Sensor::PowerOff.is_terminal());
/// assert_eq!(Sensor::ALL.len(), 3);
/// assert_eq!(Sensor::Motion.to_string(), "Motion");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(terminal: [$($terminal:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_terminal(&self) -> bool {
                match self {
                    $($(Self::$terminal => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Event::name(self))
            }
        }
    };
}

/// Generate a `Command` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use trailcam::core::{Action, Command};
/// use trailcam::command_enum;
///
/// command_enum! {
///     pub enum Motor {
///         Forward,
///         Reverse,
///     }
/// }
///
/// let action = Action::new(Motor::Reverse);
/// assert_eq!(action.command().name(), "Reverse");
/// ```
#[macro_export]
macro_rules! command_enum {
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
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::core::Command for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Command::name(self))
            }
        }
    };
}
