//! Event and command alphabets for state machines.
//!
//! Both alphabets are closed: a machine only ever sees the variants of the
//! enums implementing these traits, so no runtime validation is needed.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the stimuli a state machine reacts to.
///
/// Events are used purely as lookup keys in a state's transition table.
/// All methods are pure.
///
/// # Example
///
/// ```rust
/// use trailcam::core::Event;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum DoorEvent {
///     Push,
///     Pull,
///     Shutdown,
/// }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Push => "Push",
///             Self::Pull => "Pull",
///             Self::Shutdown => "Shutdown",
///         }
///     }
///
///     fn is_terminal(&self) -> bool {
///         matches!(self, Self::Shutdown)
///     }
/// }
///
/// assert!(DoorEvent::Shutdown.is_terminal());
/// assert!(!DoorEvent::Push.is_terminal());
/// ```
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this event tells the surrounding run loop to stop.
    ///
    /// A state machine never reacts to this flag itself; it is read by
    /// whatever drives the machine.
    ///
    /// Default implementation returns `false`.
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Trait for the commands an action can carry out to the environment.
pub trait Command: Clone + PartialEq + Debug + Send + Sync {
    /// Get the command's name for display/logging.
    fn name(&self) -> &str;
}
