//! Builder API for ergonomic state machine construction.
//!
//! This module provides the graph builder and the alphabet macros used to
//! declare events and commands with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;

use crate::core::{Action, Command, Event, StateId};

/// One row of a declarative transition table: `(from, event, to, action)`.
pub type Edge<E, C> = (StateId, E, StateId, Option<C>);

/// Register a whole transition table at once.
///
/// Rows are applied in order, so a later row for the same `(from, event)`
/// pair replaces an earlier one.
///
/// # Example
///
/// ```
/// use trailcam::builder::{edges, StateMachineBuilder};
/// use trailcam::{command_enum, event_enum};
///
/// event_enum! {
///     enum Tick { Even, Odd }
/// }
///
/// command_enum! {
///     enum Say { Tock }
/// }
///
/// let mut builder = StateMachineBuilder::new();
/// let left = builder.state("Left");
/// let right = builder.state("Right");
///
/// edges(&mut builder, [
///     (left, Tick::Odd, right, Some(Say::Tock)),
///     (right, Tick::Even, left, None),
/// ]).unwrap();
///
/// let mut machine = builder.initial(left).build().unwrap();
/// assert!(machine.step(&Tick::Odd).is_some());
/// assert_eq!(machine.current(), right);
/// ```
pub fn edges<E, C, I>(builder: &mut StateMachineBuilder<E, C>, table: I) -> Result<(), BuildError>
where
    E: Event,
    C: Command,
    I: IntoIterator<Item = Edge<E, C>>,
{
    for (from, event, to, command) in table {
        builder
            .state_mut(from)?
            .add_transition(event, to, command.map(Action::new));
    }
    Ok(())
}
