//! What the agent perceived in one cycle.

use crate::core::Event;

/// Read-only wrapper around the event observed in one cycle.
///
/// A perception without an event is a valid "nothing happened" cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Perception<E: Event> {
    event: Option<E>,
}

impl<E: Event> Perception<E> {
    pub fn new(event: Option<E>) -> Self {
        Self { event }
    }

    /// A cycle in which nothing was observed.
    pub fn nothing() -> Self {
        Self { event: None }
    }

    pub fn event(&self) -> Option<&E> {
        self.event.as_ref()
    }

    /// Check if the perceived event asks the run loop to stop.
    pub fn is_terminal(&self) -> bool {
        self.event.as_ref().is_some_and(|event| event.is_terminal())
    }
}

impl<E: Event> From<E> for Perception<E> {
    fn from(event: E) -> Self {
        Self::new(Some(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::event_enum! {
        enum Weather {
            Sun,
            Rain,
            Apocalypse,
        }
        terminal: [Apocalypse]
    }

    #[test]
    fn perception_wraps_event() {
        let perception = Perception::from(Weather::Rain);
        assert_eq!(perception.event(), Some(&Weather::Rain));
        assert!(!perception.is_terminal());
    }

    #[test]
    fn empty_perception_is_not_terminal() {
        let perception: Perception<Weather> = Perception::nothing();
        assert!(perception.event().is_none());
        assert!(!perception.is_terminal());
    }

    #[test]
    fn terminal_event_is_detected() {
        assert!(Perception::from(Weather::Apocalypse).is_terminal());
        assert!(!Perception::from(Weather::Sun).is_terminal());
    }
}
