//! Error types reported by emitter operations.
//!
//! [`EmitterError`] classifies the non-fatal faults that targeted removal can
//! hit. The chaining methods ([`Emitter::unsubscribe`](crate::Emitter::unsubscribe),
//! [`Emitter::detach`](crate::Emitter::detach)) log these at `warn` level and
//! return the emitter unchanged; the `try_` variants surface them as values.
//!
//! Listener panics are deliberately *not* represented here: the emitter does
//! not isolate listeners, so a panic inside a listener unwinds through
//! [`Emitter::emit`](crate::Emitter::emit) to the caller as-is.

use thiserror::Error;

use crate::emitter::ListenerId;

/// # Non-fatal faults raised by targeted removal.
///
/// Every variant means "the call changed nothing"; none of them aborts the
/// chaining API.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitterError {
    /// Targeted removal named an event type that has never been subscribed to.
    ///
    /// Bulk removal and [`emit`](crate::Emitter::emit) treat an unknown type
    /// as a silent no-op; targeted removal reports it, since the caller
    /// claimed to hold a registration that cannot exist.
    #[error("event type {event_type:?} has no registrations")]
    UnknownType {
        /// The event type that was named.
        event_type: String,
    },

    /// Targeted unsubscribe matched no registration for the given listener.
    ///
    /// The listener reference either was never subscribed under this type or
    /// was already removed.
    #[error("listener is not registered for event type {event_type:?}")]
    UnregisteredListener {
        /// The event type that was searched.
        event_type: String,
    },

    /// Detach named a registration token not present under the event type.
    #[error("no registration {id} for event type {event_type:?}")]
    UnknownRegistration {
        /// The event type that was searched.
        event_type: String,
        /// The token that was not found.
        id: ListenerId,
    },
}

impl EmitterError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use micro_emitter::EmitterError;
    ///
    /// let err = EmitterError::UnknownType { event_type: "tick".into() };
    /// assert_eq!(err.as_label(), "unknown_event_type");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitterError::UnknownType { .. } => "unknown_event_type",
            EmitterError::UnregisteredListener { .. } => "unregistered_listener",
            EmitterError::UnknownRegistration { .. } => "unknown_registration",
        }
    }

    /// The event type the failing call named.
    pub fn event_type(&self) -> &str {
        match self {
            EmitterError::UnknownType { event_type }
            | EmitterError::UnregisteredListener { event_type }
            | EmitterError::UnknownRegistration { event_type, .. } => event_type,
        }
    }
}
