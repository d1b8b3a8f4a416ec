//! Listener registrations and listener identity.
//!
//! A [`Registration`] pairs a listener with its delivery mode (once or
//! persistent) inside one event type's dispatch list. Listeners are stored as
//! [`ListenerRef`]s; the address of that shared allocation is the listener's
//! identity for targeted unsubscription. Cloning a [`ListenerRef`] preserves
//! identity, wrapping the same closure in a fresh `Rc::new` does not.

use std::rc::Rc;

use crate::emitter::Emitter;

/// Token identifying a single registration within one emitter.
///
/// Returned by [`Emitter::attach`] / [`Emitter::attach_once`] and consumed by
/// [`Emitter::detach`]. Tokens are never reused by the issuing emitter.
pub type ListenerId = u64;

/// Callback signature for listeners.
///
/// The first argument is the emitter the event was published on (the
/// invocation receiver), the second is the event payload.
pub type Listener<T> = dyn Fn(&Emitter<T>, &T);

/// Shared handle to a listener.
///
/// Keep a clone of the handle you subscribed with to unsubscribe the same
/// listener later by identity.
pub type ListenerRef<T> = Rc<Listener<T>>;

/// One entry in an event type's dispatch list.
pub(crate) struct Registration<T> {
    /// Registration token, unique per emitter.
    pub(crate) id: ListenerId,
    /// The listener to invoke.
    pub(crate) listener: ListenerRef<T>,
    /// Remove this registration right after its first invocation.
    pub(crate) once: bool,
}

/// Listener identity: address of the shared allocation, vtable ignored.
pub(crate) fn same_listener<T>(a: &ListenerRef<T>, b: &ListenerRef<T>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
