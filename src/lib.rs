//! # micro-emitter
//!
//! **micro-emitter** is a minimal synchronous publish/subscribe emitter for Rust.
//!
//! It provides a single reusable component, [`Emitter`], that lets callers
//! register callbacks against named event types, invoke every callback for a
//! type with a payload, and deregister callbacks individually or en masse.
//! The crate is designed as a building block to embed inside larger objects
//! that need to notify observers, not as a standalone application.
//!
//! ## Architecture
//! ```text
//!  subscribe("tick", f)                 emit("tick", &payload)
//!          │                                    │
//!          ▼                                    ▼
//!  ┌──────────────────────────────────────────────────────────┐
//!  │ Emitter<T>                                               │
//!  │                                                          │
//!  │   "tick" ──► [ Registration, Registration, ... ]         │
//!  │   "stop" ──► [ Registration ]                            │
//!  │                                                          │
//!  │   Registration = { id, listener (Rc), once flag }        │
//!  └──────────────────────────────────────────────────────────┘
//!          │
//!          └─► dispatch in insertion order, cursor-based,
//!              once-registrations removed right after they fire
//! ```
//!
//! ## Features
//! | Area              | Description                                          | Key types / functions                         |
//! |-------------------|------------------------------------------------------|-----------------------------------------------|
//! | **Subscription**  | Chaining registration by listener reference.         | [`Emitter::subscribe`], [`Emitter::on`]       |
//! | **Once delivery** | Registrations removed after their first invocation.  | [`Emitter::subscribe_once`]                   |
//! | **Removal**       | Targeted (by identity or token) and bulk (per type). | [`Emitter::unsubscribe`], [`Emitter::detach`] |
//! | **Dispatch**      | Synchronous, in-order, reentrancy-safe delivery.     | [`Emitter::emit`], [`Emitter::trigger`]       |
//! | **Errors**        | Typed non-fatal faults for the `try_` variants.      | [`EmitterError`]                              |
//!
//! ## Listener identity
//! Listeners are stored as [`ListenerRef`]s (`Rc<dyn Fn(&Emitter<T>, &T)>`).
//! The identity used by targeted unsubscription is the address of the shared
//! allocation: clone the same `ListenerRef` you subscribed with and pass it
//! to [`Emitter::unsubscribe`]. Wrapping the same closure in a fresh
//! `Rc::new` produces a *different* identity. For call sites that do not
//! want to keep an `Rc` around, the handle API ([`Emitter::attach`] /
//! [`Emitter::detach`]) returns a [`ListenerId`] token instead.
//!
//! ## Threading
//! The emitter is single-threaded by construction (`Rc` + `RefCell` make it
//! neither `Send` nor `Sync`). Every operation runs to completion on the
//! caller's thread; wrap the emitter in external synchronization if you need
//! to share it, or keep one per thread.
//!
//! ## Reentrancy
//! No internal borrow is held while a listener runs, so listeners may call
//! `subscribe`, `unsubscribe`, and `emit` on the emitter that invoked them,
//! including for the event type currently being dispatched. Such mutations
//! are visible to the active dispatch (no snapshotting); see
//! [`Emitter::emit`] for the exact cursor rules.
//!
//! ## Panics
//! The emitter does not isolate listeners: a panicking listener unwinds
//! through [`Emitter::emit`] to the caller, and listeners after it in that
//! dispatch are not invoked.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use micro_emitter::{Emitter, ListenerRef};
//!
//! let emitter: Emitter<u32> = Emitter::new();
//! let seen = Rc::new(Cell::new(0u32));
//!
//! let on_tick: ListenerRef<u32> = {
//!     let seen = Rc::clone(&seen);
//!     Rc::new(move |_, n| seen.set(seen.get() + n))
//! };
//!
//! emitter
//!     .subscribe("tick", on_tick.clone())
//!     .emit("tick", &2)
//!     .emit("tick", &3)
//!     .unsubscribe("tick", Some(&on_tick))
//!     .emit("tick", &100); // no listener left, no-op
//!
//! assert_eq!(seen.get(), 5);
//! ```

mod emitter;
mod error;

// ---- Public re-exports ----

pub use emitter::{Emitter, Listener, ListenerId, ListenerRef};
pub use error::EmitterError;
