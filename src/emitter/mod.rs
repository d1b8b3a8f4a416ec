//! The emitter: registration bookkeeping and synchronous dispatch.
//!
//! This module groups the listener **data model** and the **emitter** that
//! owns it.
//!
//! ## Contents
//! - [`Listener`], [`ListenerRef`], [`ListenerId`] listener signature and the
//!   two ways to identify a registration (shared reference, token)
//! - [`Emitter`] per-type ordered dispatch lists and the
//!   subscribe/unsubscribe/emit operations
//!
//! ## Quick reference
//! - **Chaining API**: [`Emitter::subscribe`], [`Emitter::subscribe_once`],
//!   [`Emitter::unsubscribe`], [`Emitter::emit`] (aliases [`Emitter::on`],
//!   [`Emitter::once`], [`Emitter::off`], [`Emitter::trigger`]).
//! - **Handle API**: [`Emitter::attach`], [`Emitter::attach_once`],
//!   [`Emitter::detach`].
//! - **Fallible twins**: [`Emitter::try_unsubscribe`], [`Emitter::try_detach`].

mod core;
mod registration;

pub use core::Emitter;
pub use registration::{Listener, ListenerId, ListenerRef};
