//! # Example: once_and_handles
//!
//! Demonstrates once-delivery and the token-based handle API.
//!
//! Shows how to:
//! - Register a listener that fires exactly once ([`Emitter::attach_once`]).
//! - Remove a listener by [`ListenerId`] token instead of by reference.
//! - Observe removal faults as values with [`Emitter::try_detach`].
//!
//! ## Run
//! ```bash
//! cargo run --example once_and_handles
//! ```

use micro_emitter::Emitter;

fn main() {
    let emitter: Emitter<u32> = Emitter::new();

    emitter.attach_once("job", |_, n| {
        println!("first job only: #{n}");
    });
    let progress = emitter.attach("job", |_, n| {
        println!("job #{n} done");
    });

    emitter.emit("job", &1).emit("job", &2).emit("job", &3);

    // Token-based removal: no listener reference needed.
    emitter.detach("job", progress);
    emitter.emit("job", &4); // nothing left, no-op

    // The fallible twin reports what the chaining form only warns about.
    match emitter.try_detach("job", progress) {
        Ok(()) => println!("detached"),
        Err(fault) => println!("detach failed: {fault} [{}]", fault.as_label()),
    }
}
