//! # Example: basic
//!
//! Demonstrates the chaining subscribe/emit/unsubscribe cycle.
//!
//! Shows how to:
//! - Build a [`ListenerRef`] and keep a clone for later removal by identity.
//! - Chain `subscribe` / `emit` / `unsubscribe` calls.
//! - Use bulk removal to clear an event type defensively.
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use std::rc::Rc;

use micro_emitter::{Emitter, ListenerRef};

fn main() {
    let emitter: Emitter<String> = Emitter::new();

    let greeter: ListenerRef<String> = Rc::new(|_, name| {
        println!("hello, {name}");
    });
    let counter: ListenerRef<String> = {
        let seen = std::cell::Cell::new(0u32);
        Rc::new(move |_, _| {
            seen.set(seen.get() + 1);
            println!("greeted {} time(s)", seen.get());
        })
    };

    emitter
        .subscribe("greet", greeter.clone())
        .subscribe("greet", counter)
        .emit("greet", &"alice".to_string())
        .emit("greet", &"bob".to_string());

    // Remove the greeter by identity; the counter keeps firing.
    emitter
        .unsubscribe("greet", Some(&greeter))
        .emit("greet", &"carol".to_string());

    // Defensive bulk removal is always silent, even for unknown types.
    emitter.unsubscribe("greet", None).unsubscribe("never-used", None);

    println!("remaining listeners: {}", emitter.listener_count("greet"));
}
