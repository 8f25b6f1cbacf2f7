//! Core primitives for Userdeck.
//!
//! This crate provides the small reactive toolkit the rest of the workspace is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe observer lists for publishing state
//! - **Property System**: Values with change detection under a single lock
//! - **Logging**: Shared `tracing` targets and performance spans
//!
//! # Example
//!
//! ```
//! use userdeck_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//!
//! let counter = Counter { value: Property::new(0), value_changed: Signal::new() };
//! counter.increment();
//! assert_eq!(counter.value.get(), 1);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
