//! Reactive properties with change detection.
//!
//! A [`Property<T>`] wraps a value behind a read/write lock and reports
//! whether a write actually changed it, so the owner knows when to emit the
//! associated notification signal.
//!
//! # Example
//!
//! ```
//! use userdeck_core::{Property, Signal};
//!
//! struct SearchBox {
//!     query: Property<String>,
//!     query_changed: Signal<String>,
//! }
//!
//! impl SearchBox {
//!     fn set_query(&self, text: &str) {
//!         if self.query.set(text.to_string()) {
//!             self.query_changed.emit(text.to_string());
//!         }
//!     }
//! }
//!
//! let search = SearchBox { query: Property::default(), query_changed: Signal::new() };
//! search.set_query("bret");
//! assert_eq!(search.query.get(), "bret");
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// when `T` is. Every write happens under one exclusive lock, so readers never
/// observe a partially applied [`update`](Self::update).
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }

    /// Mutate the value in place under a single write lock.
    ///
    /// Returns `true` if the value differs from what it was before `f` ran.
    pub fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut current = self.value.write();
        let before = current.clone();
        f(&mut current);
        *current != before
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .finish()
    }
}

/// A read-only view of a property.
///
/// Lets an owner expose a property publicly while keeping the setters private.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    /// Create a read-only view of a property.
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Access the value through a closure.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.with(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_change() {
        let prop = Property::new(42);
        assert!(!prop.set(42));
        assert!(prop.set(100));
        assert_eq!(prop.get(), 100);
    }

    #[test]
    fn test_replace_returns_old_value() {
        let prop = Property::new(String::from("a"));
        assert_eq!(prop.replace("b".into()), Some("a".into()));
        assert_eq!(prop.replace("b".into()), None);
    }

    #[test]
    fn test_update_detects_change() {
        let prop = Property::new(vec![1, 2]);
        assert!(prop.update(|v| v.push(3)));
        assert!(!prop.update(|v| v.sort()));
        assert_eq!(prop.get(), vec![1, 2, 3]);
    }

    #[test]
    fn test_with_avoids_clone() {
        let prop = Property::new(vec![1, 2, 3]);
        assert_eq!(prop.with(|v| v.len()), 3);
    }

    #[test]
    fn test_read_only_view() {
        let prop = Property::new(7);
        let view = ReadOnlyProperty::new(&prop);
        prop.set_silent(8);
        assert_eq!(view.get(), 8);
        assert_eq!(view.with(|v| v * 2), 16);
    }
}
