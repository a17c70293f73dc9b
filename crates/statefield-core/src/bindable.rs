#![forbid(unsafe_code)]

//! Single-subscriber observable value.
//!
//! [`Bindable`] wraps a value and notifies one registered subscriber every
//! time the value is replaced. There is no deduplication: setting an equal
//! value still notifies. With no subscriber registered, updates are silent.
//!
//! A `Bindable<T>` is a cheap clonable handle; clones share the same cell,
//! so a host can keep one handle, hand another to a controller, and both
//! observe the same value.
//!
//! # Re-entrancy
//!
//! Notification is synchronous on the calling thread. A subscriber that
//! calls [`Bindable::set`] or [`Bindable::subscribe`] on the same cell it is
//! being notified for will panic (the cell is borrowed for the duration of
//! the callback). Avoid recursive updates; this is caller responsibility.
//!
//! # Binding lifetime
//!
//! [`Bindable::bind_to`] installs a live forwarding link, not a snapshot
//! copy. The forwarder holds only a weak reference to its target, so
//! dropping every handle to the target silently severs the link instead of
//! keeping the cell alive. Explicit teardown is `source.unsubscribe()`.

use core::fmt;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Subscriber<T> = Rc<RefCell<Box<dyn FnMut(&T)>>>;

struct Inner<T: 'static> {
    value: T,
    subscriber: Option<Subscriber<T>>,
}

/// An observable value with at most one subscriber.
pub struct Bindable<T: 'static> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: 'static> Bindable<T> {
    /// Create a new cell holding `value`, with no subscriber.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                subscriber: None,
            })),
        }
    }

    /// Replace the stored value and notify the subscriber, if any.
    ///
    /// The subscriber is invoked synchronously with a reference to the new
    /// value, even when the new value equals the old one.
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        notify(&self.inner);
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Clear the subscriber. Subsequent [`set`](Self::set) calls are silent.
    pub fn unsubscribe(&self) {
        self.inner.borrow_mut().subscriber = None;
    }

    /// Whether a subscriber is currently registered.
    #[must_use]
    pub fn has_subscriber(&self) -> bool {
        self.inner.borrow().subscriber.is_some()
    }

    /// Whether this handle and `other` refer to the same cell.
    #[must_use]
    pub fn same_cell(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Register `callback` as the single subscriber, replacing any previous
    /// one. The callback fires on every subsequent [`set`](Self::set).
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) {
        self.inner.borrow_mut().subscriber = Some(Rc::new(RefCell::new(Box::new(callback))));
    }
}

impl<T: Clone + 'static> Bindable<T> {
    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Bind this cell to `source`, one-way: every value set on `source`
    /// propagates into this cell (firing this cell's own subscriber).
    ///
    /// The link occupies `source`'s subscriber slot; it does not propagate
    /// in the reverse direction and does not copy the current value.
    pub fn bind_to(&self, source: &Bindable<T>) {
        let target: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        source.subscribe(move |value: &T| {
            // Target already dropped: the link is dead, drop the update.
            if let Some(cell) = target.upgrade() {
                cell.borrow_mut().value = value.clone();
                notify(&cell);
            }
        });
    }
}

/// Invoke the cell's subscriber with the current value, if one is present.
///
/// The subscriber handle is cloned out first so the mutable borrow on the
/// cell is released before the callback runs; the callback observes the
/// value through a shared borrow.
fn notify<T: 'static>(cell: &Rc<RefCell<Inner<T>>>) {
    let subscriber = cell.borrow().subscriber.clone();
    if let Some(subscriber) = subscriber {
        let inner = cell.borrow();
        (subscriber.borrow_mut())(&inner.value);
    }
}

impl<T: 'static> Clone for Bindable<T> {
    /// Clone the handle. Both handles refer to the same cell.
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default + 'static> Default for Bindable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Bindable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Bindable")
            .field("value", &inner.value)
            .field("subscribed", &inner.subscriber.is_some())
            .finish()
    }
}
