//! Signal/slot system for Horizon Select.
//!
//! This module provides a type-safe signal/slot mechanism for notifying a
//! host application of widget state changes. Signals are emitted by widgets
//! when their state changes, and connected slots (callbacks) are invoked in
//! response.
//!
//! Unlike a general-purpose GUI framework, Horizon Select runs entirely
//! inside the host's input event callbacks: all state transitions execute
//! synchronously, so slots are always invoked directly on the emitting
//! call stack. There is no queued or cross-thread invocation mode.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Example
//!
//! ```
//! use horizon_select_core::Signal;
//!
//! let selection_changed = Signal::<String>::new();
//!
//! let conn_id = selection_changed.connect(|value| {
//!     println!("Selected: {}", value);
//! });
//!
//! selection_changed.emit("apple".to_string());
//! selection_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked synchronously
/// with a reference to the provided argument, in an unspecified order.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments, or a tuple like `(String, usize)` for
///   multiple arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Arc<dyn Fn(&Args) + Send + Sync>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a previously connected slot.
    ///
    /// Returns `true` if the connection existed and was removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Emit the signal, invoking every connected slot with `args`.
    ///
    /// Slots connected or disconnected from inside a slot take effect on the
    /// next emission; the current emission runs over a snapshot of the
    /// connection table.
    pub fn emit(&self, args: Args) {
        if self.blocked.load(Ordering::Acquire) {
            tracing::trace!(target: "horizon_select_core::signal", "emission suppressed: signal blocked");
            return;
        }

        // Snapshot so slots may connect/disconnect without deadlocking.
        let slots: Vec<Arc<dyn Fn(&Args) + Send + Sync>> =
            self.connections.lock().values().cloned().collect();

        for slot in slots {
            slot(&args);
        }
    }

    /// Temporarily block emission. Emissions while blocked are dropped.
    pub fn block(&self) {
        self.blocked.store(true, Ordering::Release);
    }

    /// Unblock emission after a call to [`block`](Self::block).
    pub fn unblock(&self) {
        self.blocked.store(false, Ordering::Release);
    }

    /// Whether emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::Acquire)
    }

    /// The number of currently connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }
}
