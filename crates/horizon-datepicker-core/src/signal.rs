//! Signal/slot system for Horizon Datepicker.
//!
//! This module provides a type-safe, Qt-inspired signal/slot mechanism used by
//! the selection models to announce changes. Signals are emitted when state
//! changes, and connected slots (callbacks) are invoked in response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Delivery
//!
//! Delivery is always direct: every slot runs on the emitting thread before
//! [`Signal::emit`] returns. A signal has an explicit lifecycle. Once
//! [`Signal::close`] has been called, all slots are dropped, further emissions
//! are ignored and new connections are refused.
//!
//! # Example
//!
//! ```
//! use horizon_datepicker_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, SignalError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is closed.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked synchronously
/// with the provided arguments.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments.
///
/// # Thread Safety
///
/// `Signal<Args>` is `Send + Sync` and can be shared between threads. Slots
/// run on whichever thread calls [`emit`](Self::emit).
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
    /// Set once by [`close`](Self::close) and never cleared.
    closed: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .field("closed", &self.closed.load(Ordering::SeqCst))
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new open signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
            closed: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    /// Connecting to a closed signal is a no-op and returns a null ID; use
    /// [`try_connect`](Self::try_connect) to observe that case.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_datepicker_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        match self.try_connect(slot) {
            Ok(id) => id,
            Err(_) => {
                tracing::warn!(target: targets::SIGNAL, "connect on closed signal ignored");
                ConnectionId::default()
            }
        }
    }

    /// Connect a slot, failing with [`SignalError::Closed`] if the signal
    /// has already been closed.
    pub fn try_connect<F>(&self, slot: F) -> Result<ConnectionId>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut connections = self.connections.lock();
        // Checked under the lock so a concurrent close cannot slip in between.
        if self.is_closed() {
            return Err(SignalError::Closed);
        }
        Ok(connections.insert(Arc::new(slot)))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect a specific slot, reporting an unknown ID as an error.
    pub fn try_disconnect(&self, id: ConnectionId) -> Result<()> {
        if self.disconnect(id) {
            Ok(())
        } else {
            Err(SignalError::InvalidConnection)
        }
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` will do nothing. This is useful
    /// during initialization or batch updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Check if the signal has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Close the signal.
    ///
    /// Drops every connected slot. After this call `emit` never reaches a
    /// slot again and new connections are refused. Closing twice is harmless;
    /// returns `true` only for the call that actually closed the signal.
    pub fn close(&self) -> bool {
        let mut connections = self.connections.lock();
        if self.closed.swap(true, Ordering::SeqCst) {
            return false;
        }
        tracing::debug!(
            target: targets::SIGNAL,
            dropped = connections.len(),
            "closing signal"
        );
        connections.clear();
        true
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// Does nothing while the signal is blocked or after it has been closed.
    /// Slots are invoked in connection order on the calling thread, outside
    /// the connection lock, so a slot may connect or disconnect freely. If a
    /// slot closes the signal, the remaining slots are skipped.
    #[tracing::instrument(skip_all, target = "horizon_datepicker_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_closed() {
            tracing::trace!(target: targets::SIGNAL, "signal closed, skipping emit");
            return;
        }
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            if self.is_closed() {
                tracing::trace!(target: targets::SIGNAL, "signal closed during emit, stopping delivery");
                break;
            }
            slot(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
