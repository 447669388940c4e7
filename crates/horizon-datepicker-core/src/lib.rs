//! Core systems for Horizon Datepicker.
//!
//! This crate provides the foundational pieces shared by the date selection
//! models:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification with
//!   an explicit open/closed lifecycle
//! - **Logging**: `tracing` targets and span helpers
//! - **Errors**: Signal error types
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_datepicker_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Close it at teardown; later emissions reach nobody
//! value_changed.close();
//! value_changed.emit(43);
//! # let _ = conn_id;
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SignalError};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
