//! Core systems for Lattice Split.
//!
//! This crate provides the small foundation the split container is built on:
//!
//! - **Signal/Slot System**: Type-safe notification of observers
//! - **Logging**: Tracing targets and convenience macros
//! - **Errors**: Error types shared by the signal system
//!
//! # Signal/Slot Example
//!
//! ```
//! use lattice_split_core::Signal;
//!
//! // Create a signal that notifies when an offset changes
//! let dragged = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = dragged.connect(|offset| {
//!     println!("Divider dragged to offset {}", offset);
//! });
//!
//! // Emit the signal
//! dragged.emit(42);
//!
//! // Disconnect when done
//! dragged.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SignalError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
