//! Core systems for fieldcap.
//!
//! This crate provides the foundations the fieldcap widget kit is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification between widgets
//!   and their observers
//! - **Thread Checks**: Debug assertions that widget state is only mutated
//!   on the UI thread
//! - **Logging**: `tracing` target constants for filtering kit logs
//!
//! # Signal Example
//!
//! ```
//! use fieldcap_core::Signal;
//!
//! // Create a signal that notifies when a caption changes
//! let label_changed = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = label_changed.connect(|text| {
//!     println!("Label changed to: {}", text);
//! });
//!
//! // Emit the signal
//! label_changed.emit("Username".to_string());
//!
//! // Disconnect when done
//! label_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;
pub mod thread_check;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::{is_main_thread, main_thread_id, set_main_thread, ThreadAffinity};
