//! Core systems for Horizon Select.
//!
//! This crate provides the foundational components shared by every select
//! widget instance:
//!
//! - **Signal/Slot System**: Type-safe change notification between a widget
//!   and its host
//! - **Instance Registry**: Arena-based storage assigning each live widget a
//!   stable [`WidgetId`], used by the document-level interaction dispatch
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_select_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let value_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod registry;
pub mod signal;

pub use registry::{
    InstanceRegistry, RegistryError, RegistryResult, SharedInstanceRegistry, WidgetId,
    instance_registry,
};
pub use signal::{ConnectionId, Signal};
