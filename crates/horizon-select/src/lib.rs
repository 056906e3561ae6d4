//! Horizon Select
//!
//! A headless dynamic select widget. The crate models everything a dropdown
//! form control does short of drawing it: the option catalog, the
//! closed/focused/open interaction state machine, keyboard navigation with
//! type-ahead, form-field synchronization, and outside-click dismissal. The
//! host owns real input devices and the render surface; it feeds events in
//! through [`SelectBox::handle_event`] and reads the widget back out as a
//! [`RenderNode`] tree.
//!
//! # Quick Start
//!
//! ```
//! use horizon_select::{OptionDescriptor, SelectBox, SelectConfig};
//!
//! let mut select = SelectBox::new(
//!     vec![
//!         OptionDescriptor::new("apple").with_text("Apple"),
//!         OptionDescriptor::new("cherry").with_text("Cherry"),
//!     ],
//!     SelectConfig::new().with_name("fruit").with_placeholder("Pick a fruit"),
//! )?;
//!
//! select.changed().connect(|change| {
//!     println!("selected {} ({})", change.value, change.label);
//! });
//!
//! select.select("cherry")?;
//! assert_eq!(select.value(), "cherry");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! - [`OptionCatalog`] owns the options and the single selection mark.
//! - [`WidgetState`] is the three-phase interaction state machine.
//! - [`KeyboardNavigator`] maps key presses to navigation actions.
//! - [`SyncBridge`] mirrors the selection into the hidden form field and
//!   raises the `changed` signal.
//! - [`OutsideInteractionGuard`] decides pointer-target membership.
//! - [`Renderer`] / [`TreeRenderer`] project the widget for the host.
//! - [`SelectBox`] composes all of the above and routes events.

pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod guard;
pub mod navigator;
pub mod option;
pub mod render;
pub mod state;
pub mod sync;
pub mod widget;

pub use catalog::{Direction, OptionCatalog};
pub use config::SelectConfig;
pub use error::{ConstructError, SelectError};
pub use event::{
    HostMutation, Key, KeyPressEvent, KeyboardModifiers, PointerEvent, PointerKind,
    PointerTarget, SelectEvent, WidgetPart,
};
pub use guard::OutsideInteractionGuard;
pub use navigator::{KeyDisposition, KeyboardNavigator, NavAction};
pub use option::{OptionContent, OptionDescriptor, OptionImage, SelectOption};
pub use render::{RenderNode, Renderer, TreeRenderer};
pub use state::{BLUR_DEBOUNCE, SelectionPhase, Viewport, WidgetState};
pub use sync::{SelectionChange, SyncBridge};
pub use widget::{EventOutcome, SelectBox, dispatch_pointer};

pub use horizon_select_core::{ConnectionId, Signal, WidgetId, instance_registry};
