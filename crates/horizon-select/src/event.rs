//! Inbound events.
//!
//! The widget is headless: the host owns real input devices and the render
//! surface, and translates raw input into the event types here before
//! calling [`SelectBox::handle_event`](crate::SelectBox::handle_event). In
//! particular the host resolves every pointer-down to a [`PointerTarget`],
//! which replaces any notion of hit-testing inside the widget.

use horizon_select_core::WidgetId;

/// Keyboard modifier state at the time of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt key held.
    pub alt: bool,
    /// Meta (Command/Windows) key held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Whether any modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Whether no modifier is held.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Logical keys the widget reacts to.
///
/// Keys outside this set arrive as [`Key::Other`] and always pass through
/// to the host unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Tab.
    Tab,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// A printable character.
    Char(char),
    /// Any other key.
    Other,
}

/// A key press delivered to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressEvent {
    /// The logical key.
    pub key: Key,
    /// Modifier state.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// A key press with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyboardModifiers::NONE,
        }
    }

    /// A key press with Shift held.
    pub fn with_shift(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyboardModifiers::SHIFT,
        }
    }
}

/// The part of a widget a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPart {
    /// The always-visible header.
    Header,
    /// A specific dropdown item, by catalog index.
    Item(usize),
    /// The dropdown surface outside any item.
    ItemArea,
}

/// Host-resolved target of a pointer-down.
///
/// The host walks its own surface tree and reports the innermost match:
/// inside a widget, on a form label bound to a widget, on a wrapper
/// container whose first child is a widget, or on the page at large.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the widget with the given ID.
    Widget {
        /// The widget hit.
        id: WidgetId,
        /// Which part of it.
        part: WidgetPart,
    },
    /// On a label associated with the given widget.
    Label {
        /// The widget the label points at.
        target: WidgetId,
    },
    /// On a wrapper container whose first child is the given widget.
    Wrapper {
        /// The wrapped widget.
        first_child: WidgetId,
    },
    /// Anywhere else on the page.
    Page,
}

/// Pointer input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse click.
    Click,
    /// Touch tap.
    Touch,
}

/// A pointer-down delivered to the dispatch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Where it landed.
    pub target: PointerTarget,
    /// What kind of input it was.
    pub kind: PointerKind,
}

impl PointerEvent {
    /// A click on the given target.
    pub fn click(target: PointerTarget) -> Self {
        Self {
            target,
            kind: PointerKind::Click,
        }
    }

    /// A touch tap on the given target.
    pub fn touch(target: PointerTarget) -> Self {
        Self {
            target,
            kind: PointerKind::Touch,
        }
    }
}

/// Host-side structural changes the widget must reconcile with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMutation {
    /// The host toggled the widget's disabled attribute.
    DisabledChanged(bool),
}

/// Any inbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectEvent {
    /// Pointer-down, already resolved to a target.
    Pointer(PointerEvent),
    /// Key press while the widget participates in focus.
    Key(KeyPressEvent),
    /// The widget gained keyboard focus.
    FocusIn,
    /// The widget lost keyboard focus.
    FocusOut,
    /// A host-side mutation.
    Host(HostMutation),
}
