//! Keyboard navigation.
//!
//! The navigator is a pure function from a key press plus the current
//! catalog and state to a [`KeyDisposition`]: what the widget should do and
//! whether the host's default key behavior must be suppressed. It never
//! mutates anything itself, which keeps every binding testable without a
//! widget.
//!
//! Bindings:
//!
//! - `Escape` closes the dropdown.
//! - `Enter` opens when closed; when open it commits the highlight, or just
//!   closes if nothing is highlighted.
//! - `Space` opens when closed and is swallowed when open.
//! - `ArrowUp` / `ArrowDown` move the highlight to the nearest enabled
//!   option, wrapping at the ends.
//! - `Tab` / `Shift+Tab` move the highlight without wrapping while open;
//!   stepping past the end closes the dropdown and lets the host's focus
//!   traversal proceed. While closed, Tab always passes through.
//! - A letter jumps to the next enabled option whose label starts with it,
//!   scanning forward (or backward with Shift) at most one full cycle.

use unicode_segmentation::UnicodeSegmentation;

use crate::catalog::{Direction, OptionCatalog};
use crate::event::{Key, KeyPressEvent};
use crate::state::WidgetState;

/// What the widget should do in response to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Move the highlight to this index.
    Highlight(usize),
    /// Open the dropdown.
    Open,
    /// Close the dropdown, keeping focus.
    Close,
    /// Commit the option at this index and close.
    Commit(usize),
    /// Close and hand focus traversal back to the host.
    BoundaryExit,
    /// Swallow the key without changing anything.
    Handled,
    /// The key is not ours; the host handles it.
    PassThrough,
}

/// A navigation action plus whether the host must suppress its own default
/// handling of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDisposition {
    /// What to do.
    pub action: NavAction,
    /// Whether to suppress the host default.
    pub suppress_default: bool,
}

impl KeyDisposition {
    fn suppressed(action: NavAction) -> Self {
        Self {
            action,
            suppress_default: true,
        }
    }

    fn pass_through() -> Self {
        Self {
            action: NavAction::PassThrough,
            suppress_default: false,
        }
    }
}

/// Stateless keyboard binding table.
pub struct KeyboardNavigator;

impl KeyboardNavigator {
    /// Decide what a key press should do given the current catalog and
    /// state. Callers only invoke this while the widget holds focus.
    pub fn dispose(
        event: &KeyPressEvent,
        catalog: &OptionCatalog,
        state: &WidgetState,
    ) -> KeyDisposition {
        let open = state.phase().is_open();
        let origin = state.highlighted().or_else(|| catalog.selected_index());

        match event.key {
            Key::Escape => {
                if open {
                    KeyDisposition::suppressed(NavAction::Close)
                } else {
                    KeyDisposition::suppressed(NavAction::Handled)
                }
            }
            Key::Enter => {
                if open {
                    match state.highlighted() {
                        Some(index) => KeyDisposition::suppressed(NavAction::Commit(index)),
                        None => KeyDisposition::suppressed(NavAction::Close),
                    }
                } else {
                    KeyDisposition::suppressed(NavAction::Open)
                }
            }
            Key::Space => {
                if open {
                    KeyDisposition::suppressed(NavAction::Handled)
                } else {
                    KeyDisposition::suppressed(NavAction::Open)
                }
            }
            Key::ArrowUp | Key::ArrowDown => {
                let direction = if event.key == Key::ArrowUp {
                    Direction::Backward
                } else {
                    Direction::Forward
                };
                match catalog.next_enabled(origin, direction, true) {
                    Some(index) => KeyDisposition::suppressed(NavAction::Highlight(index)),
                    None => KeyDisposition::suppressed(NavAction::Handled),
                }
            }
            Key::Tab => {
                if !open {
                    return KeyDisposition::pass_through();
                }
                let direction = if event.modifiers.shift {
                    Direction::Backward
                } else {
                    Direction::Forward
                };
                match catalog.next_enabled(origin, direction, false) {
                    Some(index) => KeyDisposition::suppressed(NavAction::Highlight(index)),
                    None => KeyDisposition {
                        action: NavAction::BoundaryExit,
                        suppress_default: false,
                    },
                }
            }
            Key::Char(letter) if letter.is_alphabetic() => {
                let direction = if event.modifiers.shift {
                    Direction::Backward
                } else {
                    Direction::Forward
                };
                match Self::type_ahead(catalog, origin, direction, letter) {
                    Some(index) => KeyDisposition::suppressed(NavAction::Highlight(index)),
                    None => KeyDisposition::suppressed(NavAction::Handled),
                }
            }
            _ => KeyDisposition::pass_through(),
        }
    }

    /// Find the next enabled option whose label starts with `letter`,
    /// scanning cyclically from just past `origin` for at most one full
    /// revolution. The comparison lowercases both sides and looks at the
    /// leading grapheme of the trimmed label. Options without label text
    /// are logged and skipped.
    fn type_ahead(
        catalog: &OptionCatalog,
        origin: Option<usize>,
        direction: Direction,
        letter: char,
    ) -> Option<usize> {
        let len = catalog.len() as i64;
        let needle: String = letter.to_lowercase().collect();
        let step = direction.delta();
        let start = match origin {
            Some(i) => i as i64,
            None => match direction {
                Direction::Forward => -1,
                Direction::Backward => len,
            },
        };

        for k in 1..=len {
            let idx = (start + step * k).rem_euclid(len) as usize;
            if Some(idx) == origin {
                break;
            }
            let opt = catalog.get(idx)?;
            if opt.is_disabled() {
                continue;
            }
            let Some(label) = opt.label_text() else {
                tracing::warn!(
                    target: "horizon_select::navigator",
                    value = %opt.value(),
                    "option has no label text, skipping in type-ahead"
                );
                continue;
            };
            let Some(first) = label.trim().graphemes(true).next() else {
                continue;
            };
            if first.to_lowercase() == needle {
                return Some(idx);
            }
        }
        None
    }
}
