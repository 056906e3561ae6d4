//! Interaction state machine.
//!
//! The widget is always in exactly one of three phases: closed without
//! focus, closed with focus, or open. The phase determines which inputs the
//! widget reacts to and what the renderer shows. All transitions happen
//! through the methods here; there is no back door that leaves the phase
//! and the highlight out of sync.

use std::time::{Duration, Instant};

use crate::catalog::OptionCatalog;
use crate::config::SelectConfig;

/// How long a focus loss may remain pending before it closes the widget.
///
/// Focus leaving the header and landing on a dropdown item arrives as a
/// focus-out followed almost immediately by a pointer event on the item.
/// Closing on the focus-out directly would destroy the dropdown before the
/// pointer event could commit, so the close is deferred by this window and
/// cancelled when focus returns.
pub const BLUR_DEBOUNCE: Duration = Duration::from_millis(50);

/// The three interaction phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// Dropdown closed, widget unfocused.
    #[default]
    ClosedUnfocused,
    /// Dropdown closed, header focused.
    ClosedFocused,
    /// Dropdown open. Implies focus.
    Open,
}

impl SelectionPhase {
    /// Whether the dropdown is open.
    pub fn is_open(self) -> bool {
        matches!(self, SelectionPhase::Open)
    }

    /// Whether the widget holds keyboard focus.
    pub fn has_focus(self) -> bool {
        matches!(self, SelectionPhase::ClosedFocused | SelectionPhase::Open)
    }
}

/// Row window the dropdown currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row.
    pub first_row: usize,
    /// Number of rows visible at once.
    pub visible_rows: usize,
}

impl Viewport {
    /// Scroll the minimum distance needed to bring `row` into view. Rows
    /// already visible leave the window untouched.
    pub fn ensure_visible(&mut self, row: usize) {
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + self.visible_rows {
            self.first_row = row + 1 - self.visible_rows;
        }
    }

    /// Whether `row` is inside the window.
    pub fn contains(&self, row: usize) -> bool {
        row >= self.first_row && row < self.first_row + self.visible_rows
    }
}

/// Mutable interaction state of one widget.
#[derive(Debug, Clone)]
pub struct WidgetState {
    phase: SelectionPhase,
    disabled: bool,
    highlighted: Option<usize>,
    viewport: Viewport,
    columns: u32,
    pending_blur: Option<Instant>,
}

impl WidgetState {
    /// Initial state for a widget with the given configuration.
    pub fn new(config: &SelectConfig) -> Self {
        Self {
            phase: SelectionPhase::ClosedUnfocused,
            disabled: config.disabled,
            highlighted: None,
            viewport: Viewport {
                first_row: 0,
                visible_rows: config.visible_rows.max(1),
            },
            columns: config.effective_columns(),
            pending_blur: None,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Whether the whole widget is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The highlighted option index. Arrow keys may move the highlight
    /// while closed-but-focused; the renderer only shows it while open.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// The dropdown's current row window.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record that the widget gained focus. Cancels any pending blur.
    pub fn focus_in(&mut self) {
        self.cancel_blur();
        if self.phase == SelectionPhase::ClosedUnfocused {
            self.phase = SelectionPhase::ClosedFocused;
        }
    }

    /// Toggle the dropdown.
    ///
    /// Opening places the highlight on a highlight carried over from the
    /// closed-focused phase, else on the selected option if it is enabled,
    /// else on the first enabled option, and scrolls it into view. A
    /// disabled widget, or a catalog with no enabled options, refuses to
    /// open. Returns whether the phase changed.
    pub fn activate(&mut self, catalog: &OptionCatalog) -> bool {
        if self.phase.is_open() {
            self.close_to_focused();
            return true;
        }
        if self.disabled {
            return false;
        }
        let enabled_at =
            |i: &usize| catalog.get(*i).is_some_and(|opt| !opt.is_disabled());
        let Some(initial) = self
            .highlighted
            .filter(enabled_at)
            .or_else(|| catalog.selected_index().filter(enabled_at))
            .or_else(|| catalog.first_enabled())
        else {
            tracing::warn!(
                target: "horizon_select::state",
                "refusing to open: no enabled options"
            );
            return false;
        };
        self.phase = SelectionPhase::Open;
        self.highlight(initial);
        true
    }

    /// Close the dropdown, keeping focus on the header.
    pub fn close_to_focused(&mut self) {
        if self.phase.is_open() {
            self.phase = SelectionPhase::ClosedFocused;
        }
        self.highlighted = None;
    }

    /// Close the dropdown and drop focus, regardless of the current phase.
    pub fn force_closed_unfocused(&mut self) {
        self.phase = SelectionPhase::ClosedUnfocused;
        self.highlighted = None;
        self.pending_blur = None;
    }

    /// Move the highlight to `index` and scroll its row into view.
    pub fn highlight(&mut self, index: usize) {
        self.highlighted = Some(index);
        let row = index / self.columns as usize;
        self.viewport.ensure_visible(row);
    }

    /// Set the whole-widget disabled flag. Disabling an open widget closes
    /// it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled && self.phase.is_open() {
            self.close_to_focused();
        }
    }

    /// Arm the blur timer. A later call supersedes an earlier one.
    pub fn schedule_blur(&mut self, now: Instant) {
        self.pending_blur = Some(now + BLUR_DEBOUNCE);
    }

    /// Disarm the blur timer.
    pub fn cancel_blur(&mut self) {
        self.pending_blur = None;
    }

    /// Whether a blur is armed and not yet elapsed.
    pub fn has_pending_blur(&self) -> bool {
        self.pending_blur.is_some()
    }

    /// Fire the blur timer if its deadline has passed. Returns whether the
    /// widget closed as a result.
    pub fn poll_blur(&mut self, now: Instant) -> bool {
        match self.pending_blur {
            Some(deadline) if now >= deadline => {
                self.force_closed_unfocused();
                true
            }
            _ => false,
        }
    }
}
