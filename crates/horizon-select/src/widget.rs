//! The select widget.
//!
//! [`SelectBox`] ties the pieces together: it owns the catalog, the
//! interaction state, the sync bridge, and the outside-interaction guard,
//! and routes every inbound [`SelectEvent`] through them. Hosts construct
//! one per form field, feed it events with a timestamp, and re-project
//! after any consumed event.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use horizon_select_core::{Signal, WidgetId, instance_registry};

use crate::catalog::OptionCatalog;
use crate::config::SelectConfig;
use crate::error::{ConstructError, SelectError};
use crate::event::{
    HostMutation, KeyPressEvent, PointerEvent, PointerTarget, SelectEvent, WidgetPart,
};
use crate::navigator::{KeyDisposition, KeyboardNavigator, NavAction};
use crate::option::OptionDescriptor;
use crate::render::Renderer;
use crate::state::WidgetState;
use crate::sync::{SelectionChange, SyncBridge};
use crate::guard::OutsideInteractionGuard;

static NAME_COUNTER: AtomicU64 = AtomicU64::new(1);

fn generate_name() -> String {
    format!("select-{}", NAME_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// What the widget did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// Whether the widget reacted to the event.
    pub consumed: bool,
    /// Whether the host must suppress its default handling.
    pub suppress_default: bool,
}

impl EventOutcome {
    fn consumed() -> Self {
        Self {
            consumed: true,
            suppress_default: true,
        }
    }

    fn ignored() -> Self {
        Self::default()
    }
}

/// A dynamic select widget.
pub struct SelectBox {
    id: WidgetId,
    name: String,
    config: SelectConfig,
    catalog: OptionCatalog,
    state: WidgetState,
    bridge: SyncBridge,
    guard: OutsideInteractionGuard,
}

impl SelectBox {
    /// Build a widget from option descriptors and configuration.
    ///
    /// A missing form name is replaced by a generated `select-N` name. The
    /// instance registers itself in the global
    /// [`instance_registry`] and unregisters on drop. Construction fails on
    /// an empty, duplicate-valued, or multiply-selected descriptor list; a
    /// catalog where every option is disabled is accepted but logged, and
    /// the widget degrades to a display-only field that never opens.
    pub fn new(
        descriptors: Vec<OptionDescriptor>,
        mut config: SelectConfig,
    ) -> Result<Self, ConstructError> {
        let catalog = OptionCatalog::from_descriptors(descriptors)?;
        let name = match config.name.take() {
            Some(name) => name,
            None => generate_name(),
        };
        config.name = Some(name.clone());

        if !catalog.has_enabled() {
            tracing::warn!(
                target: "horizon_select::widget",
                name = %name,
                "every option is disabled, widget is display-only"
            );
        }

        let id = instance_registry().register(name.clone());
        tracing::debug!(
            target: "horizon_select::widget",
            ?id,
            name = %name,
            options = catalog.len(),
            "constructed select widget"
        );

        let state = WidgetState::new(&config);
        let bridge = SyncBridge::new(&catalog, config.disabled);
        Ok(Self {
            id,
            name,
            config,
            catalog,
            state,
            bridge,
            guard: OutsideInteractionGuard::new(id),
        })
    }

    /// The widget's registry ID.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The resolved form name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The option catalog.
    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// The interaction state.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// The configuration, with the resolved name filled in.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// The current submit value, `""` when nothing is selected.
    pub fn value(&self) -> &str {
        self.bridge.hidden_value()
    }

    /// Whether the whole widget is disabled.
    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    /// Signal raised once per committed selection.
    pub fn changed(&self) -> &Signal<SelectionChange> {
        &self.bridge.changed
    }

    /// Select an option programmatically, by value.
    ///
    /// Behaves like a user commit: the hidden field updates and `changed`
    /// fires. Rejected while the widget is disabled.
    pub fn select(&mut self, value: &str) -> Result<(), SelectError> {
        if self.state.is_disabled() {
            return Err(SelectError::InvalidSelection {
                value: value.to_owned(),
            });
        }
        let index = self.catalog.select(value)?;
        self.bridge.commit(&self.catalog, index);
        Ok(())
    }

    /// Open the dropdown programmatically, taking focus.
    ///
    /// A no-op while already open or while the widget is disabled. Fails
    /// with [`SelectError::NoEnabledOptions`] when nothing could ever be
    /// highlighted.
    pub fn open(&mut self) -> Result<(), SelectError> {
        if self.state.is_disabled() || self.state.phase().is_open() {
            return Ok(());
        }
        if !self.catalog.has_enabled() {
            return Err(SelectError::NoEnabledOptions);
        }
        self.state.focus_in();
        self.state.activate(&self.catalog);
        Ok(())
    }

    /// Close the dropdown programmatically, keeping focus.
    pub fn close(&mut self) {
        self.state.close_to_focused();
    }

    /// Enable or disable the whole widget.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.state.set_disabled(disabled);
        self.bridge.set_disabled(disabled);
    }

    /// Project the widget through a renderer.
    pub fn project<R: Renderer>(&self, renderer: &R) -> R::Output {
        renderer.project(&self.catalog, &self.state, &self.config)
    }

    /// Advance time-based behavior. Fires the pending blur close if its
    /// window has elapsed. Returns whether the widget closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.state.poll_blur(now)
    }

    /// Route one event through the widget.
    ///
    /// `now` drives the blur debounce; pass the host's current time. The
    /// outcome tells the host whether the event was consumed and whether
    /// its default handling must be suppressed.
    pub fn handle_event(&mut self, event: &SelectEvent, now: Instant) -> EventOutcome {
        self.tick(now);

        match event {
            SelectEvent::Pointer(pointer) => self.handle_pointer(pointer),
            SelectEvent::Key(key) => self.handle_key(key),
            SelectEvent::FocusIn => {
                self.state.focus_in();
                EventOutcome::consumed()
            }
            SelectEvent::FocusOut => {
                self.state.schedule_blur(now);
                EventOutcome::consumed()
            }
            SelectEvent::Host(HostMutation::DisabledChanged(disabled)) => {
                self.set_disabled(*disabled);
                EventOutcome::consumed()
            }
        }
    }

    fn handle_pointer(&mut self, pointer: &PointerEvent) -> EventOutcome {
        // Membership first: a click outside closes without being consumed,
        // so the same event can still open a sibling widget.
        if !self.guard.is_inside(&pointer.target) {
            self.state.force_closed_unfocused();
            return EventOutcome::ignored();
        }
        self.state.cancel_blur();

        if self.state.is_disabled() {
            return EventOutcome::consumed();
        }

        match pointer.target {
            PointerTarget::Widget { part, .. } => match part {
                WidgetPart::Header => {
                    self.state.focus_in();
                    self.state.activate(&self.catalog);
                    EventOutcome::consumed()
                }
                WidgetPart::ItemArea => {
                    if !self.state.phase().is_open() {
                        self.state.focus_in();
                        self.state.activate(&self.catalog);
                    }
                    EventOutcome::consumed()
                }
                WidgetPart::Item(index) => {
                    if self.state.phase().is_open() {
                        let enabled = self
                            .catalog
                            .get(index)
                            .is_some_and(|opt| !opt.is_disabled());
                        if enabled {
                            self.commit_index(index);
                        }
                    } else {
                        self.state.focus_in();
                        self.state.activate(&self.catalog);
                    }
                    EventOutcome::consumed()
                }
            },
            PointerTarget::Label { .. } => {
                self.state.focus_in();
                self.state.activate(&self.catalog);
                EventOutcome::consumed()
            }
            // Clicking the wrapper focuses nothing and toggles nothing, but
            // it is still inside, so the dropdown stays put.
            PointerTarget::Wrapper { .. } => EventOutcome::consumed(),
            PointerTarget::Page => EventOutcome::ignored(),
        }
    }

    fn handle_key(&mut self, key: &KeyPressEvent) -> EventOutcome {
        if !self.state.phase().has_focus() || self.state.is_disabled() {
            return EventOutcome::ignored();
        }

        let KeyDisposition {
            action,
            suppress_default,
        } = KeyboardNavigator::dispose(key, &self.catalog, &self.state);

        let consumed = match action {
            NavAction::Highlight(index) => {
                self.state.highlight(index);
                true
            }
            NavAction::Open => {
                // A refused open (no enabled options) still swallows the key.
                self.state.activate(&self.catalog);
                true
            }
            NavAction::Close => {
                self.state.close_to_focused();
                true
            }
            NavAction::BoundaryExit => {
                self.state.close_to_focused();
                true
            }
            NavAction::Commit(index) => {
                self.commit_index(index);
                true
            }
            NavAction::Handled => true,
            NavAction::PassThrough => false,
        };

        EventOutcome {
            consumed,
            suppress_default,
        }
    }

    fn commit_index(&mut self, index: usize) {
        let Some(value) = self.catalog.get(index).map(|opt| opt.value().to_owned()) else {
            tracing::debug!(
                target: "horizon_select::widget",
                index,
                "commit index out of catalog bounds"
            );
            return;
        };
        match self.catalog.select(&value) {
            Ok(selected) => {
                self.bridge.commit(&self.catalog, selected);
                self.state.close_to_focused();
            }
            Err(err) => {
                tracing::debug!(
                    target: "horizon_select::widget",
                    index,
                    %err,
                    "commit rejected"
                );
            }
        }
    }
}

impl Drop for SelectBox {
    fn drop(&mut self) {
        if instance_registry().unregister(self.id).is_err() {
            tracing::debug!(
                target: "horizon_select::widget",
                id = ?self.id,
                "widget was already unregistered"
            );
        }
    }
}

/// Deliver one page-level pointer event to every live widget.
///
/// This is the document-level listener: the host resolves the target once
/// and each widget decides membership itself, so a click inside one widget
/// closes all the others.
pub fn dispatch_pointer(
    widgets: &mut [&mut SelectBox],
    pointer: &PointerEvent,
    now: Instant,
) -> EventOutcome {
    let mut outcome = EventOutcome::ignored();
    for widget in widgets.iter_mut() {
        let one = widget.handle_event(&SelectEvent::Pointer(*pointer), now);
        outcome.consumed |= one.consumed;
        outcome.suppress_default |= one.suppress_default;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Key, PointerKind};
    use crate::render::{RenderNode, TreeRenderer};
    use crate::state::{BLUR_DEBOUNCE, SelectionPhase};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn setup() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn fruit_box() -> SelectBox {
        setup();
        SelectBox::new(
            vec![
                OptionDescriptor::new("apple").with_text("Apple"),
                OptionDescriptor::new("banana").with_text("Banana").disabled(true),
                OptionDescriptor::new("cherry").with_text("Cherry"),
            ],
            SelectConfig::new().with_name("fruit"),
        )
        .unwrap()
    }

    fn now() -> Instant {
        Instant::now()
    }

    fn click(target: PointerTarget) -> SelectEvent {
        SelectEvent::Pointer(PointerEvent {
            target,
            kind: PointerKind::Click,
        })
    }

    fn key(k: Key) -> SelectEvent {
        SelectEvent::Key(KeyPressEvent::new(k))
    }

    fn header_click(widget: &SelectBox) -> SelectEvent {
        click(PointerTarget::Widget {
            id: widget.id(),
            part: WidgetPart::Header,
        })
    }

    fn item_click(widget: &SelectBox, index: usize) -> SelectEvent {
        click(PointerTarget::Widget {
            id: widget.id(),
            part: WidgetPart::Item(index),
        })
    }

    #[test]
    fn test_construction_failures() {
        assert_eq!(
            SelectBox::new(vec![], SelectConfig::default()).err(),
            Some(ConstructError::EmptyData)
        );
        assert!(matches!(
            SelectBox::new(
                vec![OptionDescriptor::new("a"), OptionDescriptor::new("a")],
                SelectConfig::default(),
            )
            .err(),
            Some(ConstructError::DuplicateValue { .. })
        ));
    }

    #[test]
    fn test_generated_names_are_distinct() {
        let first = SelectBox::new(
            vec![OptionDescriptor::new("x").with_text("X")],
            SelectConfig::default(),
        )
        .unwrap();
        let second = SelectBox::new(
            vec![OptionDescriptor::new("x").with_text("X")],
            SelectConfig::default(),
        )
        .unwrap();

        assert!(first.name().starts_with("select-"));
        assert_ne!(first.name(), second.name());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_registry_lifecycle() {
        let id = {
            let widget = fruit_box();
            assert!(instance_registry().contains(widget.id()));
            widget.id()
        };
        assert!(!instance_registry().contains(id));
    }

    #[test]
    fn test_click_toggles_dropdown() {
        let mut widget = fruit_box();
        let t = now();

        let outcome = widget.handle_event(&header_click(&widget), t);
        assert!(outcome.consumed);
        assert_eq!(widget.state().phase(), SelectionPhase::Open);

        widget.handle_event(&header_click(&widget), t);
        assert_eq!(widget.state().phase(), SelectionPhase::ClosedFocused);
    }

    #[test]
    fn test_item_click_commits_and_closes() {
        let mut widget = fruit_box();
        let t = now();

        let seen: Arc<Mutex<Vec<SelectionChange>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        widget.changed().connect(move |change| {
            sink.lock().push(change.clone());
        });

        widget.handle_event(&header_click(&widget), t);
        widget.handle_event(&item_click(&widget, 2), t);

        assert_eq!(widget.value(), "cherry");
        assert_eq!(widget.state().phase(), SelectionPhase::ClosedFocused);
        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].value, "cherry");
        assert_eq!(seen[0].label, "Cherry");
    }

    #[test]
    fn test_disabled_item_click_is_inert() {
        let mut widget = fruit_box();
        let t = now();
        widget.handle_event(&header_click(&widget), t);

        let outcome = widget.handle_event(&item_click(&widget, 1), t);
        assert!(outcome.consumed);
        assert_eq!(widget.value(), "");
        assert_eq!(widget.state().phase(), SelectionPhase::Open);
    }

    #[test]
    fn test_outside_click_closes_without_consuming() {
        let mut widget = fruit_box();
        let t = now();
        widget.handle_event(&header_click(&widget), t);

        let outcome = widget.handle_event(&click(PointerTarget::Page), t);
        assert!(!outcome.consumed);
        assert_eq!(widget.state().phase(), SelectionPhase::ClosedUnfocused);
    }

    #[test]
    fn test_label_click_toggles() {
        let mut widget = fruit_box();
        let t = now();
        let label = click(PointerTarget::Label { target: widget.id() });

        widget.handle_event(&label, t);
        assert_eq!(widget.state().phase(), SelectionPhase::Open);

        widget.handle_event(&label, t);
        assert_eq!(widget.state().phase(), SelectionPhase::ClosedFocused);
    }

    #[test]
    fn test_wrapper_click_keeps_dropdown_open() {
        let mut widget = fruit_box();
        let t = now();
        widget.handle_event(&header_click(&widget), t);

        let outcome = widget.handle_event(
            &click(PointerTarget::Wrapper {
                first_child: widget.id(),
            }),
            t,
        );
        assert!(outcome.consumed);
        assert_eq!(widget.state().phase(), SelectionPhase::Open);
    }

    #[test]
    fn test_keyboard_selection_cycle() {
        let mut widget = fruit_box();
        let t = now();

        widget.handle_event(&SelectEvent::FocusIn, t);
        widget.handle_event(&key(Key::Enter), t);
        assert_eq!(widget.state().phase(), SelectionPhase::Open);
        assert_eq!(widget.state().highlighted(), Some(0));

        // Down skips the disabled option.
        widget.handle_event(&key(Key::ArrowDown), t);
        assert_eq!(widget.state().highlighted(), Some(2));

        widget.handle_event(&key(Key::Enter), t);
        assert_eq!(widget.value(), "cherry");
        assert_eq!(widget.state().phase(), SelectionPhase::ClosedFocused);
    }

    #[test]
    fn test_escape_closes_without_committing() {
        let mut widget = fruit_box();
        let t = now();

        widget.handle_event(&SelectEvent::FocusIn, t);
        widget.handle_event(&key(Key::Space), t);
        widget.handle_event(&key(Key::ArrowDown), t);
        widget.handle_event(&key(Key::Escape), t);

        assert_eq!(widget.value(), "");
        assert_eq!(widget.state().phase(), SelectionPhase::ClosedFocused);
    }

    #[test]
    fn test_tab_boundary_exit_yields_default() {
        let mut widget = fruit_box();
        let t = now();

        widget.handle_event(&SelectEvent::FocusIn, t);
        widget.handle_event(&key(Key::Enter), t);
        // Step to the last enabled option, then past it.
        widget.handle_event(&key(Key::Tab), t);
        let outcome = widget.handle_event(&key(Key::Tab), t);

        assert!(outcome.consumed);
        assert!(!outcome.suppress_default);
        assert_eq!(widget.state().phase(), SelectionPhase::ClosedFocused);
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let mut widget = fruit_box();
        let outcome = widget.handle_event(&key(Key::Enter), now());
        assert!(!outcome.consumed);
        assert_eq!(widget.state().phase(), SelectionPhase::ClosedUnfocused);
    }

    #[test]
    fn test_blur_then_quick_refocus_stays_open() {
        let mut widget = fruit_box();
        let t = now();
        widget.handle_event(&header_click(&widget), t);

        widget.handle_event(&SelectEvent::FocusOut, t);
        // An item click lands inside the blur window and cancels the close.
        widget.handle_event(&item_click(&widget, 0), t);
        assert_eq!(widget.value(), "apple");

        // An uncancelled blur closes after the window elapses.
        widget.handle_event(&header_click(&widget), t);
        widget.handle_event(&SelectEvent::FocusOut, t);
        assert!(widget.tick(t + BLUR_DEBOUNCE));
        assert_eq!(widget.state().phase(), SelectionPhase::ClosedUnfocused);
    }

    #[test]
    fn test_host_disable_closes_and_mirrors() {
        let mut widget = fruit_box();
        let t = now();
        widget.handle_event(&header_click(&widget), t);

        widget.handle_event(&SelectEvent::Host(HostMutation::DisabledChanged(true)), t);
        assert!(widget.is_disabled());
        assert!(!widget.state().phase().is_open());

        // A disabled widget swallows clicks without opening.
        widget.handle_event(&header_click(&widget), t);
        assert!(!widget.state().phase().is_open());

        widget.handle_event(&SelectEvent::Host(HostMutation::DisabledChanged(false)), t);
        widget.handle_event(&header_click(&widget), t);
        assert!(widget.state().phase().is_open());
    }

    #[test]
    fn test_programmatic_select() {
        let mut widget = fruit_box();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        widget.changed().connect(move |change: &SelectionChange| {
            sink.lock().push(change.value.clone());
        });

        widget.select("apple").unwrap();
        assert_eq!(widget.value(), "apple");

        assert!(matches!(
            widget.select("banana"),
            Err(SelectError::InvalidSelection { .. })
        ));
        assert!(matches!(
            widget.select("missing"),
            Err(SelectError::InvalidSelection { .. })
        ));
        assert_eq!(widget.value(), "apple");

        widget.set_disabled(true);
        assert!(widget.select("cherry").is_err());

        assert_eq!(seen.lock().as_slice(), &["apple".to_owned()]);
    }

    #[test]
    fn test_programmatic_open_and_close() {
        let mut widget = fruit_box();

        widget.open().unwrap();
        assert!(widget.state().phase().is_open());
        // Re-opening is a no-op.
        widget.open().unwrap();
        assert!(widget.state().phase().is_open());

        widget.close();
        assert_eq!(widget.state().phase(), SelectionPhase::ClosedFocused);

        let mut inert = SelectBox::new(
            vec![OptionDescriptor::new("a").with_text("A").disabled(true)],
            SelectConfig::default(),
        )
        .unwrap();
        assert_eq!(inert.open(), Err(SelectError::NoEnabledOptions));
    }

    #[test]
    fn test_display_only_when_all_disabled() {
        let mut widget = SelectBox::new(
            vec![
                OptionDescriptor::new("a").with_text("A").disabled(true),
                OptionDescriptor::new("b").with_text("B").disabled(true),
            ],
            SelectConfig::default(),
        )
        .unwrap();
        let t = now();

        widget.handle_event(&header_click(&widget), t);
        assert!(!widget.state().phase().is_open());

        widget.handle_event(&SelectEvent::FocusIn, t);
        let outcome = widget.handle_event(&key(Key::Enter), t);
        assert!(outcome.consumed);
        assert!(!widget.state().phase().is_open());
    }

    #[test]
    fn test_dispatch_closes_siblings() {
        let mut first = fruit_box();
        let mut second = fruit_box();
        let t = now();

        first.handle_event(&header_click(&first), t);
        assert!(first.state().phase().is_open());

        // Opening the second widget through the page dispatcher closes the
        // first.
        let pointer = PointerEvent::click(PointerTarget::Widget {
            id: second.id(),
            part: WidgetPart::Header,
        });
        let outcome = dispatch_pointer(&mut [&mut first, &mut second], &pointer, t);

        assert!(outcome.consumed);
        assert!(!first.state().phase().is_open());
        assert_eq!(first.state().phase(), SelectionPhase::ClosedUnfocused);
        assert!(second.state().phase().is_open());
    }

    #[test]
    fn test_projection_reflects_committed_state() {
        let mut widget = fruit_box();
        let t = now();
        widget.handle_event(&header_click(&widget), t);
        widget.handle_event(&item_click(&widget, 0), t);

        let tree = widget.project(&TreeRenderer);
        let RenderNode::Container { name, open, children, .. } = &tree else {
            panic!("expected container root");
        };
        assert_eq!(name, "fruit");
        assert!(!*open);
        assert!(matches!(
            &children[0],
            RenderNode::HiddenInput { value, .. } if value == "apple"
        ));
    }
}
