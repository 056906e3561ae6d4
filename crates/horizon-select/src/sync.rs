//! Form synchronization bridge.
//!
//! The bridge mirrors the catalog's selection into the hidden form field
//! and raises the `changed` signal towards the host. Every committed
//! selection produces exactly one mirror write and one emission, in that
//! order, so a slot observing the signal always sees the field already
//! updated.

use horizon_select_core::Signal;

use crate::catalog::OptionCatalog;

/// Payload of one selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// The newly selected submit value.
    pub value: String,
    /// Label text of the selected option, or `""` for label-less options.
    pub label: String,
    /// Catalog index of the selected option.
    pub index: usize,
}

/// Keeps the hidden form field and the host in step with the selection.
pub struct SyncBridge {
    hidden_value: String,
    hidden_disabled: bool,
    /// Raised once per committed selection.
    pub changed: Signal<SelectionChange>,
}

impl SyncBridge {
    /// Create a bridge seeded from the catalog's initial selection.
    pub fn new(catalog: &OptionCatalog, disabled: bool) -> Self {
        Self {
            hidden_value: catalog.selected_value().to_owned(),
            hidden_disabled: disabled,
            changed: Signal::new(),
        }
    }

    /// The hidden field's current value.
    pub fn hidden_value(&self) -> &str {
        &self.hidden_value
    }

    /// Whether the hidden field is excluded from form submission.
    pub fn hidden_disabled(&self) -> bool {
        self.hidden_disabled
    }

    /// Mirror the widget's disabled flag onto the hidden field.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.hidden_disabled = disabled;
    }

    /// Record a committed selection: write the mirror, then notify.
    ///
    /// `index` must be the catalog's current selected index.
    pub fn commit(&mut self, catalog: &OptionCatalog, index: usize) {
        let Some(option) = catalog.get(index) else {
            tracing::error!(
                target: "horizon_select::sync",
                index,
                "commit index out of catalog bounds"
            );
            return;
        };
        self.hidden_value = option.value().to_owned();
        self.changed.emit(SelectionChange {
            value: option.value().to_owned(),
            label: option.label_text().unwrap_or("").to_owned(),
            index,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::OptionDescriptor;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn catalog() -> OptionCatalog {
        OptionCatalog::from_descriptors(vec![
            OptionDescriptor::new("apple").with_text("Apple"),
            OptionDescriptor::new("rich").with_markup("<b>Rich</b>"),
        ])
        .unwrap()
    }

    #[test]
    fn test_seeded_from_initial_selection() {
        let catalog = OptionCatalog::from_descriptors(vec![
            OptionDescriptor::new("a").with_text("A").selected(true),
        ])
        .unwrap();
        let bridge = SyncBridge::new(&catalog, false);
        assert_eq!(bridge.hidden_value(), "a");

        let empty_start = SyncBridge::new(&self::catalog(), false);
        assert_eq!(empty_start.hidden_value(), "");
    }

    #[test]
    fn test_commit_writes_mirror_then_notifies_once() {
        let mut catalog = catalog();
        let mut bridge = SyncBridge::new(&catalog, false);

        let seen: Arc<Mutex<Vec<SelectionChange>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        bridge.changed.connect(move |change| {
            sink.lock().push(change.clone());
        });

        let index = catalog.select("apple").unwrap();
        bridge.commit(&catalog, index);

        assert_eq!(bridge.hidden_value(), "apple");
        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            SelectionChange {
                value: "apple".into(),
                label: "Apple".into(),
                index: 0,
            }
        );
    }

    #[test]
    fn test_label_less_option_reports_empty_label() {
        let mut catalog = catalog();
        let mut bridge = SyncBridge::new(&catalog, false);

        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        bridge.changed.connect(move |change| {
            sink.lock().push(change.label.clone());
        });

        let index = catalog.select("rich").unwrap();
        bridge.commit(&catalog, index);

        assert_eq!(seen.lock().as_slice(), &["".to_owned()]);
    }

    #[test]
    fn test_disabled_mirror() {
        let catalog = catalog();
        let mut bridge = SyncBridge::new(&catalog, true);
        assert!(bridge.hidden_disabled());

        bridge.set_disabled(false);
        assert!(!bridge.hidden_disabled());
    }
}
