//! Option catalog: the widget-owned list of options and the selection mark.
//!
//! The catalog is the single source of truth for option order, enabledness,
//! and which option is selected. At most one option is selected at any time;
//! [`select`](OptionCatalog::select) re-marks the whole list atomically so a
//! failed selection leaves the previous mark untouched.

use crate::error::{ConstructError, SelectError};
use crate::option::{OptionDescriptor, SelectOption};

/// Scan direction for enabled-option searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices.
    Forward,
    /// Towards lower indices.
    Backward,
}

impl Direction {
    /// The per-step index delta.
    pub fn delta(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Ordered, widget-owned collection of options.
#[derive(Debug, Clone)]
pub struct OptionCatalog {
    options: Vec<SelectOption>,
}

impl OptionCatalog {
    /// Build a catalog from host-supplied descriptors.
    ///
    /// Fails if the list is empty, if two descriptors share a value, or if
    /// more than one descriptor is marked selected. A disabled descriptor
    /// may still be the pre-selected one; it only becomes unreachable for
    /// future selection.
    pub fn from_descriptors(
        descriptors: Vec<OptionDescriptor>,
    ) -> Result<Self, ConstructError> {
        if descriptors.is_empty() {
            return Err(ConstructError::EmptyData);
        }

        let mut selected_value: Option<&str> = None;
        for (i, desc) in descriptors.iter().enumerate() {
            if descriptors[..i].iter().any(|d| d.value == desc.value) {
                return Err(ConstructError::DuplicateValue {
                    value: desc.value.clone(),
                });
            }
            if desc.selected {
                if let Some(first) = selected_value {
                    return Err(ConstructError::MultipleSelected {
                        first: first.to_owned(),
                        second: desc.value.clone(),
                    });
                }
                selected_value = Some(&desc.value);
            }
        }

        Ok(Self {
            options: descriptors
                .into_iter()
                .map(OptionDescriptor::into_option)
                .collect(),
        })
    }

    /// Select the option with the given value.
    ///
    /// Returns the index of the newly selected option. Unknown values and
    /// disabled options are rejected with [`SelectError::InvalidSelection`],
    /// leaving the current selection unchanged.
    pub fn select(&mut self, value: &str) -> Result<usize, SelectError> {
        let index = self
            .options
            .iter()
            .position(|opt| opt.value == value && !opt.disabled)
            .ok_or_else(|| SelectError::InvalidSelection {
                value: value.to_owned(),
            })?;

        for (i, opt) in self.options.iter_mut().enumerate() {
            opt.selected = i == index;
        }
        Ok(index)
    }

    /// Index of the selected option, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(|opt| opt.selected)
    }

    /// The selected option, if any.
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected_index().map(|i| &self.options[i])
    }

    /// The submit value of the selected option, or `""` when nothing is
    /// selected. The empty string is the form-level "no selection" sentinel.
    pub fn selected_value(&self) -> &str {
        self.selected_option().map_or("", |opt| opt.value())
    }

    /// Index of the option with the given value.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|opt| opt.value == value)
    }

    /// The option at `index`.
    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// The label text of the option with the given value.
    ///
    /// Unknown values report [`SelectError::InvalidSelection`]; options
    /// whose content carries no extractable text (markup or empty) report
    /// [`SelectError::MissingLabel`].
    pub fn label_of(&self, value: &str) -> Result<&str, SelectError> {
        let option = self
            .index_of(value)
            .map(|i| &self.options[i])
            .ok_or_else(|| SelectError::InvalidSelection {
                value: value.to_owned(),
            })?;
        option.label_text().ok_or_else(|| SelectError::MissingLabel {
            value: value.to_owned(),
        })
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the catalog has no options. Construction rejects empty
    /// catalogs, so this is false for any catalog a widget holds.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over the options in order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    /// Whether at least one option is enabled.
    pub fn has_enabled(&self) -> bool {
        self.options.iter().any(|opt| !opt.disabled)
    }

    /// Index of the first enabled option.
    pub fn first_enabled(&self) -> Option<usize> {
        self.options.iter().position(|opt| !opt.disabled)
    }

    /// Find the next enabled option from `from` in `direction`.
    ///
    /// With `wrap`, the scan runs cyclically and gives up after one full
    /// revolution. Without it, the scan stops at the list boundary. A `from`
    /// of `None` starts just outside the list on the appropriate end, so
    /// the first probe is index 0 (forward) or `len - 1` (backward).
    /// Returns `None` when no enabled option is reachable; reaching `from`
    /// again also ends the scan.
    pub fn next_enabled(
        &self,
        from: Option<usize>,
        direction: Direction,
        wrap: bool,
    ) -> Option<usize> {
        let len = self.options.len() as i64;
        let step = direction.delta();
        let start = match from {
            Some(i) => i as i64,
            None => match direction {
                Direction::Forward => -1,
                Direction::Backward => len,
            },
        };

        let mut idx = start;
        for _ in 0..len {
            idx += step;
            if idx < 0 || idx >= len {
                if !wrap {
                    return None;
                }
                idx = idx.rem_euclid(len);
            }
            if Some(idx as usize) == from {
                return None;
            }
            if !self.options[idx as usize].disabled {
                return Some(idx as usize);
            }
        }
        None
    }
}
