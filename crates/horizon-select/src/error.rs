//! Error types for select widget construction and operation.

use thiserror::Error;

/// Errors raised while building a widget from its option descriptors.
///
/// Construction errors are unrecoverable: a widget with no options, or with
/// a catalog the host described inconsistently, has no sensible degraded
/// form, so [`SelectBox::new`](crate::SelectBox::new) refuses to produce one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    /// The descriptor list was empty.
    #[error("cannot construct a select widget with no options")]
    EmptyData,

    /// Two options carried the same value.
    #[error("duplicate option value: {value:?}")]
    DuplicateValue {
        /// The value that appeared more than once.
        value: String,
    },

    /// More than one option was marked as initially selected.
    #[error("multiple options marked selected: {first:?} and {second:?}")]
    MultipleSelected {
        /// The value of the first pre-selected option.
        first: String,
        /// The value of the conflicting second pre-selected option.
        second: String,
    },
}

/// Errors raised by operations on a live widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The requested value does not name a selectable option. Unknown values
    /// and disabled options both land here.
    #[error("no selectable option with value {value:?}")]
    InvalidSelection {
        /// The rejected value.
        value: String,
    },

    /// An option has no extractable label text.
    #[error("option {value:?} has no label text")]
    MissingLabel {
        /// The value of the label-less option.
        value: String,
    },

    /// Every option in the catalog is disabled.
    #[error("all options are disabled")]
    NoEnabledOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConstructError::DuplicateValue {
                value: "apple".into()
            }
            .to_string(),
            "duplicate option value: \"apple\""
        );
        assert_eq!(
            SelectError::InvalidSelection {
                value: "kiwi".into()
            }
            .to_string(),
            "no selectable option with value \"kiwi\""
        );
        assert_eq!(
            SelectError::NoEnabledOptions.to_string(),
            "all options are disabled"
        );
    }
}
