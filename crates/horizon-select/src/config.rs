//! Widget configuration.
//!
//! All dimensional values are opaque host units (e.g. `"200px"`, `"100%"`)
//! passed through to the renderer verbatim.

/// Static configuration for one select widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    /// Header text shown while nothing is selected.
    pub placeholder: String,
    /// Number of columns the dropdown lays options out in. Clamped to at
    /// least 1.
    pub columns: u32,
    /// Form field name. When `None` the widget generates one.
    pub name: Option<String>,
    /// Focus order hint for the host.
    pub tabindex: i32,
    /// Whether the whole widget starts disabled.
    pub disabled: bool,
    /// Fixed header width, if any.
    pub width: Option<String>,
    /// Fixed header height, if any.
    pub height: Option<String>,
    /// Fixed dropdown width, if any.
    pub dropdown_width: Option<String>,
    /// Fixed dropdown height, if any.
    pub dropdown_height: Option<String>,
    /// Maximum dropdown rows visible without scrolling.
    pub visible_rows: usize,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select an option".to_owned(),
            columns: 1,
            name: None,
            tabindex: 0,
            disabled: false,
            width: None,
            height: None,
            dropdown_width: None,
            dropdown_height: None,
            visible_rows: 10,
        }
    }
}

impl SelectConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the dropdown column count.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Set the form field name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the focus order hint.
    pub fn with_tabindex(mut self, tabindex: i32) -> Self {
        self.tabindex = tabindex;
        self
    }

    /// Start the widget disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Fix the header width.
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Fix the header height.
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Fix the dropdown width.
    pub fn with_dropdown_width(mut self, width: impl Into<String>) -> Self {
        self.dropdown_width = Some(width.into());
        self
    }

    /// Fix the dropdown height.
    pub fn with_dropdown_height(mut self, height: impl Into<String>) -> Self {
        self.dropdown_height = Some(height.into());
        self
    }

    /// Set the maximum visible dropdown rows.
    pub fn with_visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = rows;
        self
    }

    /// The column count with the minimum clamp applied.
    pub fn effective_columns(&self) -> u32 {
        self.columns.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SelectConfig::default();
        assert_eq!(config.placeholder, "Select an option");
        assert_eq!(config.columns, 1);
        assert_eq!(config.visible_rows, 10);
        assert_eq!(config.tabindex, 0);
        assert!(!config.disabled);
        assert!(config.name.is_none());
    }

    #[test]
    fn test_columns_clamped_to_one() {
        let config = SelectConfig::new().with_columns(0);
        assert_eq!(config.effective_columns(), 1);

        let config = SelectConfig::new().with_columns(3);
        assert_eq!(config.effective_columns(), 3);
    }

    #[test]
    fn test_builders() {
        let config = SelectConfig::new()
            .with_placeholder("Pick a fruit")
            .with_name("fruit")
            .with_width("200px")
            .with_visible_rows(5);

        assert_eq!(config.placeholder, "Pick a fruit");
        assert_eq!(config.name.as_deref(), Some("fruit"));
        assert_eq!(config.width.as_deref(), Some("200px"));
        assert_eq!(config.visible_rows, 5);
    }
}
