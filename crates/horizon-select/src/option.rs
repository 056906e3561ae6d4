//! Option content model.
//!
//! A select option carries a stable `value` (what the form submits) plus
//! display content. Content is either plain text, opaque rich markup, or an
//! optional image paired with text. Plain text is what keyboard type-ahead
//! and the header echo use; markup is passed through to the renderer
//! untouched and contributes no searchable text.

/// Display content of a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionContent {
    /// Plain label text.
    Text(String),
    /// Opaque rich markup, rendered verbatim by the host. Markup options
    /// have no extractable label text.
    Markup(String),
    /// No content at all.
    Empty,
}

impl OptionContent {
    /// The plain label text, if this content has one.
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            OptionContent::Text(text) => Some(text),
            OptionContent::Markup(_) | OptionContent::Empty => None,
        }
    }

    /// Whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        matches!(self, OptionContent::Empty)
    }
}

/// An image attached to an option, with optional sizing hints.
///
/// Width and height are host units passed through verbatim, e.g. `"24px"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionImage {
    /// Image source locator.
    pub src: String,
    /// Fixed width, if any.
    pub width: Option<String>,
    /// Fixed height, if any.
    pub height: Option<String>,
}

impl OptionImage {
    /// Create an image with no sizing hints.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            width: None,
            height: None,
        }
    }

    /// Set a fixed width.
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set a fixed height.
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Whether both dimensions are pinned.
    pub fn has_fixed_size(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }
}

/// A single option in the catalog.
///
/// Options are owned by the [`OptionCatalog`](crate::OptionCatalog); hosts
/// describe them up front with [`OptionDescriptor`] and read them back
/// through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub(crate) value: String,
    pub(crate) content: OptionContent,
    pub(crate) image: Option<OptionImage>,
    pub(crate) selected: bool,
    pub(crate) disabled: bool,
}

impl SelectOption {
    /// The submit value of this option.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The display content.
    pub fn content(&self) -> &OptionContent {
        &self.content
    }

    /// The attached image, if any.
    pub fn image(&self) -> Option<&OptionImage> {
        self.image.as_ref()
    }

    /// Whether this option is currently selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether this option is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The plain label text, if this option has one. Markup and empty
    /// options return `None`.
    pub fn label_text(&self) -> Option<&str> {
        self.content.plain_text()
    }
}

/// Builder-style description of one option, consumed by
/// [`OptionCatalog::from_descriptors`](crate::OptionCatalog::from_descriptors).
#[derive(Debug, Clone)]
pub struct OptionDescriptor {
    pub(crate) value: String,
    pub(crate) content: OptionContent,
    pub(crate) image: Option<OptionImage>,
    pub(crate) selected: bool,
    pub(crate) disabled: bool,
}

impl OptionDescriptor {
    /// Describe an option with the given submit value and no content.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            content: OptionContent::Empty,
            image: None,
            selected: false,
            disabled: false,
        }
    }

    /// Use plain label text as the content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = OptionContent::Text(text.into());
        self
    }

    /// Use opaque markup as the content.
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.content = OptionContent::Markup(markup.into());
        self
    }

    /// Attach an image.
    pub fn with_image(mut self, image: OptionImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Mark this option as initially selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Mark this option as disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub(crate) fn into_option(self) -> SelectOption {
        SelectOption {
            value: self.value,
            content: self.content,
            image: self.image,
            selected: self.selected,
            disabled: self.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builders() {
        let opt = OptionDescriptor::new("apple")
            .with_text("Apple")
            .selected(true)
            .into_option();

        assert_eq!(opt.value(), "apple");
        assert_eq!(opt.label_text(), Some("Apple"));
        assert!(opt.is_selected());
        assert!(!opt.is_disabled());
    }

    #[test]
    fn test_markup_has_no_label_text() {
        let opt = OptionDescriptor::new("fancy")
            .with_markup("<b>Fancy</b>")
            .into_option();

        assert_eq!(opt.label_text(), None);
        assert!(!opt.content().is_empty());
    }

    #[test]
    fn test_image_sizing() {
        let img = OptionImage::new("flags/fr.png").with_width("24px");
        assert!(!img.has_fixed_size());

        let img = img.with_height("16px");
        assert!(img.has_fixed_size());
    }
}
