//! Renderer contract.
//!
//! The widget never touches a display surface. Instead it projects its
//! entire observable state into a [`RenderNode`] tree and hands that to a
//! [`Renderer`]. The projection is a pure function of catalog, state, and
//! configuration, so projecting twice without an intervening event yields
//! an equal tree and hosts may diff instead of rebuilding.

use crate::catalog::OptionCatalog;
use crate::config::SelectConfig;
use crate::option::{OptionContent, SelectOption};
use crate::state::WidgetState;

/// One node of the projected widget tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    /// The widget root.
    Container {
        /// Form field name.
        name: String,
        /// Whether the dropdown is open.
        open: bool,
        /// Whether the whole widget is disabled.
        disabled: bool,
        /// Focus order hint.
        tabindex: i32,
        /// Fixed header width.
        width: Option<String>,
        /// Fixed header height.
        height: Option<String>,
        /// Header, hidden input, and (while open) the item list.
        children: Vec<RenderNode>,
    },
    /// The form-submitted mirror of the selection.
    HiddenInput {
        /// Form field name.
        name: String,
        /// Current submit value, `""` when nothing is selected.
        value: String,
        /// Whether the field is excluded from submission.
        disabled: bool,
    },
    /// The always-visible header echoing the selection.
    Header {
        /// Whether the placeholder is shown instead of option content.
        placeholder_shown: bool,
        /// Echoed content.
        children: Vec<RenderNode>,
    },
    /// The dropdown surface.
    ItemList {
        /// Column count.
        columns: u32,
        /// First visible row.
        first_row: usize,
        /// Rows visible at once.
        visible_rows: usize,
        /// Fixed dropdown width.
        width: Option<String>,
        /// Fixed dropdown height.
        height: Option<String>,
        /// One item per option, in catalog order.
        children: Vec<RenderNode>,
    },
    /// One selectable item.
    Item {
        /// Catalog index.
        index: usize,
        /// Submit value.
        value: String,
        /// Whether this option is selected.
        selected: bool,
        /// Whether this option carries the keyboard highlight.
        highlighted: bool,
        /// Whether this option is disabled.
        disabled: bool,
        /// Option content.
        children: Vec<RenderNode>,
    },
    /// Plain text.
    Text(String),
    /// Opaque markup, rendered verbatim.
    Markup(String),
    /// An image.
    Image {
        /// Source locator.
        src: String,
        /// Fixed width.
        width: Option<String>,
        /// Fixed height.
        height: Option<String>,
    },
}

/// Consumes projected widget trees and produces host output.
pub trait Renderer {
    /// What the renderer produces, e.g. a DOM patch or an HTML string.
    type Output;

    /// Project the widget into host output.
    fn project(
        &self,
        catalog: &OptionCatalog,
        state: &WidgetState,
        config: &SelectConfig,
    ) -> Self::Output;
}

/// The default renderer: projects into a plain [`RenderNode`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer;

impl TreeRenderer {
    fn content_nodes(option: &SelectOption) -> Vec<RenderNode> {
        match option.content() {
            OptionContent::Markup(markup) => vec![RenderNode::Markup(markup.clone())],
            content => {
                let mut nodes = Vec::new();
                if let Some(image) = option.image() {
                    nodes.push(RenderNode::Image {
                        src: image.src.clone(),
                        width: image.width.clone(),
                        height: image.height.clone(),
                    });
                }
                if let Some(text) = content.plain_text() {
                    nodes.push(RenderNode::Text(text.to_owned()));
                }
                nodes
            }
        }
    }

    fn header(catalog: &OptionCatalog, config: &SelectConfig) -> RenderNode {
        match catalog.selected_option() {
            Some(option) => RenderNode::Header {
                placeholder_shown: false,
                children: Self::content_nodes(option),
            },
            None => RenderNode::Header {
                placeholder_shown: true,
                children: vec![RenderNode::Text(config.placeholder.clone())],
            },
        }
    }

    fn item_list(
        catalog: &OptionCatalog,
        state: &WidgetState,
        config: &SelectConfig,
    ) -> RenderNode {
        let items = catalog
            .iter()
            .enumerate()
            .map(|(index, option)| RenderNode::Item {
                index,
                value: option.value().to_owned(),
                selected: option.is_selected(),
                highlighted: state.highlighted() == Some(index),
                disabled: option.is_disabled(),
                children: Self::content_nodes(option),
            })
            .collect();

        RenderNode::ItemList {
            columns: config.effective_columns(),
            first_row: state.viewport().first_row,
            visible_rows: state.viewport().visible_rows,
            width: config.dropdown_width.clone(),
            height: config.dropdown_height.clone(),
            children: items,
        }
    }

    /// Project with an explicit form name (the widget supplies its resolved
    /// name, which may be generated).
    pub fn project_named(
        &self,
        name: &str,
        catalog: &OptionCatalog,
        state: &WidgetState,
        config: &SelectConfig,
    ) -> RenderNode {
        let mut children = vec![
            RenderNode::HiddenInput {
                name: name.to_owned(),
                value: catalog.selected_value().to_owned(),
                disabled: state.is_disabled(),
            },
            Self::header(catalog, config),
        ];
        if state.phase().is_open() {
            children.push(Self::item_list(catalog, state, config));
        }

        RenderNode::Container {
            name: name.to_owned(),
            open: state.phase().is_open(),
            disabled: state.is_disabled(),
            tabindex: config.tabindex,
            width: config.width.clone(),
            height: config.height.clone(),
            children,
        }
    }
}

impl Renderer for TreeRenderer {
    type Output = RenderNode;

    fn project(
        &self,
        catalog: &OptionCatalog,
        state: &WidgetState,
        config: &SelectConfig,
    ) -> Self::Output {
        let name = config.name.as_deref().unwrap_or("");
        self.project_named(name, catalog, state, config)
    }
}
