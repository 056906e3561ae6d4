//! Widget instance registry.
//!
//! Every live select widget registers itself here under a [`WidgetId`]. The
//! registry backs two host-facing needs:
//!
//! - Resolving pointer targets: the host reports which widget (if any) a
//!   click landed in by ID, and each widget compares that ID against its own.
//! - Document-level dispatch: a single page-wide pointer listener walks the
//!   registered instances instead of installing one listener per widget.
//!
//! IDs are slotmap keys, so a slot freed by a dropped widget and later
//! reused by a new one yields a different generation. A stale `WidgetId`
//! never aliases a new widget.

use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Unique identifier for a registered widget instance.
    pub struct WidgetId;
}

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The widget ID does not refer to a live instance.
    InvalidWidgetId,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::InvalidWidgetId => write!(f, "invalid widget ID"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Per-instance data held by the registry.
#[derive(Debug, Clone)]
struct InstanceData {
    /// The widget's form name, e.g. `"fruit"` or a generated `"select-3"`.
    name: String,
}

/// Arena of live widget instances.
///
/// The registry does not own widgets; it records their existence and form
/// names so hosts can translate between IDs and names.
#[derive(Default)]
pub struct InstanceRegistry {
    widgets: SlotMap<WidgetId, InstanceData>,
}

impl InstanceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget instance, returning its ID.
    pub fn register(&mut self, name: impl Into<String>) -> WidgetId {
        let name = name.into();
        let id = self.widgets.insert(InstanceData { name: name.clone() });
        tracing::trace!(
            target: "horizon_select_core::registry",
            ?id,
            name = %name,
            "registered widget instance"
        );
        id
    }

    /// Remove a widget instance.
    pub fn unregister(&mut self, id: WidgetId) -> RegistryResult<()> {
        match self.widgets.remove(id) {
            Some(data) => {
                tracing::trace!(
                    target: "horizon_select_core::registry",
                    ?id,
                    name = %data.name,
                    "unregistered widget instance"
                );
                Ok(())
            }
            None => Err(RegistryError::InvalidWidgetId),
        }
    }

    /// Whether `id` refers to a live instance.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// The form name of a live instance.
    pub fn name(&self, id: WidgetId) -> RegistryResult<&str> {
        self.widgets
            .get(id)
            .map(|data| data.name.as_str())
            .ok_or(RegistryError::InvalidWidgetId)
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the registry has no live instances.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Iterate over the IDs of all live instances.
    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.widgets.keys()
    }
}

/// Thread-safe shared registry handle.
pub struct SharedInstanceRegistry {
    inner: RwLock<InstanceRegistry>,
}

impl SharedInstanceRegistry {
    fn new() -> Self {
        Self {
            inner: RwLock::new(InstanceRegistry::new()),
        }
    }

    /// Register a widget instance, returning its ID.
    pub fn register(&self, name: impl Into<String>) -> WidgetId {
        self.inner.write().register(name)
    }

    /// Remove a widget instance.
    pub fn unregister(&self, id: WidgetId) -> RegistryResult<()> {
        self.inner.write().unregister(id)
    }

    /// Whether `id` refers to a live instance.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.inner.read().contains(id)
    }

    /// The form name of a live instance.
    pub fn name(&self, id: WidgetId) -> RegistryResult<String> {
        self.inner.read().name(id).map(str::to_owned)
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the registry has no live instances.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Snapshot of the IDs of all live instances.
    pub fn ids(&self) -> Vec<WidgetId> {
        self.inner.read().ids().collect()
    }
}

static REGISTRY: OnceLock<SharedInstanceRegistry> = OnceLock::new();

/// The process-wide instance registry.
pub fn instance_registry() -> &'static SharedInstanceRegistry {
    REGISTRY.get_or_init(SharedInstanceRegistry::new)
}
