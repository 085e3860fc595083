use std::fmt;

/// Unique identifier for a widget type, used to associate widgets with their
/// theme styling.
///
/// An id is a `(namespace, id)` pair; the namespace is conventionally the
/// crate that defines the widget, so third-party widgets cannot collide with
/// built-in ones.
///
/// ```
/// use tabflow_theme::id::WidgetId;
///
/// let id = WidgetId::new("tabflow-widgets", "Tabs");
/// assert_eq!(id.namespace(), "tabflow-widgets");
/// assert_eq!(id.id(), "Tabs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id from a namespace and a widget type name.
    pub fn new(namespace: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            id: id.into(),
        }
    }

    /// The namespace of this widget id.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The widget type name of this widget id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
