use crate::host::{HostResult, Node, NodeId, SubscriptionId, Viewport};

pub type ResizeCallback = Box<dyn FnMut(Viewport) + Send>;

/// The document tree the overlay engine mutates. Implementations must be
/// callable from the manager thread; all mutation goes through `&self`.
pub trait HostDocument: Send + Sync {
    /// Ensures the presentation rules identified by `marker` exist exactly
    /// once in the document, no matter how often this is called.
    fn ensure_style(&self, marker: &str, css: &str);

    /// Appends a subtree to the document body and returns the root's id.
    /// Ids stay valid until the root is unmounted.
    fn mount(&self, node: Node) -> HostResult<NodeId>;

    /// Removes a mounted subtree. The root id and all descendant ids become
    /// invalid.
    fn unmount(&self, id: NodeId) -> HostResult<()>;

    /// Resolves a descendant of `root` (or `root` itself) by class name.
    fn node_by_class(&self, root: NodeId, class: &str) -> Option<NodeId>;

    /// Writes one inline style property on a mounted node.
    fn set_style(&self, id: NodeId, property: &str, value: &str) -> HostResult<()>;

    /// Current value of the body scroll-overflow property.
    fn body_overflow(&self) -> String;

    fn set_body_overflow(&self, value: &str);

    fn viewport(&self) -> Viewport;

    fn user_agent(&self) -> String;

    /// Registers a callback fired after every viewport change. Callbacks may
    /// unsubscribe themselves or register new subscriptions while running.
    fn subscribe_resize(&self, callback: ResizeCallback) -> SubscriptionId;

    fn unsubscribe_resize(&self, id: SubscriptionId);
}
