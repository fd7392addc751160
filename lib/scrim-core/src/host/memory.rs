use crate::host::{
    HostDocument, HostError, HostResult, Node, NodeId, ResizeCallback, SubscriptionId, Viewport,
};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;
use std::sync::Mutex;

/// A functional in-memory host document. Backs the test suites and the demo
/// driver; embedders with a real document tree implement [`HostDocument`]
/// themselves.
pub struct MemoryDocument {
    inner: Mutex<Inner>,
}

struct Inner {
    styles: IndexMap<String, String>,
    body: Vec<NodeId>,
    nodes: HashMap<NodeId, StoredNode>,
    overflow: String,
    viewport: Viewport,
    user_agent: String,
    next_node: NodeId,
    next_subscription: SubscriptionId,
    listeners: IndexMap<SubscriptionId, ResizeCallback>,
    // Subscriptions cancelled while their callback batch was in flight.
    dead: HashSet<SubscriptionId>,
}

struct StoredNode {
    class: String,
    text: Option<String>,
    children: Vec<NodeId>,
    styles: HashMap<String, String>,
}

impl Inner {
    fn store(&mut self, node: Node) -> NodeId {
        let id = self.next_node;
        self.next_node += 1;
        let children = node
            .children
            .into_iter()
            .map(|child| self.store(child))
            .collect();
        self.nodes.insert(
            id,
            StoredNode {
                class: node.class,
                text: node.text,
                children,
                styles: HashMap::new(),
            },
        );
        id
    }

    fn remove(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            for child in node.children {
                self.remove(child);
            }
        }
    }

    fn find(&self, id: NodeId, class: &str) -> Option<NodeId> {
        let node = self.nodes.get(&id)?;
        if node.class == class {
            return Some(id);
        }
        node.children
            .iter()
            .find_map(|child| self.find(*child, class))
    }

    fn render(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        let _ = write!(out, "{}{}", "  ".repeat(depth), node.class);
        if let Some(text) = &node.text {
            let _ = write!(out, " \"{text}\"");
        }
        if !node.styles.is_empty() {
            let mut styles: Vec<_> = node
                .styles
                .iter()
                .map(|(property, value)| format!("{property}: {value}"))
                .collect();
            styles.sort();
            let _ = write!(out, " [{}]", styles.join("; "));
        }
        out.push('\n');
        for child in &node.children {
            self.render(*child, depth + 1, out);
        }
    }
}

impl MemoryDocument {
    pub fn new(viewport: Viewport, user_agent: &str) -> Self {
        Self {
            inner: Mutex::new(Inner {
                styles: IndexMap::new(),
                body: Vec::new(),
                nodes: HashMap::new(),
                overflow: "visible".to_owned(),
                viewport,
                user_agent: user_agent.to_owned(),
                next_node: 1,
                next_subscription: 1,
                listeners: IndexMap::new(),
                dead: HashSet::new(),
            }),
        }
    }

    /// Changes the viewport and notifies resize subscribers. Callbacks run
    /// without the document lock held, so they may call back into the
    /// document freely.
    pub fn resize(&self, viewport: Viewport) {
        let mut batch = {
            let mut inner = self.inner.lock().unwrap();
            inner.viewport = viewport.clone();
            std::mem::take(&mut inner.listeners)
        };
        for callback in batch.values_mut() {
            callback(viewport.clone());
        }
        let mut inner = self.inner.lock().unwrap();
        for (id, callback) in batch {
            if !inner.dead.remove(&id) {
                inner.listeners.entry(id).or_insert(callback);
            }
        }
        inner.dead.clear();
    }

    pub fn style_count(&self, marker: &str) -> usize {
        let inner = self.inner.lock().unwrap();
        usize::from(inner.styles.contains_key(marker))
    }

    pub fn mounted_roots(&self) -> usize {
        self.inner.lock().unwrap().body.len()
    }

    pub fn is_mounted(&self, id: NodeId) -> bool {
        self.inner.lock().unwrap().nodes.contains_key(&id)
    }

    /// Searches every mounted subtree for a class name.
    pub fn find_class(&self, class: &str) -> Option<NodeId> {
        let inner = self.inner.lock().unwrap();
        inner.body.iter().find_map(|root| inner.find(*root, class))
    }

    pub fn inline_style(&self, id: NodeId, property: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.nodes.get(&id)?.styles.get(property).cloned()
    }

    /// Renders the body as an indented text tree, one node per line.
    pub fn snapshot(&self) -> String {
        let inner = self.inner.lock().unwrap();
        let mut out = format!(
            "body overflow={} viewport={}x{}\n",
            inner.overflow, inner.viewport.width, inner.viewport.height
        );
        for root in &inner.body {
            inner.render(*root, 1, &mut out);
        }
        out
    }
}

impl HostDocument for MemoryDocument {
    fn ensure_style(&self, marker: &str, css: &str) {
        let mut inner = self.inner.lock().unwrap();
        if !inner.styles.contains_key(marker) {
            inner.styles.insert(marker.to_owned(), css.to_owned());
        }
    }

    fn mount(&self, node: Node) -> HostResult<NodeId> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.store(node);
        inner.body.push(id);
        Ok(id)
    }

    fn unmount(&self, id: NodeId) -> HostResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let Some(index) = inner.body.iter().position(|root| *root == id) else {
            return Err(HostError::UnknownNode(id));
        };
        inner.body.remove(index);
        inner.remove(id);
        Ok(())
    }

    fn node_by_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.inner.lock().unwrap().find(root, class)
    }

    fn set_style(&self, id: NodeId, property: &str, value: &str) -> HostResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let Some(node) = inner.nodes.get_mut(&id) else {
            return Err(HostError::UnknownNode(id));
        };
        node.styles.insert(property.to_owned(), value.to_owned());
        Ok(())
    }

    fn body_overflow(&self) -> String {
        self.inner.lock().unwrap().overflow.clone()
    }

    fn set_body_overflow(&self, value: &str) {
        self.inner.lock().unwrap().overflow = value.to_owned();
    }

    fn viewport(&self) -> Viewport {
        self.inner.lock().unwrap().viewport.clone()
    }

    fn user_agent(&self) -> String {
        self.inner.lock().unwrap().user_agent.clone()
    }

    fn subscribe_resize(&self, callback: ResizeCallback) -> SubscriptionId {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_subscription;
        inner.next_subscription += 1;
        inner.listeners.insert(id, callback);
        id
    }

    fn unsubscribe_resize(&self, id: SubscriptionId) {
        let mut inner = self.inner.lock().unwrap();
        if inner.listeners.shift_remove(&id).is_none() {
            inner.dead.insert(id);
        }
    }
}
