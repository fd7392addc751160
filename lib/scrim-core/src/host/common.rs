use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type NodeId = u64;
pub type SubscriptionId = u64;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no mounted node with id {0}")]
    UnknownNode(NodeId),
    #[error("{0}")]
    Error(String),
}

impl From<&str> for HostError {
    fn from(error: &str) -> Self {
        HostError::Error(error.to_owned())
    }
}

impl From<String> for HostError {
    fn from(error: String) -> Self {
        HostError::Error(error)
    }
}

pub type HostResult<T> = Result<T, HostError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A subtree description handed to the host for mounting. The host assigns
/// ids to every node in the subtree; class names are the only addressing
/// scheme the engine relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub class: String,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(class: &str) -> Self {
        Self {
            class: class.to_owned(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(class: &str, text: &str) -> Self {
        Self {
            class: class.to_owned(),
            text: Some(text.to_owned()),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}
