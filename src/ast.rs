//! The abbreviation tree: the typed result of parsing the compact node
//! notation, prior to serialization.

use serde::{Deserialize, Serialize};

/// One element of the abbreviation tree.
///
/// A node with no explicit class carries an empty `class_name` rather than an
/// option, so the renderer can test emptiness instead of unwrapping.
/// `repeat_count == 0` is valid and means the node (and everything under it)
/// is suppressed entirely on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub label: String,
    pub class_name: String,
    pub id: Option<String>,
    pub repeat_count: u32,
    pub children: Vec<Node>,
}

impl Node {
    /// A bare node: no class, no id, repeat count 1, no children.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            class_name: String::new(),
            id: None,
            repeat_count: 1,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_count(mut self, repeat_count: u32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}
