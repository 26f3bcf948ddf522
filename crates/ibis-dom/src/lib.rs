//! Document tree implementation for the ibis parser.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, providing O(1) access and traversal without borrow checker
//! issues. The document node always sits at index 0 and owns the whole tree;
//! a node's `parent` field is a back-reference only, while the parent's
//! `children` list is the sole ownership relation. Construction is
//! append-only: nodes are attached once, in document order, and never moved
//! or deleted afterwards.

mod attributes;

pub use attributes::Attributes;

/// A type-safe index into the document tree.
///
/// Provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The document node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// A single node in the document tree.
///
/// Stores indices for parent/child/sibling relationships, enabling O(1)
/// traversal in any direction.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is, with its payload.
    pub kind: NodeKind,

    /// Back-reference to the parent. `None` only for the document node.
    /// Set when the node is attached and never changed afterwards.
    pub parent: Option<NodeId>,

    /// Child nodes in document order (the order they were attached).
    pub children: Vec<NodeId>,

    /// The node immediately following this one in the parent's children.
    pub next_sibling: Option<NodeId>,

    /// The node immediately preceding this one in the parent's children.
    pub prev_sibling: Option<NodeId>,
}

/// The kind of a node, with its payload.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The document node at the root of every tree.
    Document,
    /// An element with a tag name and attributes.
    Element(ElementData),
    /// A run of character data (plain text or a CDATA section).
    Text(String),
    /// A comment.
    Comment(String),
}

impl NodeKind {
    /// The node's name: the element's tag name, or one of the synthetic
    /// names `#DOCUMENT`, `#TEXT`, `#COMMENT`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Document => "#DOCUMENT",
            Self::Element(data) => &data.tag_name,
            Self::Text(_) => "#TEXT",
            Self::Comment(_) => "#COMMENT",
        }
    }
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    /// The element's tag name (stored lower-cased by the tree builder).
    pub tag_name: String,
    /// The element's attributes, in document order.
    pub attrs: Attributes,
}

impl ElementData {
    /// Look up an attribute value on this element.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }
}

/// Arena-based document tree with O(1) node access and traversal.
///
/// All nodes live in a contiguous vector, using indices for relationships:
/// - O(1) access to any node by [`NodeId`]
/// - O(1) parent/sibling traversal
/// - No borrowing issues (indices instead of references)
#[derive(Debug, Clone)]
pub struct DocumentTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The document node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DocumentTree {
    /// Create a new tree holding just the document node.
    #[must_use]
    pub fn new() -> Self {
        let document = Node {
            kind: NodeKind::Document,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        };
        DocumentTree {
            nodes: vec![document],
        }
    }

    /// Get the document node's ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (it always holds at least the document).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// Append `child` as the last child of `parent`, updating parent,
    /// children, and sibling links.
    ///
    /// # Panics
    ///
    /// Panics if either ID is out of bounds, which indicates the caller
    /// mixed IDs from a different tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_last_child = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node, in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Get comment content if this node is a comment node.
    #[must_use]
    pub fn as_comment(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Comment(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DocumentTree,
    current: Option<NodeId>,
}

impl<'a> Iterator for AncestorIterator<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Print an indented dump of the tree rooted at `id` to stdout.
///
/// Text payloads are shown with visible whitespace (`\n` escaped, spaces as
/// middle dots) so stray formatting nodes stand out.
pub fn print_tree(tree: &DocumentTree, id: NodeId, indent: usize) {
    let prefix = "  ".repeat(indent);
    if let Some(node) = tree.get(id) {
        match &node.kind {
            NodeKind::Document => {
                println!("{prefix}Document");
            }
            NodeKind::Element(data) => {
                if data.attrs.is_empty() {
                    println!("{prefix}<{}>", data.tag_name);
                } else {
                    let attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| {
                            if v.is_empty() {
                                k.to_string()
                            } else {
                                format!("{k}=\"{v}\"")
                            }
                        })
                        .collect();
                    println!("{prefix}<{} {}>", data.tag_name, attrs.join(" "));
                }
            }
            NodeKind::Text(data) => {
                let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
                println!("{prefix}\"{display}\"");
            }
            NodeKind::Comment(data) => {
                println!("{prefix}<!-- {data} -->");
            }
        }
        for &child_id in tree.children(id) {
            print_tree(tree, child_id, indent + 1);
        }
    }
}
