use ibis_common::warning::warn_once;
use ibis_dom::{Attributes, DocumentTree, ElementData, NodeId, NodeKind};

use crate::error::ParseError;
use crate::handler::Handler;
use crate::tokenizer::Tokenizer;

/// Tags that can never contain children. They are never pushed onto the
/// open-element stack, so content between such a tag and an unrelated close
/// attaches to the enclosing element instead.
pub const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "basefont", "br", "col", "frame", "hr", "img", "input", "isindex", "link",
    "meta", "param",
];

/// Assembles a [`DocumentTree`] from tokenizer events.
///
/// Keeps a stack of currently-open element nodes; the document root is the
/// implicit bottom when the stack is empty. Mismatched closing tags are
/// recovered by cascade: every unbalanced descendant above the matching
/// element is silently closed first. A closing tag that matches nothing at
/// all is the one fatal condition.
pub struct TreeBuilder {
    tree: DocumentTree,
    open_elements: Vec<NodeId>,
}

impl TreeBuilder {
    /// Create a builder with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: DocumentTree::new(),
            open_elements: Vec::new(),
        }
    }

    /// The tree built so far.
    #[must_use]
    pub const fn tree(&self) -> &DocumentTree {
        &self.tree
    }

    /// Consume the builder and return the finished tree.
    #[must_use]
    pub fn into_tree(self) -> DocumentTree {
        self.tree
    }

    /// Where the next node attaches: the innermost open element, or the
    /// document root.
    fn insertion_point(&self) -> NodeId {
        self.open_elements.last().copied().unwrap_or(NodeId::ROOT)
    }

    /// Allocate a node and attach it at the insertion point.
    fn attach(&mut self, kind: NodeKind) -> NodeId {
        let parent = self.insertion_point();
        let id = self.tree.alloc(kind);
        self.tree.append_child(parent, id);
        id
    }
}

impl Handler for TreeBuilder {
    fn open(&mut self, tag: &str, attrs: &Attributes) -> Result<(), ParseError> {
        let tag = tag.to_lowercase();
        let id = self.attach(NodeKind::Element(ElementData {
            tag_name: tag.clone(),
            attrs: attrs.clone(),
        }));
        if !VOID_ELEMENTS.contains(&tag.as_str()) {
            self.open_elements.push(id);
        }
        Ok(())
    }

    fn empty(&mut self, tag: &str, attrs: &Attributes) -> Result<(), ParseError> {
        let _ = self.attach(NodeKind::Element(ElementData {
            tag_name: tag.to_lowercase(),
            attrs: attrs.clone(),
        }));
        Ok(())
    }

    fn close(&mut self, tag: &str) -> Result<(), ParseError> {
        let tag = tag.to_lowercase();
        // Pop until the matching element surfaces. Anything above it was
        // left unclosed by the author; each pop is a silent auto-close.
        // An explicit loop: the cascade depth is author-controlled.
        loop {
            let Some(&top) = self.open_elements.last() else {
                return Err(ParseError::UnmatchedClose { tag });
            };
            let top_matches = self
                .tree
                .as_element(top)
                .is_some_and(|element| element.tag_name == tag);
            let _ = self.open_elements.pop();
            if top_matches {
                return Ok(());
            }
            if let Some(element) = self.tree.as_element(top) {
                warn_once(
                    "Tree Builder",
                    &format!("auto-closing unbalanced <{}> for </{tag}>", element.tag_name),
                );
            }
        }
    }

    fn text(&mut self, content: &str) -> Result<(), ParseError> {
        let _ = self.attach(NodeKind::Text(content.to_string()));
        Ok(())
    }

    fn cdata(&mut self, content: &str) -> Result<(), ParseError> {
        // CDATA is character data to the tree; same node kind as text.
        let _ = self.attach(NodeKind::Text(content.to_string()));
        Ok(())
    }

    fn comment(&mut self, content: &str) -> Result<(), ParseError> {
        let _ = self.attach(NodeKind::Comment(content.to_string()));
        Ok(())
    }

    fn processing_instruction(&mut self, _name: &str, _attrs: &Attributes) -> Result<(), ParseError> {
        // Discarded from the tree on purpose.
        Ok(())
    }

    fn doctype(&mut self, _content: &str) -> Result<(), ParseError> {
        // Discarded from the tree on purpose.
        Ok(())
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a complete document into a tree in one call.
///
/// # Errors
///
/// Returns [`ParseError::UnmatchedClose`] when a closing tag has no open
/// element left to match (a structurally invalid document).
pub fn parse_document(src: &str) -> Result<DocumentTree, ParseError> {
    let mut builder = TreeBuilder::new();
    let mut tokenizer = Tokenizer::new();
    tokenizer.parse_str(src, &mut builder)?;
    Ok(builder.into_tree())
}
