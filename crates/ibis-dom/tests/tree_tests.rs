//! Tests for the arena document tree and attribute storage.

use ibis_dom::{Attributes, DocumentTree, ElementData, NodeId, NodeKind};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DocumentTree, tag: &str) -> NodeId {
    tree.alloc(NodeKind::Element(ElementData {
        tag_name: tag.to_string(),
        attrs: Attributes::new(),
    }))
}

// ========== tree construction ==========

#[test]
fn test_new_tree_has_document_root() {
    let tree = DocumentTree::new();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root(), NodeId::ROOT);

    let root = tree.get(NodeId::ROOT).expect("document node");
    assert!(matches!(root.kind, NodeKind::Document));
    assert_eq!(root.parent, None);
}

#[test]
fn test_append_child_sets_parent_and_order() {
    let mut tree = DocumentTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(NodeId::ROOT, b);

    assert_eq!(tree.children(NodeId::ROOT), &[a, b]);
    assert_eq!(tree.parent(a), Some(NodeId::ROOT));
    assert_eq!(tree.parent(b), Some(NodeId::ROOT));
}

#[test]
fn test_sibling_links() {
    let mut tree = DocumentTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(NodeId::ROOT, b);
    tree.append_child(NodeId::ROOT, c);

    assert_eq!(tree.first_child(NodeId::ROOT), Some(a));
    assert_eq!(tree.last_child(NodeId::ROOT), Some(c));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.next_sibling(c), None);
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.prev_sibling(b), Some(a));
}

#[test]
fn test_ancestors_walk_to_root() {
    let mut tree = DocumentTree::new();
    let outer = alloc_element(&mut tree, "outer");
    let inner = alloc_element(&mut tree, "inner");
    let leaf = tree.alloc(NodeKind::Text("x".to_string()));
    tree.append_child(NodeId::ROOT, outer);
    tree.append_child(outer, inner);
    tree.append_child(inner, leaf);

    let ancestors: Vec<_> = tree.ancestors(leaf).collect();
    assert_eq!(ancestors, vec![inner, outer, NodeId::ROOT]);
}

#[test]
fn test_typed_accessors() {
    let mut tree = DocumentTree::new();
    let element = alloc_element(&mut tree, "a");
    let text = tree.alloc(NodeKind::Text("payload".to_string()));
    let comment = tree.alloc(NodeKind::Comment("aside".to_string()));
    tree.append_child(NodeId::ROOT, element);
    tree.append_child(element, text);
    tree.append_child(element, comment);

    assert_eq!(tree.as_element(element).map(|e| e.tag_name.as_str()), Some("a"));
    assert_eq!(tree.as_text(text), Some("payload"));
    assert_eq!(tree.as_comment(comment), Some("aside"));

    assert_eq!(tree.as_element(text), None);
    assert_eq!(tree.as_text(element), None);
}

#[test]
fn test_synthetic_node_names() {
    let mut tree = DocumentTree::new();
    let element = alloc_element(&mut tree, "section");
    let text = tree.alloc(NodeKind::Text(String::new()));
    let comment = tree.alloc(NodeKind::Comment(String::new()));

    let name_of = |id: NodeId| tree.get(id).map(|n| n.kind.name().to_string());
    assert_eq!(name_of(NodeId::ROOT), Some("#DOCUMENT".to_string()));
    assert_eq!(name_of(element), Some("section".to_string()));
    assert_eq!(name_of(text), Some("#TEXT".to_string()));
    assert_eq!(name_of(comment), Some("#COMMENT".to_string()));
}

// ========== attributes ==========

#[test]
fn test_attributes_preserve_insertion_order() {
    let mut attrs = Attributes::new();
    attrs.insert("z".to_string(), "1".to_string());
    attrs.insert("a".to_string(), "2".to_string());
    attrs.insert("m".to_string(), "3".to_string());

    let pairs: Vec<_> = attrs.iter().collect();
    assert_eq!(pairs, vec![("z", "1"), ("a", "2"), ("m", "3")]);
}

#[test]
fn test_attributes_insert_replaces_in_place() {
    let mut attrs = Attributes::new();
    attrs.insert("a".to_string(), "1".to_string());
    attrs.insert("b".to_string(), "2".to_string());
    attrs.insert("a".to_string(), "changed".to_string());

    let pairs: Vec<_> = attrs.iter().collect();
    assert_eq!(pairs, vec![("a", "changed"), ("b", "2")]);
    assert_eq!(attrs.len(), 2);
}

#[test]
fn test_attributes_absent_lookup_is_none() {
    let attrs = Attributes::new();
    assert_eq!(attrs.get("anything"), None);
    assert_eq!(attrs.get_or("anything", "default"), "default");
    assert!(!attrs.contains("anything"));
    assert!(attrs.is_empty());
}

#[test]
fn test_attributes_from_iterator() {
    let attrs: Attributes = vec![
        ("a".to_string(), "1".to_string()),
        ("b".to_string(), "2".to_string()),
    ]
    .into_iter()
    .collect();

    assert_eq!(attrs.get("a"), Some("1"));
    assert_eq!(attrs.get("b"), Some("2"));
    assert_eq!(attrs.len(), 2);
}

#[test]
fn test_element_attr_helper() {
    let mut attrs = Attributes::new();
    attrs.insert("href".to_string(), "x".to_string());
    let data = ElementData {
        tag_name: "a".to_string(),
        attrs,
    };

    assert_eq!(data.attr("href"), Some("x"));
    assert_eq!(data.attr("class"), None);
}
