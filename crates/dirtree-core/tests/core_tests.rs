use dirtree_core::{EntryKind, EntryRecord, OrderedTree, Position, TreeError};
use std::collections::HashSet;
use std::time::SystemTime;

/// root
/// ├── a.txt
/// ├── b
/// │   └── c.txt
/// └── d
///     ├── e
///     │   └── f.txt
///     └── g.txt
fn build_sample_tree() -> OrderedTree<EntryRecord> {
    let now = SystemTime::now();
    let mut tree = OrderedTree::new();

    let root = tree.add_root(EntryRecord::directory("root", 4096, now)).unwrap();
    tree.add_child(root, EntryRecord::file("a.txt", 10, now)).unwrap();
    let b = tree.add_child(root, EntryRecord::directory("b", 4096, now)).unwrap();
    tree.add_child(b, EntryRecord::file("c.txt", 5, now)).unwrap();
    let d = tree.add_child(root, EntryRecord::directory("d", 4096, now)).unwrap();
    let e = tree.add_child(d, EntryRecord::directory("e", 4096, now)).unwrap();
    tree.add_child(e, EntryRecord::file("f.txt", 7, now)).unwrap();
    tree.add_child(d, EntryRecord::file("g.txt", 3, now)).unwrap();

    tree
}

fn names(tree: &OrderedTree<EntryRecord>, order: &[Position]) -> Vec<String> {
    order
        .iter()
        .map(|&p| tree.element(p).unwrap().name.to_string())
        .collect()
}

fn is_ancestor(tree: &OrderedTree<EntryRecord>, ancestor: Position, mut node: Position) -> bool {
    while let Some(parent) = tree.parent(node).unwrap() {
        if parent == ancestor {
            return true;
        }
        node = parent;
    }
    false
}

#[test]
fn test_size_counts_every_insertion() {
    let tree = build_sample_tree();
    assert_eq!(tree.len(), 8);
    assert!(!tree.is_empty());
}

#[test]
fn test_preorder_sequence() {
    let tree = build_sample_tree();
    assert_eq!(
        names(&tree, &tree.preorder()),
        ["root", "a.txt", "b", "c.txt", "d", "e", "f.txt", "g.txt"]
    );
}

#[test]
fn test_postorder_sequence() {
    let tree = build_sample_tree();
    assert_eq!(
        names(&tree, &tree.postorder()),
        ["a.txt", "c.txt", "b", "f.txt", "e", "g.txt", "d", "root"]
    );
}

#[test]
fn test_traversals_visit_each_node_once() {
    let tree = build_sample_tree();

    for order in [tree.preorder(), tree.postorder(), tree.positions()] {
        assert_eq!(order.len(), tree.len());
        let unique: HashSet<_> = order.iter().copied().collect();
        assert_eq!(unique.len(), tree.len());
    }
}

#[test]
fn test_ancestors_precede_in_preorder_and_follow_in_postorder() {
    let tree = build_sample_tree();
    let pre = tree.preorder();
    let post = tree.postorder();

    for (i, &earlier) in pre.iter().enumerate() {
        for &later in &pre[i + 1..] {
            assert!(!is_ancestor(&tree, later, earlier));
        }
    }
    for (i, &earlier) in post.iter().enumerate() {
        for &later in &post[i + 1..] {
            assert!(!is_ancestor(&tree, earlier, later));
        }
    }
}

#[test]
fn test_parent_child_consistency() {
    let tree = build_sample_tree();

    for p in tree.positions() {
        for c in tree.children(p).unwrap() {
            assert_eq!(tree.parent(c).unwrap(), Some(p));
            assert_eq!(tree.depth(c).unwrap(), tree.depth(p).unwrap() + 1);
        }
        assert_eq!(tree.is_leaf(p).unwrap(), tree.num_children(p).unwrap() == 0);
        assert_eq!(tree.is_internal(p).unwrap(), !tree.is_leaf(p).unwrap());
    }

    let root = tree.root().unwrap();
    assert_eq!(tree.depth(root).unwrap(), 0);
    assert!(tree.is_root(root).unwrap());
    assert_eq!(tree.parent(root).unwrap(), None);
}

#[test]
fn test_set_element_returns_previous() {
    let mut tree = build_sample_tree();
    let root = tree.root().unwrap();
    let a = tree.children(root).unwrap()[0];
    let replacement = EntryRecord::file("renamed.txt", 99, SystemTime::UNIX_EPOCH);

    let previous = tree.set_element(a, replacement.clone()).unwrap();
    assert_eq!(previous.name.as_str(), "a.txt");
    assert_eq!(previous.size, 10);
    assert_eq!(tree.element(a).unwrap(), &replacement);
    assert_eq!(tree.len(), 8);
}

#[test]
fn test_foreign_positions_are_rejected() {
    let mut tree = build_sample_tree();
    let other = build_sample_tree();
    let foreign = other.root().unwrap();
    let now = SystemTime::now();

    let err = tree
        .add_child(foreign, EntryRecord::file("x", 1, now))
        .unwrap_err();
    assert!(matches!(err, TreeError::InvalidArgument { .. }));
    assert_eq!(tree.len(), 8);

    assert!(matches!(tree.parent(foreign), Err(TreeError::InvalidArgument { .. })));
    assert!(matches!(tree.children(foreign), Err(TreeError::InvalidArgument { .. })));
    assert!(matches!(tree.is_leaf(foreign), Err(TreeError::InvalidArgument { .. })));
    assert!(matches!(tree.is_root(foreign), Err(TreeError::InvalidArgument { .. })));
    assert!(matches!(
        tree.set_element(foreign, EntryRecord::file("y", 1, now)),
        Err(TreeError::InvalidArgument { .. })
    ));
}

#[test]
fn test_second_root_is_rejected() {
    let mut tree = build_sample_tree();
    let root = tree.root().unwrap();

    let err = tree
        .add_root(EntryRecord::directory("again", 0, SystemTime::now()))
        .unwrap_err();
    assert!(matches!(err, TreeError::InvalidState { .. }));
    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree.element(root).unwrap().name.as_str(), "root");
    assert_eq!(tree.len(), 8);
}

#[test]
fn test_kinds_survive_in_tree() {
    let tree = build_sample_tree();
    let kinds: Vec<EntryKind> = tree
        .positions()
        .into_iter()
        .map(|p| tree.element(p).unwrap().kind)
        .collect();

    assert_eq!(kinds.iter().filter(|k| k.is_dir()).count(), 4);
    assert_eq!(kinds.iter().filter(|k| !k.is_dir()).count(), 4);
}
