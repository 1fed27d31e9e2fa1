use std::cell::Cell;
use std::rc::Rc;

use tuitree::{NodeId, Rect, Tree, TreeError, TreeView};

fn tree() -> (Tree, Vec<NodeId>) {
    let mut tree = Tree::new("root");
    let root = tree.root();
    let a = tree.add_child(root, "a").unwrap();
    let a1 = tree.add_child(a, "a1").unwrap();
    let b = tree.add_child(root, "b").unwrap();
    (tree, vec![root, a, a1, b])
}

fn view() -> (TreeView, Vec<NodeId>) {
    let (tree, ids) = tree();
    let mut view = TreeView::new(Rect::new(0, 0, 20, 8));
    view.set_tree(tree);
    view.reflow();
    (view, ids)
}

#[test]
fn test_at_most_one_selected() {
    let (mut view, ids) = view();
    let sequence = [
        Some(ids[1]),
        Some(ids[3]),
        Some(ids[3]),
        None,
        Some(ids[2]),
        Some(ids[0]),
    ];
    for item in sequence {
        view.set_selected(item).unwrap();
        let selected = view.tree().unwrap().selected_ids();
        assert!(selected.len() <= 1);
        assert_eq!(selected.first().copied(), item);
        assert_eq!(view.selected(), item);
    }
}

#[test]
fn test_selecting_same_item_twice_keeps_it() {
    let (mut view, ids) = view();
    view.set_selected(Some(ids[1])).unwrap();
    view.set_selected(Some(ids[1])).unwrap();
    assert!(view.tree().unwrap().node(ids[1]).unwrap().is_selected());
}

#[test]
fn test_clearing_selection() {
    let (mut view, ids) = view();
    view.set_selected(Some(ids[3])).unwrap();
    view.set_selected(None).unwrap();
    assert_eq!(view.selected(), None);
    assert!(!view.tree().unwrap().node(ids[3]).unwrap().is_selected());
}

#[test]
fn test_selecting_foreign_id_fails() {
    let (mut view, _) = view();
    let mut other = Tree::new("other");
    let other_root = other.root();
    let mut foreign = other_root;
    for i in 0..10 {
        foreign = other.add_child(other_root, format!("n{i}")).unwrap();
    }

    assert_eq!(
        view.set_selected(Some(foreign)),
        Err(TreeError::UnknownNode(foreign))
    );
    assert_eq!(view.selected(), None);
}

#[test]
fn test_selecting_without_tree() {
    let (_, ids) = tree();
    let mut view = TreeView::new(Rect::new(0, 0, 20, 8));
    assert_eq!(view.set_selected(Some(ids[1])), Err(TreeError::NoTree));
    assert_eq!(view.set_selected(None), Ok(()));
}

#[test]
fn test_replacing_tree_drops_selection() {
    let (mut view, ids) = view();
    view.set_selected(Some(ids[1])).unwrap();
    let (fresh, _) = tree();
    view.set_tree(fresh);
    assert_eq!(view.selected(), None);
    assert!(view.rows().is_empty());
}

#[test]
fn test_take_tree_keeps_flags_and_empties_view() {
    let (mut view, ids) = view();
    view.set_selected(Some(ids[3])).unwrap();
    let tree = view.take_tree().unwrap();
    assert_eq!(tree.selected_ids(), vec![ids[3]]);
    assert!(view.tree().is_none());
    assert_eq!(view.selected(), None);
}

#[test]
fn test_selected_row() {
    let (mut view, ids) = view();
    assert_eq!(view.selected_row(), None);
    view.set_selected(Some(ids[3])).unwrap();
    // root, a, b: a is collapsed
    assert_eq!(view.selected_row(), Some(2));
}

#[test]
fn test_dispatch_runs_action() {
    let (tree, _) = tree();
    let count = Rc::new(Cell::new(0));
    let seen = Rc::clone(&count);
    let mut view = TreeView::with_action(Rect::new(0, 0, 20, 8), move || {
        seen.set(seen.get() + 1);
    });
    view.set_tree(tree);

    view.dispatch();
    view.dispatch();
    assert_eq!(count.get(), 2);
}

#[test]
fn test_dispatch_without_action_is_noop() {
    let (mut view, _) = view();
    view.dispatch();
}

#[test]
fn test_error_messages() {
    let (_, ids) = tree();
    assert_eq!(
        TreeError::UnknownNode(ids[2]).to_string(),
        "Node #2 does not belong to this tree"
    );
    assert_eq!(TreeError::NoTree.to_string(), "No tree is attached to the view");
}

#[test]
fn test_removed_ids_stop_resolving() {
    let mut tree = Tree::new("root");
    let root = tree.root();
    let old = tree.add_child(root, "old").unwrap();
    tree.clear_children(root).unwrap();
    assert_eq!(tree.len(), 1);
    assert!(!tree.contains(old));

    let new = tree.add_child(root, "new").unwrap();
    assert_eq!(new.index(), old.index());
    assert_ne!(new, old);
    assert!(tree.node(old).is_none());
    assert_eq!(tree.get(old).unwrap_err(), TreeError::UnknownNode(old));
    assert_eq!(tree.label(new), Some("new"));
    assert_eq!(tree.len(), 2);
}
