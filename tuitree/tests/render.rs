use tuitree::{Glyphs, Line, NodeId, Rect, Tree, TreeView, TreeViewConfig};

/// root
///   a (a1)
///   b
fn tree() -> (Tree, NodeId) {
    let mut tree = Tree::new("root");
    let root = tree.root();
    let a = tree.add_child(root, "a").unwrap();
    tree.add_child(a, "a1").unwrap();
    tree.add_child(root, "b").unwrap();
    tree.expand(a).unwrap();
    (tree, a)
}

fn ascii_view(tree: Tree, width: u16, height: u16) -> TreeView {
    let mut view = TreeView::new(Rect::new(0, 0, width, height))
        .with_config(TreeViewConfig::new().glyphs(Glyphs::Ascii));
    view.set_tree(tree);
    view.reflow();
    view
}

fn texts(lines: &[Line]) -> Vec<&str> {
    lines.iter().map(|line| line.text.as_str()).collect()
}

#[test]
fn test_render_rows_and_scrollbars() {
    let (tree, a) = tree();
    let mut view = ascii_view(tree, 16, 5);
    view.set_selected(Some(a)).unwrap();

    let lines = view.render_lines();
    assert_eq!(
        texts(&lines),
        vec![
            "`- root        ^",
            "  |- a         #",
            "  | `  a1      .",
            "  `  b         v",
            "<#............> ",
        ]
    );
    let highlighted: Vec<bool> = lines.iter().map(|line| line.highlighted).collect();
    assert_eq!(highlighted, vec![false, true, false, false, false]);
}

#[test]
fn test_render_collapsed_marker() {
    let (tree, a) = tree();
    let mut view = ascii_view(tree, 16, 5);
    view.tree_mut().unwrap().collapse(a).unwrap();
    view.reflow();

    let lines = view.render_lines();
    assert_eq!(lines[1].text, "  |+ a         #");
    assert_eq!(lines[3].text.trim(), "v");
}

#[test]
fn test_render_applies_horizontal_offset() {
    let (tree, _) = tree();
    let mut view = ascii_view(tree, 8, 5);
    view.set_horizontal_value(2);
    view.reflow();
    assert_eq!(view.horizontal_value(), 2);

    let lines = view.render_lines();
    assert_eq!(lines[0].text, " root  ^");
    assert_eq!(lines[1].text, "|- a   #");
}

#[test]
fn test_render_empty_view() {
    let view = TreeView::new(Rect::new(0, 0, 6, 3))
        .with_config(TreeViewConfig::new().glyphs(Glyphs::Ascii));
    let lines = view.render_lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].text, "     ^");
    assert_eq!(lines[1].text, "     v");
    assert_eq!(lines[2].text, "<#..> ");
}

#[test]
fn test_render_zero_height() {
    let view = TreeView::new(Rect::new(0, 0, 6, 0));
    assert!(view.render_lines().is_empty());
}
