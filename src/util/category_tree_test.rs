use super::*;

fn node(id: i64, name: &str, children: Vec<Category>) -> Category {
    Category { id, name: name.to_owned(), parent_id: None, description: None, sort_order: 0, children }
}

#[test]
fn empty_tree_flattens_to_nothing() {
    assert!(flatten(&[]).is_empty());
}

#[test]
fn flatten_is_preorder_with_depths() {
    let tree = vec![
        node(1, "Fiction", vec![node(2, "Science Fiction", vec![node(3, "Space Opera", vec![])]), node(4, "Mystery", vec![])]),
        node(5, "Non-fiction", vec![]),
    ];

    let flat = flatten(&tree);

    let order: Vec<(i64, usize)> = flat.iter().map(|c| (c.id, c.depth)).collect();
    assert_eq!(order, vec![(1, 0), (2, 1), (3, 2), (4, 1), (5, 0)]);
}

#[test]
fn children_inherit_parent_id_when_missing() {
    let flat = flatten(&[node(1, "Fiction", vec![node(2, "SF", vec![])])]);
    assert_eq!(flat[0].parent_id, None);
    assert_eq!(flat[1].parent_id, Some(1));
}

#[test]
fn explicit_parent_id_is_kept() {
    let mut child = node(2, "SF", vec![]);
    child.parent_id = Some(42);
    let flat = flatten(&[node(1, "Fiction", vec![child])]);
    assert_eq!(flat[1].parent_id, Some(42));
}

#[test]
fn indented_name_marks_depth() {
    let flat = flatten(&[node(1, "Fiction", vec![node(2, "SF", vec![])])]);
    assert_eq!(flat[0].indented_name(), "Fiction");
    assert_eq!(flat[1].indented_name(), "— SF");
}

#[test]
fn rows_know_whether_they_have_children() {
    let flat = flatten(&[node(1, "Fiction", vec![node(2, "SF", vec![])])]);
    assert!(flat[0].has_children);
    assert!(!flat[1].has_children);
}

#[test]
fn subtree_covers_node_and_descendants_only() {
    let tree = vec![
        node(1, "Fiction", vec![node(2, "Science Fiction", vec![node(3, "Space Opera", vec![])]), node(4, "Mystery", vec![])]),
        node(5, "Non-fiction", vec![]),
    ];
    let flat = flatten(&tree);

    assert_eq!(subtree_ids(&flat, 2), vec![2, 3]);
    assert_eq!(subtree_ids(&flat, 1), vec![1, 2, 3, 4]);
    assert_eq!(subtree_ids(&flat, 5), vec![5]);
    assert!(subtree_ids(&flat, 99).is_empty());
}
