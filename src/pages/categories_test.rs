use super::*;

fn row(has_children: bool) -> FlatCategory {
    FlatCategory {
        id: 1,
        name: "Fiction".to_owned(),
        depth: 0,
        parent_id: None,
        description: None,
        sort_order: 0,
        has_children,
    }
}

#[test]
fn deleting_a_parent_warns_about_subcategories() {
    assert_eq!(delete_prompt(&row(true)), "Delete \"Fiction\" and all of its subcategories?");
    assert_eq!(delete_prompt(&row(false)), "Delete \"Fiction\"?");
}
