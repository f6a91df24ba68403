use super::*;

fn row(id: i64, depth: usize, parent_id: Option<i64>) -> FlatCategory {
    FlatCategory {
        id,
        name: format!("c{id}"),
        depth,
        parent_id,
        description: None,
        sort_order: 0,
        has_children: false,
    }
}

/// 1 > (2 > 3), 4
fn rows() -> Vec<FlatCategory> {
    vec![row(1, 0, None), row(2, 1, Some(1)), row(3, 2, Some(2)), row(4, 0, None)]
}

fn typed(name: &str, parent: &str, sort: &str) -> CategoryForm {
    CategoryForm {
        name: name.to_owned(),
        description: String::new(),
        parent_id: parent.to_owned(),
        sort_order: sort.to_owned(),
    }
}

#[test]
fn new_top_level_category_omits_parent() {
    let draft = validate_category(&typed(" Fiction ", "", ""), None, &rows()).expect("draft");
    assert_eq!(
        draft,
        CategoryDraft { name: "Fiction".to_owned(), description: None, parent_id: None, sort_order: 0 }
    );
}

#[test]
fn clearing_parent_on_edit_moves_to_top_level() {
    let draft = validate_category(&typed("c3", "", "2"), Some(3), &rows()).expect("draft");
    assert_eq!(draft.parent_id, Some(0));
    assert_eq!(draft.sort_order, 2);
}

#[test]
fn parent_cannot_be_self_or_descendant() {
    for own_subtree in ["1", "2", "3"] {
        assert_eq!(
            validate_category(&typed("c1", own_subtree, ""), Some(1), &rows()),
            Err("A category cannot be moved under itself."),
            "{own_subtree}"
        );
    }
    let moved = validate_category(&typed("c2", "4", ""), Some(2), &rows()).expect("draft");
    assert_eq!(moved.parent_id, Some(4));
}

#[test]
fn name_and_numbers_are_validated() {
    assert_eq!(validate_category(&typed("  ", "", ""), None, &rows()), Err("Enter a category name."));
    assert_eq!(validate_category(&typed("x", "abc", ""), None, &rows()), Err("Pick a parent category."));
    assert_eq!(validate_category(&typed("x", "", "1.5"), None, &rows()), Err("Sort order must be a whole number."));
}

#[test]
fn description_is_trimmed_and_optional() {
    let mut form = typed("x", "", "");
    form.description = "  Novels  ".to_owned();
    let draft = validate_category(&form, None, &rows()).expect("draft");
    assert_eq!(draft.description.as_deref(), Some("Novels"));
}

#[test]
fn parent_choices_hide_the_edited_subtree() {
    let ids: Vec<i64> = parent_choices(&rows(), Some(2)).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 4]);
    assert_eq!(parent_choices(&rows(), None).len(), 4);
}

#[test]
fn form_seeds_from_stored_category() {
    let category = Category {
        id: 2,
        name: "SF".to_owned(),
        parent_id: Some(1),
        description: Some("Space".to_owned()),
        sort_order: 3,
        children: vec![],
    };
    assert_eq!(
        CategoryForm::from_category(&category),
        CategoryForm {
            name: "SF".to_owned(),
            description: "Space".to_owned(),
            parent_id: "1".to_owned(),
            sort_order: "3".to_owned(),
        }
    );
}
