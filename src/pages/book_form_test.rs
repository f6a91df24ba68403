use super::*;

fn typed(name: &str, number: &str, shelf: &str, quantity: &str) -> BookForm {
    BookForm {
        name: name.to_owned(),
        book_number: number.to_owned(),
        shelf_location: shelf.to_owned(),
        quantity: quantity.to_owned(),
    }
}

#[test]
fn valid_form_becomes_trimmed_draft() {
    let draft = validate_book(&typed(" Dune ", "B-9 ", " A1", " 5 "), None).expect("draft");
    assert_eq!(
        draft,
        BookDraft {
            name: "Dune".to_owned(),
            book_number: "B-9".to_owned(),
            shelf_location: "A1".to_owned(),
            quantity: 5,
            preview_image: None,
        }
    );
}

#[test]
fn required_fields_are_checked_in_order() {
    assert_eq!(validate_book(&typed(" ", "", "", ""), None), Err("Enter a title."));
    assert_eq!(validate_book(&typed("Dune", " ", "", ""), None), Err("Enter a book number."));
    assert_eq!(validate_book(&typed("Dune", "B-9", "", ""), None), Err("Enter a shelf location."));
}

#[test]
fn quantity_must_be_a_non_negative_integer() {
    assert!(validate_book(&typed("Dune", "B-9", "A1", "0"), None).is_ok());
    for bad in ["", "-1", "2.5", "many"] {
        assert!(validate_book(&typed("Dune", "B-9", "A1", bad), None).is_err(), "{bad:?}");
    }
}

#[test]
fn editing_round_trips_the_stored_book() {
    let book = Book {
        id: 9,
        name: "Dune".to_owned(),
        book_number: "B-9".to_owned(),
        shelf_location: "A1".to_owned(),
        quantity: 5,
        available_quantity: Some(2),
        author: None,
        isbn: None,
        category_id: None,
        preview_image: Some("/covers/dune.jpg".to_owned()),
    };
    let form = BookForm::from_book(&book);
    assert_eq!(form.quantity, "5");

    let draft = validate_book(&form, book.preview_image.clone()).expect("draft");
    assert_eq!(draft.preview_image.as_deref(), Some("/covers/dune.jpg"));
    assert_eq!(draft.name, book.name);
}
