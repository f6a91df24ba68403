//! Create/edit dialog for catalogue books.

#[cfg(test)]
#[path = "book_form_test.rs"]
mod book_form_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::{Book, BookDraft};
use crate::state::notices::NoticeLevel;

/// Book fields as typed into the dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct BookForm {
    pub name: String,
    pub book_number: String,
    pub shelf_location: String,
    pub quantity: String,
}

impl BookForm {
    pub fn from_book(book: &Book) -> Self {
        Self {
            name: book.name.clone(),
            book_number: book.book_number.clone(),
            shelf_location: book.shelf_location.clone(),
            quantity: book.quantity.to_string(),
        }
    }
}

/// Trimmed draft, or the message to show next to the form.
pub(crate) fn validate_book(form: &BookForm, preview_image: Option<String>) -> Result<BookDraft, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Enter a title.");
    }
    let book_number = form.book_number.trim();
    if book_number.is_empty() {
        return Err("Enter a book number.");
    }
    let shelf_location = form.shelf_location.trim();
    if shelf_location.is_empty() {
        return Err("Enter a shelf location.");
    }
    let quantity = match form.quantity.trim().parse::<i64>() {
        Ok(n) if n >= 0 => n,
        _ => return Err("Quantity must be a whole number of zero or more."),
    };
    Ok(BookDraft {
        name: name.to_owned(),
        book_number: book_number.to_owned(),
        shelf_location: shelf_location.to_owned(),
        quantity,
        preview_image,
    })
}

/// `Editor` entry for the books list.
pub fn book_editor(book: Option<Book>, on_close: Callback<bool>) -> AnyView {
    view! { <BookEditor book=book on_close=on_close/> }.into_any()
}

#[component]
fn BookEditor(book: Option<Book>, on_close: Callback<bool>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let editing_id = book.as_ref().map(|b| b.id);
    let preview_image = book.as_ref().and_then(|b| b.preview_image.clone());
    let form = RwSignal::new(book.as_ref().map(BookForm::from_book).unwrap_or_default());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let draft = match validate_book(&form.get_untracked(), preview_image.clone()) {
            Ok(draft) => draft,
            Err(message) => {
                client.notices().push(NoticeLevel::Warning, message);
                return;
            }
        };
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let saved = match editing_id {
                Some(id) => api::update_book(&client, id, &draft).await,
                None => api::create_book(&client, &draft).await,
            };
            busy.set(false);
            if let Ok(book) = saved {
                client.notices().success(format!("Saved \"{}\".", book.name));
                on_close.run(true);
            }
        });
    });

    let field = move |label: &'static str, kind: &'static str, get: fn(&BookForm) -> String, set: fn(&mut BookForm, String)| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(false)>
            <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing_id.is_some() { "Edit Book" } else { "New Book" }}</h2>
                {field("Title", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {field("Book number", "text", |f| f.book_number.clone(), |f, v| f.book_number = v)}
                {field("Shelf location", "text", |f| f.shelf_location.clone(), |f, v| f.shelf_location = v)}
                {field("Quantity", "number", |f| f.quantity.clone(), |f, v| f.quantity = v)}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(false)>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
