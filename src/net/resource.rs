//! Listable backend entities and how the console tabulates them.
//!
//! DESIGN
//! ======
//! Each entity names its endpoint, columns, filters and row actions once; the
//! generic list page and the typed API helpers work from that description
//! alone.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use serde::de::DeserializeOwned;

use super::types::{Book, BorrowRecord, Category, Favorite, Notification, Reservation, Review, User};

/// A table column: the header label and the JSON field it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

const fn col(key: &'static str, label: &'static str) -> Column {
    Column { key, label }
}

/// A server-side list filter offered as a select box. An empty selection
/// sends nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListFilter {
    /// Query parameter name.
    pub key: &'static str,
    pub label: &'static str,
    /// `(value, label)` pairs.
    pub options: &'static [(&'static str, &'static str)],
}

/// A per-row operation that is neither edit nor delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    MarkRead,
    ReturnBook,
    RenewLoan,
    PayFine,
    CancelReservation,
    CompleteReservation,
    HideReview,
    ShowReview,
    Activate,
    Deactivate,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::MarkRead => "Mark read",
            Self::ReturnBook => "Return",
            Self::RenewLoan => "Renew",
            Self::PayFine => "Pay fine",
            Self::CancelReservation => "Cancel",
            Self::CompleteReservation => "Complete",
            Self::HideReview => "Hide",
            Self::ShowReview => "Show",
            Self::Activate => "Enable",
            Self::Deactivate => "Disable",
        }
    }

    /// Success toast text.
    pub fn done(self) -> &'static str {
        match self {
            Self::MarkRead => "Marked as read.",
            Self::ReturnBook => "Book returned.",
            Self::RenewLoan => "Loan renewed.",
            Self::PayFine => "Fine paid.",
            Self::CancelReservation => "Reservation cancelled.",
            Self::CompleteReservation => "Reservation completed.",
            Self::HideReview => "Review hidden.",
            Self::ShowReview => "Review visible again.",
            Self::Activate => "Account enabled.",
            Self::Deactivate => "Account disabled.",
        }
    }

    /// Shown in the danger style.
    pub fn is_destructive(self) -> bool {
        matches!(self, Self::CancelReservation | Self::HideReview | Self::Deactivate)
    }
}

pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Route prefix relative to the API base, e.g. `/book`.
    const ENDPOINT: &'static str;
    /// Field holding the rows in a list reply, e.g. `books`.
    const LIST_KEY: &'static str;
    const TITLE: &'static str;
    const COLUMNS: &'static [Column];
    const FILTERS: &'static [ListFilter] = &[];
    const DELETABLE: bool = true;
    /// Offer a toolbar button that marks every row read.
    const BULK_MARK_READ: bool = false;

    fn id(&self) -> i64;

    /// Cell text for each of `COLUMNS`, in order.
    fn cells(&self) -> Vec<String>;

    /// Actions this row currently allows.
    fn actions(&self) -> Vec<RowAction> {
        Vec::new()
    }

    fn list_path() -> String {
        format!("{}/list", Self::ENDPOINT)
    }

    fn item_path(id: i64) -> String {
        format!("{}/{id}", Self::ENDPOINT)
    }

    fn delete_path(id: i64) -> String {
        Self::item_path(id)
    }
}

fn opt(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn opt_id(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_owned()
}

const BOOLEAN: &[(&str, &str)] = &[("true", "Yes"), ("false", "No")];

impl Resource for User {
    const ENDPOINT: &'static str = "/user";
    const LIST_KEY: &'static str = "users";
    const TITLE: &'static str = "Users";
    const COLUMNS: &'static [Column] = &[
        col("id", "ID"),
        col("username", "Username"),
        col("full_name", "Name"),
        col("email", "Email"),
        col("role", "Role"),
        col("is_active", "Active"),
    ];
    const FILTERS: &'static [ListFilter] = &[
        ListFilter { key: "role", label: "Role", options: &[("admin", "Administrator"), ("user", "Reader")] },
        ListFilter { key: "is_active", label: "Active", options: BOOLEAN },
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            opt(self.full_name.as_ref()),
            opt(self.email.as_ref()),
            self.role.label().to_owned(),
            yes_no(self.is_active),
        ]
    }

    fn actions(&self) -> Vec<RowAction> {
        vec![if self.is_active { RowAction::Deactivate } else { RowAction::Activate }]
    }
}

impl Resource for Book {
    const ENDPOINT: &'static str = "/book";
    const LIST_KEY: &'static str = "books";
    const TITLE: &'static str = "Books";
    const COLUMNS: &'static [Column] = &[
        col("id", "ID"),
        col("name", "Title"),
        col("book_number", "Number"),
        col("author", "Author"),
        col("shelf_location", "Shelf"),
        col("quantity", "Available"),
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        let stock = match self.available_quantity {
            Some(available) => format!("{available}/{}", self.quantity),
            None => self.quantity.to_string(),
        };
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.book_number.clone(),
            opt(self.author.as_ref()),
            self.shelf_location.clone(),
            stock,
        ]
    }
}

impl Resource for Category {
    const ENDPOINT: &'static str = "/category";
    const LIST_KEY: &'static str = "categories";
    const TITLE: &'static str = "Categories";
    const COLUMNS: &'static [Column] = &[
        col("id", "ID"),
        col("name", "Name"),
        col("parent_id", "Parent"),
        col("description", "Description"),
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt_id(self.parent_id),
            opt(self.description.as_ref()),
        ]
    }
}

impl Resource for BorrowRecord {
    const ENDPOINT: &'static str = "/borrow";
    const LIST_KEY: &'static str = "records";
    const TITLE: &'static str = "Borrow Records";
    const COLUMNS: &'static [Column] = &[
        col("id", "ID"),
        col("user_id", "User"),
        col("book_id", "Book"),
        col("borrow_date", "Borrowed"),
        col("due_date", "Due"),
        col("return_date", "Returned"),
        col("status", "Status"),
        col("fine_amount", "Fine"),
    ];
    const FILTERS: &'static [ListFilter] = &[
        ListFilter {
            key: "status_filter",
            label: "Status",
            options: &[("borrowed", "On loan"), ("returned", "Returned"), ("overdue", "Overdue")],
        },
        ListFilter { key: "overdue_only", label: "Overdue only", options: &[("true", "Yes")] },
    ];
    const DELETABLE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        let fine = if self.fine_amount > 0.0 {
            format!("{:.2}{}", self.fine_amount, if self.fine_paid { " (paid)" } else { "" })
        } else {
            String::new()
        };
        vec![
            self.id.to_string(),
            self.user.as_ref().map_or_else(|| self.user_id.to_string(), |u| u.username.clone()),
            self.book.as_ref().map_or_else(|| self.book_id.to_string(), |b| b.name.clone()),
            opt(self.borrow_date.as_ref()),
            opt(self.due_date.as_ref()),
            opt(self.return_date.as_ref()),
            self.status.clone(),
            fine,
        ]
    }

    fn actions(&self) -> Vec<RowAction> {
        let mut actions = Vec::new();
        if !self.is_returned() {
            actions.extend([RowAction::ReturnBook, RowAction::RenewLoan]);
        }
        if self.owes_fine() {
            actions.push(RowAction::PayFine);
        }
        actions
    }
}

impl Resource for Reservation {
    const ENDPOINT: &'static str = "/reservation";
    const LIST_KEY: &'static str = "reservations";
    const TITLE: &'static str = "Reservations";
    const COLUMNS: &'static [Column] = &[
        col("id", "ID"),
        col("user_id", "User"),
        col("book_id", "Book"),
        col("queue_position", "Queue"),
        col("reservation_date", "Reserved"),
        col("expire_date", "Expires"),
        col("status", "Status"),
    ];
    const FILTERS: &'static [ListFilter] = &[ListFilter {
        key: "status_filter",
        label: "Status",
        options: &[
            ("pending", "Pending"),
            ("available", "Available"),
            ("completed", "Completed"),
            ("cancelled", "Cancelled"),
            ("expired", "Expired"),
        ],
    }];
    const DELETABLE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.user_id.to_string(),
            self.book_id.to_string(),
            self.queue_position.map(|p| p.to_string()).unwrap_or_default(),
            opt(self.reservation_date.as_ref()),
            opt(self.expire_date.as_ref()),
            self.status.clone(),
        ]
    }

    fn actions(&self) -> Vec<RowAction> {
        match self.status.as_str() {
            "pending" => vec![RowAction::CancelReservation],
            "available" => vec![RowAction::CompleteReservation, RowAction::CancelReservation],
            _ => Vec::new(),
        }
    }
}

impl Resource for Review {
    const ENDPOINT: &'static str = "/review";
    const LIST_KEY: &'static str = "reviews";
    const TITLE: &'static str = "Reviews";
    const COLUMNS: &'static [Column] = &[
        col("id", "ID"),
        col("user_id", "User"),
        col("book_id", "Book"),
        col("rating", "Rating"),
        col("content", "Review"),
        col("is_visible", "Visible"),
        col("created_at", "Created"),
    ];
    const FILTERS: &'static [ListFilter] = &[
        ListFilter {
            key: "rating",
            label: "Rating",
            options: &[("5", "★★★★★"), ("4", "★★★★"), ("3", "★★★"), ("2", "★★"), ("1", "★")],
        },
        ListFilter { key: "visible_only", label: "Visible only", options: &[("true", "Yes")] },
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.user_id.to_string(),
            self.book_id.to_string(),
            "★".repeat(usize::from(self.rating.min(5))),
            opt(self.content.as_ref()),
            yes_no(self.is_visible),
            opt(self.created_at.as_ref()),
        ]
    }

    fn actions(&self) -> Vec<RowAction> {
        vec![if self.is_visible { RowAction::HideReview } else { RowAction::ShowReview }]
    }
}

impl Resource for Favorite {
    const ENDPOINT: &'static str = "/favorite";
    const LIST_KEY: &'static str = "favorites";
    const TITLE: &'static str = "Favorites";
    const COLUMNS: &'static [Column] =
        &[col("id", "ID"), col("user_id", "User"), col("book_id", "Book"), col("created_at", "Created")];

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.user_id.to_string(),
            self.book_id.to_string(),
            opt(self.created_at.as_ref()),
        ]
    }
}

impl Resource for Notification {
    const ENDPOINT: &'static str = "/notification";
    const LIST_KEY: &'static str = "notifications";
    const TITLE: &'static str = "Notifications";
    const COLUMNS: &'static [Column] = &[
        col("id", "ID"),
        col("title", "Title"),
        col("content", "Message"),
        col("notification_type", "Type"),
        col("user_id", "Recipient"),
        col("is_read", "Read"),
        col("created_at", "Sent"),
    ];
    const FILTERS: &'static [ListFilter] =
        &[ListFilter { key: "unread_only", label: "Unread only", options: &[("true", "Yes")] }];
    const BULK_MARK_READ: bool = true;

    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.content.clone(),
            opt(self.notification_type.as_ref()),
            self.user_id.map_or_else(|| "All".to_owned(), |id| id.to_string()),
            yes_no(self.is_read),
            opt(self.created_at.as_ref()),
        ]
    }

    fn actions(&self) -> Vec<RowAction> {
        if self.is_read { Vec::new() } else { vec![RowAction::MarkRead] }
    }

    /// The plain item route only deletes the caller's own notifications.
    fn delete_path(id: i64) -> String {
        format!("{}/admin/{id}", Self::ENDPOINT)
    }
}
