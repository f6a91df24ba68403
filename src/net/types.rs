//! Wire DTOs for the library backend's REST endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON so serde stays declarative. Optional
//! columns default to `None` because older rows omit them. Statistics
//! replies carry no defaults: a reply of another shape is a decode failure,
//! not a row of zeros.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role tag carried on every user record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
    /// Any tag this console does not know about. Never treated as admin.
    #[serde(other)]
    Other,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::User => "Reader",
            Self::Other => "Unknown",
        }
    }
}

fn enabled() -> bool {
    true
}

/// A user profile as returned by `/user/me` and `/user/list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "enabled")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Name shown in the header and profile card.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Partial profile update. Only `Some` fields are sent and merged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl UserPatch {
    /// Shallow merge into `user`: present fields overwrite, absent ones stay.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username.clone_from(username);
        }
        if let Some(email) = &self.email {
            user.email = Some(email.clone());
        }
        if let Some(full_name) = &self.full_name {
            user.full_name = Some(full_name.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.full_name.is_none()
    }
}

/// Administrative account change for `PUT /user/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload.
///
/// The backend replies with an OAuth-style `{access_token, token_type}`;
/// replies that also embed the profile save the follow-up `/user/me` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

/// Older backend variant's response wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// One page of a list endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0 }
    }
}

impl<T: DeserializeOwned> ListPage<T> {
    /// Decode a list reply whose rows sit under `key`, as in
    /// `{"total": 31, "books": [...]}`.
    ///
    /// `{items, total}` and a bare array are accepted too; without a `total`
    /// the row count is used.
    ///
    /// # Errors
    ///
    /// Fails when the rows are missing or do not decode as `T`.
    pub fn from_value(value: Value, key: &str) -> Result<Self, serde_json::Error> {
        let (rows, total) = match value {
            Value::Array(rows) => (Value::Array(rows), None),
            Value::Object(mut fields) => {
                let total = fields.get("total").and_then(Value::as_u64);
                let rows = fields
                    .remove(key)
                    .or_else(|| fields.remove("items"))
                    .ok_or_else(|| serde_json::Error::custom(format_args!("missing field `{key}`")))?;
                (rows, total)
            }
            other => {
                return Err(serde_json::Error::custom(format_args!("expected a list reply, got {other}")));
            }
        };
        let items: Vec<T> = serde_json::from_value(rows)?;
        let total = total.unwrap_or(items.len() as u64);
        Ok(Self { items, total })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub book_number: String,
    pub shelf_location: String,
    pub quantity: i64,
    #[serde(default)]
    pub available_quantity: Option<i64>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub preview_image: Option<String>,
}

/// Body of `POST /book/create` and `PUT /book/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookDraft {
    pub name: String,
    pub book_number: String,
    pub shelf_location: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
}

/// A category node; the tree endpoint nests children, list endpoints don't.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub children: Vec<Category>,
}

/// Body of `POST /category/create` and `PUT /category/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub sort_order: i64,
}

/// Borrower as embedded in detailed borrow rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub username: String,
}

/// Book as embedded in detailed borrow rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRef {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    #[serde(default)]
    pub borrow_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub renew_count: u32,
    #[serde(default)]
    pub fine_amount: f64,
    #[serde(default)]
    pub fine_paid: bool,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub book: Option<BookRef>,
}

impl BorrowRecord {
    pub fn is_returned(&self) -> bool {
        self.status == "returned"
    }

    pub fn owes_fine(&self) -> bool {
        self.fine_amount > 0.0 && !self.fine_paid
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub queue_position: Option<u32>,
    #[serde(default)]
    pub reservation_date: Option<String>,
    #[serde(default)]
    pub expire_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub rating: u8,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default = "enabled")]
    pub is_visible: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub notification_type: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Catalogue-wide counters from `/stats/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_books: u64,
    pub total_categories: u64,
    pub active_users: u64,
    pub total_borrow_records: u64,
    pub active_borrows: u64,
    pub overdue_borrows: u64,
    pub total_reservations: u64,
    pub pending_reservations: u64,
}

/// Activity summary from `/stats/overview`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsOverview {
    pub today: TodayActivity,
    pub this_week: WeekActivity,
    pub inventory: Inventory,
    pub reviews: ReviewSummary,
    pub favorites: FavoriteSummary,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayActivity {
    pub borrows: u64,
    pub returns: u64,
    pub new_users: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekActivity {
    pub borrows: u64,
    pub returns: u64,
}

/// Copy counts summed over every title. `borrowed_quantity` goes negative
/// when stock records disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub total_quantity: i64,
    pub available_quantity: i64,
    pub borrowed_quantity: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub total: u64,
    pub avg_rating: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSummary {
    pub total: u64,
}

/// One row of `/stats/book-ranking/borrow`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookRanking {
    pub book_id: i64,
    pub book_name: String,
    #[serde(default)]
    pub author: Option<String>,
    pub borrow_count: u64,
    pub avg_rating: f64,
}
