//! Typed endpoint helpers over the request gateway.
//!
//! Every helper returns the gateway's `Result`; failures have already been
//! shown to the operator by the time a helper returns `Err`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde::de::IgnoredAny;

use super::error::ApiError;
use super::gateway::Gateway;
use super::resource::{Resource, RowAction};
use super::transport::{ApiRequest, Transport};
use super::types::{
    AccountUpdate, Book, BookDraft, BookRanking, Category, CategoryDraft, DashboardStats, ListPage, LoginRequest,
    LoginResponse, PasswordChange, RegisterRequest, StatisticsOverview, User, UserPatch,
};

/// Pagination and filtering for list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub skip: u64,
    pub limit: u64,
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn page(skip: u64, limit: u64) -> Self {
        Self { skip, limit, ..Self::default() }
    }

    #[must_use]
    pub fn search(mut self, keyword: &str) -> Self {
        let keyword = keyword.trim();
        self.search = (!keyword.is_empty()).then(|| keyword.to_owned());
        self
    }

    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    fn apply(&self, mut request: ApiRequest) -> ApiRequest {
        request = request.query("skip", self.skip).query("limit", self.limit);
        if let Some(search) = &self.search {
            request = request.query("search", search);
        }
        for (key, value) in &self.filters {
            request = request.query(key.clone(), value);
        }
        request
    }
}

fn acknowledge(_: IgnoredAny) {}

// =============================================================
// Account
// =============================================================

/// `POST /user/login`.
///
/// # Errors
///
/// Returns the gateway's classified error. Wrong credentials are a 401.
pub async fn login<T: Transport>(gateway: &Gateway<T>, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    gateway.send(ApiRequest::post("/user/login").json(credentials)).await
}

/// Log in and populate the session with the token and profile.
///
/// A reply without an embedded profile is followed by `GET /user/me` under
/// the new token.
///
/// # Errors
///
/// Returns the gateway's classified error; the session ends up empty.
pub async fn sign_in<T: Transport>(gateway: &Gateway<T>, credentials: &LoginRequest) -> Result<User, ApiError> {
    let LoginResponse { token, user } = login(gateway, credentials).await?;
    let session = gateway.session();
    session.set_token(token);
    let user = match user {
        Some(user) => user,
        None => match current_user(gateway).await {
            Ok(user) => user,
            Err(e) => {
                session.logout();
                return Err(e);
            }
        },
    };
    session.set_user(user.clone());
    leptos::logging::log!("signed in as {}", user.username);
    Ok(user)
}

/// Drop the local session. The backend keeps no logout endpoint.
pub fn sign_out<T: Transport>(gateway: &Gateway<T>) {
    gateway.session().logout();
}

/// `POST /user/register`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn register<T: Transport>(gateway: &Gateway<T>, request: &RegisterRequest) -> Result<User, ApiError> {
    gateway.send(ApiRequest::post("/user/register").json(request)).await
}

/// `GET /user/me`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn current_user<T: Transport>(gateway: &Gateway<T>) -> Result<User, ApiError> {
    gateway.send(ApiRequest::get("/user/me")).await
}

/// `PUT /user/me`, then merge the same fields into the session profile.
///
/// # Errors
///
/// Returns the gateway's classified error; the session is left untouched.
pub async fn update_profile<T: Transport>(gateway: &Gateway<T>, patch: &UserPatch) -> Result<User, ApiError> {
    let user: User = gateway.send(ApiRequest::put("/user/me").json(patch)).await?;
    gateway.session().update_user_partial(patch);
    Ok(user)
}

/// `POST /user/me/change-password`.
///
/// # Errors
///
/// Returns the gateway's classified error. A wrong current password is a 400.
pub async fn change_password<T: Transport>(gateway: &Gateway<T>, change: &PasswordChange) -> Result<(), ApiError> {
    gateway
        .send(ApiRequest::post("/user/me/change-password").json(change))
        .await
        .map(acknowledge)
}

/// `PUT /user/{id}` with administrative fields.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn update_account<T: Transport>(
    gateway: &Gateway<T>,
    id: i64,
    update: &AccountUpdate,
) -> Result<User, ApiError> {
    gateway.send(ApiRequest::put(User::item_path(id)).json(update)).await
}

// =============================================================
// Resources
// =============================================================

/// `GET {endpoint}/list?skip&limit[&search][&filters…]`.
///
/// # Errors
///
/// Returns the gateway's classified error; a reply without the resource's
/// rows is a decode error.
pub async fn list<R: Resource, T: Transport>(gateway: &Gateway<T>, query: &ListQuery) -> Result<ListPage<R>, ApiError> {
    let request = query.apply(ApiRequest::get(R::list_path()));
    gateway
        .send_with(request, |payload| {
            ListPage::from_value(payload, R::LIST_KEY).map_err(|e| ApiError::Decode(e.to_string()))
        })
        .await
}

/// `GET {endpoint}/{id}`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn fetch<R: Resource, T: Transport>(gateway: &Gateway<T>, id: i64) -> Result<R, ApiError> {
    gateway.send(ApiRequest::get(R::item_path(id))).await
}

/// `DELETE` on the resource's delete route.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn delete<R: Resource, T: Transport>(gateway: &Gateway<T>, id: i64) -> Result<(), ApiError> {
    gateway.send(ApiRequest::delete(R::delete_path(id))).await.map(acknowledge)
}

/// Run a row action against its endpoint.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn run_action<T: Transport>(gateway: &Gateway<T>, action: RowAction, id: i64) -> Result<(), ApiError> {
    match action {
        RowAction::MarkRead => mark_notification_read(gateway, id).await,
        RowAction::ReturnBook => return_borrow(gateway, id).await,
        RowAction::RenewLoan => renew_borrow(gateway, id).await,
        RowAction::PayFine => pay_fine(gateway, id).await,
        RowAction::CancelReservation => cancel_reservation(gateway, id).await,
        RowAction::CompleteReservation => complete_reservation(gateway, id).await,
        RowAction::HideReview | RowAction::ShowReview => toggle_review_visibility(gateway, id).await,
        RowAction::Activate | RowAction::Deactivate => {
            let update = AccountUpdate { is_active: Some(action == RowAction::Activate), role: None };
            update_account(gateway, id, &update).await.map(drop)
        }
    }
}

// =============================================================
// Catalogue
// =============================================================

/// `POST /book/create`.
///
/// # Errors
///
/// Returns the gateway's classified error. A duplicate number is a 400.
pub async fn create_book<T: Transport>(gateway: &Gateway<T>, draft: &BookDraft) -> Result<Book, ApiError> {
    gateway.send(ApiRequest::post("/book/create").json(draft)).await
}

/// `PUT /book/{id}`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn update_book<T: Transport>(gateway: &Gateway<T>, id: i64, draft: &BookDraft) -> Result<Book, ApiError> {
    gateway.send(ApiRequest::put(Book::item_path(id)).json(draft)).await
}

#[derive(Deserialize)]
struct CategoryTree {
    categories: Vec<Category>,
}

/// `GET /category/tree`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn category_tree<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Category>, ApiError> {
    let tree: CategoryTree = gateway.send(ApiRequest::get("/category/tree")).await?;
    Ok(tree.categories)
}

/// `POST /category/create`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn create_category<T: Transport>(gateway: &Gateway<T>, draft: &CategoryDraft) -> Result<Category, ApiError> {
    gateway.send(ApiRequest::post("/category/create").json(draft)).await
}

/// `PUT /category/{id}`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn update_category<T: Transport>(
    gateway: &Gateway<T>,
    id: i64,
    draft: &CategoryDraft,
) -> Result<Category, ApiError> {
    gateway.send(ApiRequest::put(Category::item_path(id)).json(draft)).await
}

/// `DELETE /category/{id}`. The backend refuses categories with children
/// unless `force` is set.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn delete_category<T: Transport>(gateway: &Gateway<T>, id: i64, force: bool) -> Result<(), ApiError> {
    let mut request = ApiRequest::delete(Category::delete_path(id));
    if force {
        request = request.query("force", true);
    }
    gateway.send(request).await.map(acknowledge)
}

// =============================================================
// Circulation
// =============================================================

/// `POST /borrow/return/{id}`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn return_borrow<T: Transport>(gateway: &Gateway<T>, id: i64) -> Result<(), ApiError> {
    let request = ApiRequest::post(format!("/borrow/return/{id}")).json(&serde_json::json!({}));
    gateway.send(request).await.map(acknowledge)
}

/// `POST /borrow/renew/{id}` with the backend's default extension.
///
/// # Errors
///
/// Returns the gateway's classified error. Renewal limits are a 400.
pub async fn renew_borrow<T: Transport>(gateway: &Gateway<T>, id: i64) -> Result<(), ApiError> {
    let request = ApiRequest::post(format!("/borrow/renew/{id}")).json(&serde_json::json!({}));
    gateway.send(request).await.map(acknowledge)
}

/// `POST /borrow/pay-fine/{id}`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn pay_fine<T: Transport>(gateway: &Gateway<T>, id: i64) -> Result<(), ApiError> {
    gateway.send(ApiRequest::post(format!("/borrow/pay-fine/{id}"))).await.map(acknowledge)
}

/// `POST /reservation/cancel/{id}`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn cancel_reservation<T: Transport>(gateway: &Gateway<T>, id: i64) -> Result<(), ApiError> {
    let request = ApiRequest::post(format!("/reservation/cancel/{id}")).json(&serde_json::json!({}));
    gateway.send(request).await.map(acknowledge)
}

/// `POST /reservation/complete/{id}`: the reserved copy is handed out.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn complete_reservation<T: Transport>(gateway: &Gateway<T>, id: i64) -> Result<(), ApiError> {
    gateway
        .send(ApiRequest::post(format!("/reservation/complete/{id}")))
        .await
        .map(acknowledge)
}

/// `POST /review/toggle-visibility/{id}`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn toggle_review_visibility<T: Transport>(gateway: &Gateway<T>, id: i64) -> Result<(), ApiError> {
    gateway
        .send(ApiRequest::post(format!("/review/toggle-visibility/{id}")))
        .await
        .map(acknowledge)
}

// =============================================================
// Notifications
// =============================================================

/// `POST /notification/mark-read/{id}`.
///
/// # Errors
///
/// Returns the gateway's classified error. Another reader's notification is
/// a 403.
pub async fn mark_notification_read<T: Transport>(gateway: &Gateway<T>, id: i64) -> Result<(), ApiError> {
    gateway
        .send(ApiRequest::post(format!("/notification/mark-read/{id}")))
        .await
        .map(acknowledge)
}

/// `POST /notification/mark-all-read`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn mark_all_notifications_read<T: Transport>(gateway: &Gateway<T>) -> Result<(), ApiError> {
    gateway
        .send(ApiRequest::post("/notification/mark-all-read"))
        .await
        .map(acknowledge)
}

// =============================================================
// Statistics
// =============================================================

/// `GET /stats/dashboard`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn dashboard_stats<T: Transport>(gateway: &Gateway<T>) -> Result<DashboardStats, ApiError> {
    gateway.send(ApiRequest::get("/stats/dashboard")).await
}

/// `GET /stats/overview`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn statistics_overview<T: Transport>(gateway: &Gateway<T>) -> Result<StatisticsOverview, ApiError> {
    gateway.send(ApiRequest::get("/stats/overview")).await
}

#[derive(Deserialize)]
struct Rankings {
    rankings: Vec<BookRanking>,
}

/// `GET /stats/book-ranking/borrow?limit`.
///
/// # Errors
///
/// Returns the gateway's classified error.
pub async fn borrow_ranking<T: Transport>(gateway: &Gateway<T>, limit: u32) -> Result<Vec<BookRanking>, ApiError> {
    let ranked: Rankings = gateway
        .send(ApiRequest::get("/stats/book-ranking/borrow").query("limit", limit))
        .await?;
    Ok(ranked.rankings)
}
