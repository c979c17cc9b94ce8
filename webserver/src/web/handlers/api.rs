//! REST API handlers
//!
//! Catalog listing and the book details aggregation endpoint

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use shared::{BookId, DetailsRequest, UserId};
use tracing::debug;

use crate::error::WebServerResult;
use crate::state::WebServerState;

/// Query string of the details endpoint
#[derive(Debug, Default, Deserialize)]
pub struct DetailsQuery {
    pub mode: Option<String>,
    #[serde(rename = "userId", alias = "user_id")]
    pub user_id: Option<String>,
}

impl DetailsQuery {
    /// Build the aggregation request; a blank user id means no user
    pub fn into_request(self, book_id: &str) -> WebServerResult<(Option<String>, DetailsRequest)> {
        let mut request = DetailsRequest::new(BookId::new(book_id)?);
        if let Some(user_id) = self.user_id.filter(|u| !u.trim().is_empty()) {
            request = request.with_user(UserId::new(user_id)?);
        }
        Ok((self.mode, request))
    }
}

/// Serialize with two-space indentation
fn pretty_json<T: Serialize>(body: &T) -> WebServerResult<Response> {
    let text = serde_json::to_string_pretty(body)?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], text).into_response())
}

/// List the catalog - GET /api/books
pub async fn list_books(State(state): State<Arc<WebServerState>>) -> WebServerResult<Response> {
    let books = state.aggregator.list_books().await;
    debug!(count = books.len(), "Listing books");
    pretty_json(&books)
}

/// Aggregate one book - GET /api/books/:id/details
pub async fn book_details(
    State(state): State<Arc<WebServerState>>,
    Path(id): Path<String>,
    Query(query): Query<DetailsQuery>,
) -> WebServerResult<Response> {
    let (mode, request) = query.into_request(&id)?;
    let details = state.aggregator.dispatch(mode.as_deref(), &request).await?;
    pretty_json(&details)
}
