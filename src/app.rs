use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use crate::data::filter;
use crate::state::AppState;
use crate::web::page;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the application router: one page, two methods.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(filter_data))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Initial page view: the form with no results and no error.
async fn index() -> Html<String> {
    Html(page::render_page(None, None))
}

/// Form payload. `value` is optional so that an absent field becomes the
/// validation error, not a rejected request.
#[derive(Debug, Deserialize)]
struct FilterForm {
    value: Option<String>,
}

/// Form submission: validate, scan, respond with exactly one of table or
/// error. Always HTTP 200.
async fn filter_data(State(state): State<AppState>, Form(form): Form<FilterForm>) -> Html<String> {
    match filter::run_query(&state.dataset, form.value.as_deref()) {
        Ok(indices) => {
            let table = page::render_table(&state.dataset, &indices);
            Html(page::render_page(Some(&table), None))
        }
        Err(err) => Html(page::render_page(None, Some(&err.to_string()))),
    }
}
