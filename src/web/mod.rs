pub mod routes;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::store::ActivityStore;
use self::routes::activities;

/// Build the full application router around an injected store, so tests can
/// run against a fresh store without touching process-wide state.
pub fn app(store: ActivityStore) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/activities") }))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:name/unregister",
            delete(activities::unregister_handler),
        )
        .layer(CatchPanicLayer::new())
        .with_state(store)
}
