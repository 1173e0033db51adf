use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::IntoResponse,
};
use tracing::debug;

use crate::fixture::FixtureError;
use crate::AppState;

pub const DUMMY_TOKEN: &str = "dummytoken";

const ZIP_CONTENT_TYPE: &str = "application/zip";

pub fn routes() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/login", axum::routing::post(login))
        .route("/export/:prison", axum::routing::get(export))
        .route("/reexport/:guid", axum::routing::get(reexport))
        .route("/commit/:guid", axum::routing::put(commit))
}

/// POST /landesarchiv/login
/// Hand out the same token whatever credentials are posted
async fn login() -> &'static str {
    DUMMY_TOKEN
}

/// GET /landesarchiv/export/:prison
/// The capture is only logged from the raw URI, so undecodable segments still succeed
async fn export(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, FixtureError> {
    debug!("Export requested: {}", uri.path());
    serve_fixture(&state).await
}

/// GET /landesarchiv/reexport/:guid
/// Serves the export fixture, which lacks the /rueckgrat/Header/Jva element
/// a real reexport carries.
async fn reexport(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, FixtureError> {
    debug!("Reexport requested: {}", uri.path());
    serve_fixture(&state).await
}

/// PUT /landesarchiv/commit/:guid
async fn commit(uri: Uri) -> StatusCode {
    debug!("Commit acknowledged: {}", uri.path());
    StatusCode::OK
}

async fn serve_fixture(state: &AppState) -> Result<impl IntoResponse, FixtureError> {
    let bytes = state.fixture.read().await?;
    Ok(([(header::CONTENT_TYPE, ZIP_CONTENT_TYPE)], bytes))
}
