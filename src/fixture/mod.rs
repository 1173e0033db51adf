use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::models::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("fixture archive {path} could not be read: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for FixtureError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "fixture_unavailable",
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// The canned export package served by export and reexport.
///
/// The file is read from disk on every call and never written.
#[derive(Debug, Clone)]
pub struct FixtureArchive {
    path: PathBuf,
}

impl FixtureArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_available(&self) -> bool {
        self.path.is_file()
    }

    /// Read the archive bytes verbatim
    pub async fn read(&self) -> Result<Vec<u8>, FixtureError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FixtureError::Read {
                path: self.path.display().to_string(),
                source,
            })?;
        debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_returns_file_bytes() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("export.zip");
        std::fs::write(&path, b"PK\x03\x04fixture").unwrap();

        let fixture = FixtureArchive::new(&path);
        assert!(fixture.is_available());
        assert_eq!(fixture.read().await.unwrap(), b"PK\x03\x04fixture");
    }

    #[tokio::test]
    async fn test_read_picks_up_replaced_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("export.zip");
        std::fs::write(&path, b"first").unwrap();

        let fixture = FixtureArchive::new(&path);
        assert_eq!(fixture.read().await.unwrap(), b"first");

        std::fs::write(&path, b"second").unwrap();
        assert_eq!(fixture.read().await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let fixture = FixtureArchive::new(temp_dir.path().join("missing.zip"));

        assert!(!fixture.is_available());
        let err = fixture.read().await.unwrap_err();
        let FixtureError::Read { path, source } = err;
        assert!(path.ends_with("missing.zip"));
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_directory_is_not_available() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        assert!(!FixtureArchive::new(temp_dir.path()).is_available());
    }

    #[test]
    fn test_error_maps_to_internal_server_error() {
        let err = FixtureError::Read {
            path: "fixtures/example.zip".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_shipped_fixture_is_zip_archive() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/example.zip");
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_shipped_manifest_has_no_jva_header() {
        // The archive is stored uncompressed, so the manifest is readable in place
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/example.zip");
        let bytes = std::fs::read(path).unwrap();
        let contains = |needle: &[u8]| bytes.windows(needle.len()).any(|w| w == needle);

        assert!(contains(b"rueckgrat.xml"));
        assert!(contains(b"<rueckgrat>"));
        assert!(contains(b"<Header>"));
        assert!(!contains(b"<Jva"));
    }
}
