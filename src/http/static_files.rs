//! Static file serving for the browser front-end.
//!
//! Files are served from the configured directory. A request for a directory
//! (including `/`) serves its `index.html`.

use std::path::Path;

use tower_http::services::ServeDir;

use crate::config::StaticFilesConfig;

/// Create the static file service for the configured directory.
///
/// A missing directory is not fatal: the service answers 404 and a warning is
/// logged so the API stays available without a front-end.
pub fn create_static_service(config: &StaticFilesConfig) -> ServeDir {
    let dir = Path::new(&config.dir);
    if !dir.is_dir() {
        tracing::warn!(dir = %config.dir, "Static files directory not found");
    }
    ServeDir::new(dir).append_index_html_on_directories(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_static_service_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = StaticFilesConfig {
            enabled: true,
            dir: dir.path().to_string_lossy().into_owned(),
        };
        // Actual file serving is exercised by the integration tests
        let _service = create_static_service(&config);
    }

    #[test]
    fn test_create_static_service_missing_dir() {
        let config = StaticFilesConfig {
            enabled: true,
            dir: "/nonexistent/riskscore/public".to_string(),
        };
        let _service = create_static_service(&config);
    }
}
