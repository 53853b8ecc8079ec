//! Uploaded image assets referenced by records.

use std::path::{Component, Path, PathBuf};

/// URL prefix under which uploaded images are served.
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// True when `image_url` points at a locally uploaded file.
pub fn is_uploaded_asset(image_url: &str) -> bool {
    image_url.starts_with(UPLOADS_PREFIX)
}

/// Maps `/uploads/<name>` onto `uploads_dir`. Rejects anything that would
/// escape the directory.
pub fn resolve_asset(uploads_dir: &Path, image_url: &str) -> Option<PathBuf> {
    let relative = Path::new(image_url.strip_prefix(UPLOADS_PREFIX)?);
    if relative.as_os_str().is_empty()
        || !relative.components().all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(uploads_dir.join(relative))
}

/// Deletes an uploaded asset. Non-upload URLs and already-missing files are
/// ignored; other failures are logged, never returned.
pub async fn release_asset(uploads_dir: &Path, image_url: &str) {
    if !is_uploaded_asset(image_url) {
        return;
    }
    let Some(path) = resolve_asset(uploads_dir, image_url) else {
        tracing::warn!(image_url, "refusing to release asset outside uploads dir");
        return;
    };
    match tokio::fs::remove_file(&path).await {
        Ok(()) => tracing::debug!(path = %path.display(), "released uploaded asset"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), "could not delete uploaded asset: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_uploads() {
        assert!(is_uploaded_asset("/uploads/logo-1.png"));
        assert!(!is_uploaded_asset("https://example.com/logo.png"));
        assert!(!is_uploaded_asset(""));
    }

    #[test]
    fn resolve_stays_inside_dir() {
        let dir = Path::new("/srv/uploads");
        assert_eq!(
            resolve_asset(dir, "/uploads/logo.png"),
            Some(PathBuf::from("/srv/uploads/logo.png"))
        );
        assert_eq!(resolve_asset(dir, "/uploads/../secret"), None);
        assert_eq!(resolve_asset(dir, "/uploads/"), None);
        assert_eq!(resolve_asset(dir, "/uploads//etc/passwd"), None);
    }

    #[tokio::test]
    async fn release_deletes_file_and_ignores_missing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("logo.png");
        std::fs::write(&file, b"png").unwrap();
        release_asset(dir.path(), "/uploads/logo.png").await;
        assert!(!file.exists());
        release_asset(dir.path(), "/uploads/logo.png").await;
        release_asset(dir.path(), "https://example.com/x.png").await;
    }
}
