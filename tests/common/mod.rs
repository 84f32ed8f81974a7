#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

pub mod temp_files {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    // Global counter and lock for thread-safe temporary file creation
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    static TEMP_LOCK: Mutex<()> = Mutex::new(());

    /// Creates a temporary model file with a unique name and the given extension
    pub fn create_temp_model(content: &str, ext: &str) -> PathBuf {
        let _lock = TEMP_LOCK.lock().unwrap();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let path = std::env::temp_dir().join(format!(
            "hyperdoc_test_{}_{}_{}.{}",
            std::process::id(),
            counter,
            nanos,
            ext
        ));

        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn create_temp_yaml(content: &str) -> PathBuf {
        create_temp_model(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> PathBuf {
        create_temp_model(content, "json")
    }

    pub fn create_temp_toml(content: &str) -> PathBuf {
        create_temp_model(content, "toml")
    }

    /// Cleanup temporary files (best effort)
    pub fn cleanup_temp_files(paths: &[PathBuf]) {
        for path in paths {
            let _ = std::fs::remove_file(path);
        }
    }
}

pub mod fixtures {
    use hyperdoc::request::RequestInfo;
    use http::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
    use std::path::PathBuf;

    /// Path of a model under `tests/models`
    pub fn model_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("models")
            .join(name)
    }

    /// Request for `application_url` preferring `language`
    pub fn request(application_url: &str, language: &'static str) -> RequestInfo {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(language));
        RequestInfo::new(headers).with_application_url(application_url.parse().unwrap())
    }
}
