#![allow(dead_code)]

use std::{io::Write, path::Path, sync::OnceLock};

use tempfile::{NamedTempFile, TempDir};

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Writes `contents` to a fresh temporary `.test` file.
pub fn fixture(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("testfile_")
        .suffix(".test")
        .tempfile()
        .expect("Failed to create fixture file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write fixture file");
    file.flush().expect("Failed to flush fixture file");
    file
}

/// A path inside `dir` that does not exist.
pub fn missing_path(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    assert!(!Path::new(&path).exists());
    path
}
