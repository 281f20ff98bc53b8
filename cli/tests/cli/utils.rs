use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Writes `contents` to `name` below the test scratch directory and returns its path.
pub fn fixture(name: impl AsRef<Path>, contents: &str) -> io::Result<PathBuf> {
    let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, contents)?;
    Ok(path)
}

/// Settings file with the given JSON document.
pub fn settings(name: &str, json: &str) -> io::Result<PathBuf> {
    fixture(Path::new(name).join("settings.json"), json)
}
