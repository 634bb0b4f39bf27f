use std::path::PathBuf;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "MYTASKS_DIR";

/// Resolve the data directory from the `-C` flag and the environment.
///
/// Order: flag, `MYTASKS_DIR`, `$XDG_DATA_HOME/mytasks`, `$HOME/.local/share/mytasks`.
pub fn resolve(flag: Option<&str>) -> PathBuf {
    resolve_with(flag, |name| std::env::var(name).ok())
}

/// Same as [`resolve`] with an injectable environment lookup
pub fn resolve_with(flag: Option<&str>, env: impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(dir) = flag.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(dir) = env(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    let data_home = env("XDG_DATA_HOME")
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            env("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/"))
                .join(".local")
                .join("share")
        });
    data_home.join("mytasks")
}
