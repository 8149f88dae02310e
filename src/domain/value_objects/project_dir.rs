//! Lexical cleaning of project directories.
//!
//! Project directories are repo-relative and never touch the filesystem here;
//! cleaning is purely textual so that `dir: infra/` and `dir: ./infra` name
//! the same project key.

/// Returns the shortest path equivalent to `dir` by lexical processing.
///
/// - repeated separators collapse to one
/// - `.` elements are dropped
/// - `..` consumes the previous element where one exists
/// - a trailing separator is removed
///
/// The repo root (`/`, `""`, `.`) is always reported as `.`.
pub fn clean_dir(dir: &str) -> String {
    let rooted = dir.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in dir.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (_, true) => ".".to_string(),
        (true, false) => format!("/{}", joined),
        (false, false) => joined,
    }
}
