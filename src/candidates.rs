//! Directory candidate collection
//!
//! Turns command-line arguments into the list of directories offered to the
//! selector. A trailing `/*` expands to the immediate subdirectories of the
//! base path; anything that isn't a directory is reported as a [`Warning`]
//! and skipped.

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

/// Argument suffix meaning "every immediate subdirectory of this path"
pub const WILDCARD_SUFFIX: &str = "/*";

/// True iff `path` exists and is a directory (symlinks are followed)
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// A recoverable problem with one argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The argument, or the base of a wildcard argument, is not a directory
    DirectoryNotFound(String),
    /// The wildcard base exists but could not be listed
    Unreadable { path: String, reason: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DirectoryNotFound(path) => write!(f, "Directory not found: {path}"),
            Warning::Unreadable { path, reason } => {
                write!(f, "Cannot read directory {path}: {reason}")
            }
        }
    }
}

/// Collected candidates plus the warnings produced along the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    /// Directory paths, in argument order
    pub entries: Vec<String>,
    pub warnings: Vec<Warning>,
}

impl Candidates {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_dir(&mut self, path: String) {
        debug!(candidate = %path, "collected");
        self.entries.push(path);
    }

    /// Add one argument, literal or wildcard
    pub fn add_argument(&mut self, arg: &str) {
        match arg.strip_suffix(WILDCARD_SUFFIX) {
            Some(base) => self.expand_wildcard(base),
            None if is_directory(arg) => self.push_dir(arg.to_string()),
            None => self.warnings.push(Warning::DirectoryNotFound(arg.to_string())),
        }
    }

    fn expand_wildcard(&mut self, base: &str) {
        if !is_directory(base) {
            self.warnings
                .push(Warning::DirectoryNotFound(base.to_string()));
            return;
        }

        let read_dir = match std::fs::read_dir(base) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                self.warnings.push(Warning::Unreadable {
                    path: base.to_string(),
                    reason: e.to_string(),
                });
                return;
            }
        };

        let mut names: Vec<String> = read_dir
            .filter_map(|entry| match entry {
                Ok(entry) => match entry.file_name().into_string() {
                    Ok(name) => Some(name),
                    Err(name) => {
                        warn!("skipping non-UTF-8 entry {:?} in {}", name, base);
                        None
                    }
                },
                Err(e) => {
                    debug!("skipping unreadable entry in {}: {}", base, e);
                    None
                }
            })
            .collect();
        names.sort();

        for name in names {
            let full = Path::new(base).join(&name);
            if is_directory(&full) {
                self.push_dir(full.to_string_lossy().into_owned());
            }
        }
    }
}

/// Collect candidates from all arguments, in order.
///
/// Never fails; problems are recorded in [`Candidates::warnings`].
pub fn collect_candidates<I, S>(args: I) -> Candidates
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates = Candidates::default();
    for arg in args {
        candidates.add_argument(arg.as_ref());
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }

    /// base/{a,b} directories plus a regular file base/c
    fn fixture() -> (TempDir, String) {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("group");
        std::fs::create_dir_all(base.join("a")).unwrap();
        std::fs::create_dir_all(base.join("b")).unwrap();
        std::fs::write(base.join("c"), "not a dir").unwrap();
        let base = path_str(&base);
        (temp, base)
    }

    #[test]
    fn test_is_directory() {
        let (_temp, base) = fixture();
        assert!(is_directory(&base));
        assert!(!is_directory(format!("{base}/c")));
        assert!(!is_directory(format!("{base}/missing")));
        assert!(!is_directory(""));
    }

    #[test]
    fn test_wildcard_yields_only_subdirectories() {
        let (_temp, base) = fixture();

        let candidates = collect_candidates([format!("{base}/*")]);

        assert_eq!(
            candidates.entries,
            vec![format!("{base}/a"), format!("{base}/b")]
        );
        assert!(candidates.warnings.is_empty());
    }

    #[test]
    fn test_wildcard_missing_base_warns_once() {
        let temp = TempDir::new().unwrap();
        let base = path_str(&temp.path().join("nope"));

        let candidates = collect_candidates([format!("{base}/*")]);

        assert!(candidates.is_empty());
        assert_eq!(candidates.warnings, vec![Warning::DirectoryNotFound(base)]);
    }

    #[test]
    fn test_wildcard_on_file_base_warns() {
        let (_temp, base) = fixture();
        let file = format!("{base}/c");

        let candidates = collect_candidates([format!("{file}/*")]);

        assert!(candidates.is_empty());
        assert_eq!(candidates.warnings, vec![Warning::DirectoryNotFound(file)]);
    }

    #[test]
    fn test_literal_missing_path_warns_verbatim() {
        let candidates = collect_candidates(["./does/not/exist"]);

        assert!(candidates.is_empty());
        assert_eq!(
            candidates.warnings,
            vec![Warning::DirectoryNotFound("./does/not/exist".to_string())]
        );
        assert_eq!(
            candidates.warnings[0].to_string(),
            "Directory not found: ./does/not/exist"
        );
    }

    #[test]
    fn test_literal_directory_kept_as_is() {
        let (_temp, base) = fixture();
        let with_slash = format!("{base}/a/");

        let candidates = collect_candidates([with_slash.clone()]);

        assert_eq!(candidates.entries, vec![with_slash]);
    }

    #[test]
    fn test_argument_order_and_duplicates_preserved() {
        let (_temp, base) = fixture();
        let a = format!("{base}/a");
        let b = format!("{base}/b");

        let candidates = collect_candidates([b.clone(), a.clone(), b.clone()]);

        assert_eq!(candidates.entries, vec![b.clone(), a, b]);
    }

    #[test]
    fn test_warnings_do_not_stop_collection() {
        let (_temp, base) = fixture();

        let candidates = collect_candidates([
            "/definitely/missing".to_string(),
            format!("{base}/a"),
            "/also/missing/*".to_string(),
        ]);

        assert_eq!(candidates.entries, vec![format!("{base}/a")]);
        assert_eq!(candidates.warnings.len(), 2);
    }

    #[test]
    fn test_every_entry_is_a_directory() {
        let (_temp, base) = fixture();

        let candidates = collect_candidates([
            format!("{base}/*"),
            base.clone(),
            format!("{base}/c"),
        ]);

        assert!(!candidates.is_empty());
        assert!(candidates.entries.iter().all(is_directory));
    }

    #[cfg(unix)]
    #[test]
    fn test_wildcard_follows_directory_symlinks() {
        let (_temp, base) = fixture();
        std::os::unix::fs::symlink(format!("{base}/a"), format!("{base}/link")).unwrap();

        let candidates = collect_candidates([format!("{base}/*")]);

        assert!(candidates.entries.contains(&format!("{base}/link")));
    }
}
