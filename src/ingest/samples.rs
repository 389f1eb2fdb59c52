// Sample library - read-only directory of ready-made HTML files
//
// Samples are addressed by bare file name. Anything that could step outside
// the directory resolves to NotFound, the same answer a missing file gets.

use glob::{MatchOptions, Pattern};
use std::path::{Component, Path, PathBuf};

use super::text::has_html_extension;
use crate::errors::IngestError;

#[derive(Debug, Clone)]
pub struct SampleLibrary {
    dir: PathBuf,
}

impl SampleLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File names of the `*.html` samples, sorted. Empty when the directory
    /// does not exist.
    pub fn list(&self) -> Vec<String> {
        let Some(dir) = self.dir.to_str() else {
            tracing::warn!(dir = %self.dir.display(), "Samples directory is not valid UTF-8");
            return Vec::new();
        };

        let pattern = format!("{}/*.html", Pattern::escape(dir));
        let options = MatchOptions {
            case_sensitive: false,
            ..MatchOptions::new()
        };

        let entries = match glob::glob_with(&pattern, options) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(pattern = %pattern, "Bad samples pattern: {}", e);
                return Vec::new();
            }
        };

        let mut files: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
            .collect();
        files.sort();
        files
    }

    /// Map a sample name to a path inside the samples directory.
    pub async fn resolve(&self, name: &str) -> Result<PathBuf, IngestError> {
        if !is_plain_file_name(name) || !has_html_extension(name) {
            tracing::warn!(sample = %name, "Rejected sample name");
            return Err(sample_not_found());
        }

        let root = tokio::fs::canonicalize(&self.dir)
            .await
            .map_err(|_| sample_not_found())?;
        let resolved = tokio::fs::canonicalize(root.join(name))
            .await
            .map_err(|_| sample_not_found())?;

        // Symlinks inside the directory may still point elsewhere
        if !resolved.starts_with(&root) {
            tracing::warn!(sample = %name, "Sample resolves outside the samples directory");
            return Err(sample_not_found());
        }

        Ok(resolved)
    }
}

fn sample_not_found() -> IngestError {
    IngestError::NotFound("Sample file not found".to_string())
}

/// Exactly one normal path component, with no separator of either flavour.
fn is_plain_file_name(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use std::fs;

    fn library_with(files: &[(&str, &str)]) -> (tempfile::TempDir, SampleLibrary) {
        let dir = tempfile::tempdir().unwrap();
        let samples = dir.path().join("samples");
        fs::create_dir(&samples).unwrap();
        for (name, body) in files {
            fs::write(samples.join(name), body).unwrap();
        }
        let library = SampleLibrary::new(samples);
        (dir, library)
    }

    #[test]
    fn test_plain_file_name() {
        assert!(is_plain_file_name("demo.html"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("."));
        assert!(!is_plain_file_name("../secrets.html"));
        assert!(!is_plain_file_name("nested/demo.html"));
        assert!(!is_plain_file_name("..\\secrets.html"));
        assert!(!is_plain_file_name("/etc/passwd"));
    }

    #[test]
    fn test_list_only_html_sorted() {
        let (_tmp, library) = library_with(&[
            ("zeta.html", "z"),
            ("alpha.html", "a"),
            ("notes.txt", "n"),
            ("Upper.HTML", "u"),
        ]);
        assert_eq!(library.list(), vec!["Upper.HTML", "alpha.html", "zeta.html"]);
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let library = SampleLibrary::new(dir.path().join("nope"));
        assert!(library.list().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_existing_sample() {
        let (_tmp, library) = library_with(&[("demo.html", "<p>demo</p>")]);
        let path = library.resolve("demo.html").await.unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "<p>demo</p>");
    }

    #[tokio::test]
    async fn test_resolve_traversal_is_not_found() {
        let (tmp, library) = library_with(&[("demo.html", "x")]);
        fs::write(tmp.path().join("secrets.html"), "secret").unwrap();

        let err = library.resolve("../secrets.html").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_missing_and_non_html_are_not_found() {
        let (_tmp, library) = library_with(&[("notes.txt", "x")]);
        assert_eq!(
            library.resolve("absent.html").await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            library.resolve("notes.txt").await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_resolve_symlink_escape_is_not_found() {
        let (tmp, library) = library_with(&[]);
        let outside = tmp.path().join("outside.html");
        fs::write(&outside, "secret").unwrap();
        std::os::unix::fs::symlink(&outside, library.dir().join("link.html")).unwrap();

        let err = library.resolve("link.html").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
