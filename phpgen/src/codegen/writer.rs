//! Write generated classes without clobbering existing files

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::defaults::FILE_EXTENSION;
use crate::error::Result;

/// Result of a write attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    /// `false` when a file already existed at `path` and was left untouched
    pub written: bool,
}

/// Path of the file generated for `class_name` inside `directory`
pub fn class_file_path(directory: &str, class_name: &str) -> PathBuf {
    let directory = directory.trim_end_matches('/');
    Path::new(directory).join(format!("{}.{}", class_name, FILE_EXTENSION))
}

/// Write `content` to `directory/<class_name>.php` unless that file exists.
///
/// The directory is created if missing; its parent must already exist. The
/// file only appears at its final path once fully written.
pub fn write_class(directory: &str, class_name: &str, content: &str) -> Result<WriteOutcome> {
    let dir = Path::new(directory.trim_end_matches('/'));
    ensure_directory(dir)?;

    let path = class_file_path(directory, class_name);
    let written = persist_new(dir, &path, |out| out.write_all(content.as_bytes()))?;
    if !written {
        debug!("{:?} already exists, leaving it untouched", path);
    }
    Ok(WriteOutcome { path, written })
}

/// Create `dir` (not its parents). A directory that already exists, or that a
/// concurrent run created first, is fine.
fn ensure_directory(dir: &Path) -> io::Result<()> {
    match fs::create_dir(dir) {
        Ok(()) => {
            debug!("Created directory {:?}", dir);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Stage the content in a temporary file next to `path`, then link it into
/// place. Returns `false` if `path` already exists. On any failure the
/// temporary file is removed and `path` is left as it was.
fn persist_new<F>(dir: &Path, path: &Path, fill: F) -> io::Result<bool>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let mut staged = NamedTempFile::new_in(dir)?;
    fill(&mut staged)?;
    staged.flush()?;
    staged.as_file().sync_all()?;

    match staged.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenError;

    #[test]
    fn test_class_file_path() {
        assert_eq!(
            class_file_path("gen/Constant", "OrderItems"),
            PathBuf::from("gen/Constant/OrderItems.php")
        );
        assert_eq!(
            class_file_path("gen/Constant/", "OrderItems"),
            PathBuf::from("gen/Constant/OrderItems.php")
        );
    }

    #[test]
    fn test_second_write_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let first = write_class(dir, "Users", "first").unwrap();
        assert!(first.written);
        assert_eq!(fs::read_to_string(&first.path).unwrap(), "first");

        let second = write_class(dir, "Users", "second").unwrap();
        assert!(!second.written);
        assert_eq!(second.path, first.path);
        assert_eq!(fs::read_to_string(&second.path).unwrap(), "first");
    }

    #[test]
    fn test_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("Model");

        let outcome = write_class(dir.to_str().unwrap(), "Users", "<?php\n").unwrap();
        assert!(outcome.written);
        assert!(dir.is_dir());
        assert_eq!(outcome.path, dir.join("Users.php"));
    }

    #[test]
    fn test_file_in_place_of_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("Model");
        fs::write(&dir, "not a directory").unwrap();

        let err = write_class(dir.to_str().unwrap(), "Users", "<?php\n").unwrap_err();
        assert!(matches!(err, CodegenError::IoError(_)));
    }

    #[test]
    fn test_missing_parent_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("Database").join("Model");

        let err = write_class(dir.to_str().unwrap(), "Users", "<?php\n").unwrap_err();
        assert!(matches!(err, CodegenError::IoError(_)));
        assert!(!dir.exists());
    }

    #[test]
    fn test_directory_created_elsewhere_is_accepted() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("Model");
        fs::create_dir(&dir).unwrap();

        ensure_directory(&dir).unwrap();
        ensure_directory(&dir).unwrap();

        let outcome = write_class(dir.to_str().unwrap(), "Users", "<?php\n").unwrap();
        assert!(outcome.written);
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Big.php");

        let err = persist_new(tmp.path(), &path, |out| {
            out.write_all(b"<?php\nclass Big")?;
            Err(io::Error::other("no space left on device"))
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "no space left on device");
        assert!(!path.exists());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);

        // The next run is not blocked by leftovers.
        let outcome = write_class(tmp.path().to_str().unwrap(), "Big", "complete").unwrap();
        assert!(outcome.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "complete");
    }

    #[test]
    fn test_skipped_write_leaves_no_staging_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        write_class(dir, "Users", "first").unwrap();
        let second = write_class(dir, "Users", "second").unwrap();
        assert!(!second.written);
        assert_eq!(fs::read_to_string(&second.path).unwrap(), "first");
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }
}
