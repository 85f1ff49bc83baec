//! Filesystem helpers for CareLink request and report files.
//!
//! Paths are opened through `cap-std` directory handles so every access is
//! scoped to an explicitly opened directory.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Write};
use std::path::Component;

/// Open a UTF-8 file path for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open the directory containing `path` and return it with the file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Report whether `path` names a regular file.
///
/// A missing file or parent directory surfaces as
/// [`io::ErrorKind::NotFound`].
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Write `contents` to `path`, creating missing parent directories and
/// replacing any existing file.
pub fn write_report(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    let mut file = dir.create(name.as_str())?;
    file.write_all(contents)?;
    file.flush()
}

/// Ensure the parent directory for `path` exists.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }
    let (base_dir, relative) = base_dir_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base_dir.create_dir_all(&relative)
}

/// Split a directory path into an ambient base directory and the path
/// relative to it.
///
/// Absolute paths are anchored at the filesystem root (or the Windows drive
/// prefix); relative paths at the current directory.
pub fn base_dir_and_relative(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_dir = dir.as_std_path();
    let base = match std_dir.components().next() {
        Some(Component::Prefix(prefix)) => {
            let prefix_str = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(prefix_str).join(std::path::MAIN_SEPARATOR.to_string())
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string()),
        _ => {
            let handle = fs_utf8::Dir::open_ambient_dir(".", ambient_authority())?;
            return Ok((handle, dir.to_path_buf()));
        }
    };
    let relative = dir
        .strip_prefix(&base)
        .map_err(|_| io::Error::other("failed to strip base from directory path"))?
        .to_path_buf();
    let handle = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((handle, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
        (tmp, root)
    }

    #[test]
    fn write_report_creates_missing_directories() {
        let (_tmp, root) = workspace();
        let target = root.join("reports/nested/match.json");
        write_report(&target, b"{}").expect("write report");

        let mut contents = String::new();
        open_utf8_file(&target)
            .expect("open report")
            .read_to_string(&mut contents)
            .expect("read report");
        assert_eq!(contents, "{}");
    }

    #[test]
    fn write_report_replaces_existing_contents() {
        let (_tmp, root) = workspace();
        let target = root.join("match.json");
        write_report(&target, b"first, longer payload").expect("first write");
        write_report(&target, b"second").expect("second write");
        let written = std::fs::read_to_string(target.as_std_path()).expect("read back");
        assert_eq!(written, "second");
    }

    #[test]
    fn regular_file_check_distinguishes_directories() {
        let (_tmp, root) = workspace();
        let file = root.join("request.json");
        std::fs::write(file.as_std_path(), b"{}").expect("write request");
        assert!(is_regular_file(&file).expect("inspect file"));
        assert!(!is_regular_file(&root).expect("inspect directory"));
    }

    #[test]
    fn regular_file_check_reports_missing_paths() {
        let (_tmp, root) = workspace();
        let err = is_regular_file(&root.join("absent.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn absolute_directories_split_at_the_root() {
        let (_tmp, root) = workspace();
        let (_dir, relative) = base_dir_and_relative(&root).expect("split path");
        assert!(relative.is_relative());
        assert!(root.as_str().ends_with(relative.as_str()));
    }
}
