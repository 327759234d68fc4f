use std::fs;
use std::path::{Path, PathBuf};

use crate::scripts::errors::ScriptError;
use crate::scripts::natural::natural_cmp;
use crate::scripts::types::{ExtensionFilter, ScriptFile};

/// Resolve `directory` to an absolute path and check that it is a directory.
pub fn resolve_directory(directory: &Path) -> Result<PathBuf, ScriptError> {
    if !directory.is_dir() {
        return Err(ScriptError::DirectoryNotFound {
            path: directory.display().to_string(),
        });
    }

    std::path::absolute(directory).map_err(|source| ScriptError::ReadFailed {
        path: directory.display().to_string(),
        source,
    })
}

/// List the regular files directly inside `directory`.
///
/// Symlinks are followed; subdirectories and special files are skipped.
/// The returned paths are in directory order, which is unspecified.
pub fn list_regular_files(directory: &Path) -> Result<Vec<PathBuf>, ScriptError> {
    let read_failed = |source| ScriptError::ReadFailed {
        path: directory.display().to_string(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(directory).map_err(read_failed)? {
        let path = entry.map_err(read_failed)?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}

/// Keep the paths that pass `filter`.
pub fn filter_by_extension(paths: Vec<PathBuf>, filter: &ExtensionFilter) -> Vec<PathBuf> {
    paths.into_iter().filter(|path| filter.matches(path)).collect()
}

/// Order scripts naturally by their full path string.
pub fn sort_naturally(scripts: &mut [ScriptFile]) {
    scripts.sort_by(|a, b| {
        natural_cmp(&a.path().to_string_lossy(), &b.path().to_string_lossy())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "#!/bin/sh\n").unwrap();
    }

    #[test]
    fn test_resolve_directory_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let result = resolve_directory(&missing);
        assert!(matches!(result, Err(ScriptError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_resolve_directory_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "not-a-dir.sh");
        let result = resolve_directory(&temp_dir.path().join("not-a-dir.sh"));
        assert!(matches!(result, Err(ScriptError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_resolve_directory_is_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let resolved = resolve_directory(temp_dir.path()).unwrap();
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_list_regular_files_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.sh");
        fs::create_dir(temp_dir.path().join("nested.sh")).unwrap();
        touch(&temp_dir.path().join("nested.sh"), "inner.sh");

        let files = list_regular_files(temp_dir.path()).unwrap();
        assert_eq!(files, vec![temp_dir.path().join("a.sh")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_regular_files_follows_file_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let target_dir = TempDir::new().unwrap();
        touch(target_dir.path(), "real.sh");
        std::os::unix::fs::symlink(
            target_dir.path().join("real.sh"),
            temp_dir.path().join("link.sh"),
        )
        .unwrap();
        std::os::unix::fs::symlink(target_dir.path(), temp_dir.path().join("dirlink")).unwrap();

        let files = list_regular_files(temp_dir.path()).unwrap();
        assert_eq!(files, vec![temp_dir.path().join("link.sh")]);
    }

    #[test]
    fn test_filter_by_extension() {
        let paths = vec![
            PathBuf::from("/s/a.sh"),
            PathBuf::from("/s/b.py"),
            PathBuf::from("/s/c.txt"),
        ];
        let kept = filter_by_extension(paths.clone(), &ExtensionFilter::parse("sh"));
        assert_eq!(kept, vec![PathBuf::from("/s/a.sh")]);

        let kept = filter_by_extension(paths.clone(), &ExtensionFilter::parse("none"));
        assert_eq!(kept, paths);
    }

    #[test]
    fn test_sort_naturally() {
        let names = ["script20.sh", "script1.sh", "script10.sh", "script2.sh"];
        let mut scripts: Vec<ScriptFile> = names
            .iter()
            .map(|name| ScriptFile::new(PathBuf::from("/s").join(name)))
            .collect();
        sort_naturally(&mut scripts);

        let names: Vec<String> = scripts.iter().map(ScriptFile::base_name).collect();
        assert_eq!(
            names,
            vec!["script1.sh", "script2.sh", "script10.sh", "script20.sh"]
        );
    }
}
