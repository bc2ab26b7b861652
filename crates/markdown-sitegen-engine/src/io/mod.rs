use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory {0}: {1}")]
    InvalidDir(PathBuf, &'static str),
    #[error("Path {path} is not inside {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// Read a file relative to `root` and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(root))
}

/// Read a file by absolute or working-directory path
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file relative to `root`, creating parent directories
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Express `path` relative to `root`
pub fn relative_to(root: &Path, path: &Path) -> Result<RelativePathBuf, IoError> {
    path.strip_prefix(root)
        .ok()
        .and_then(|rel| RelativePathBuf::from_path(rel).ok())
        .ok_or_else(|| IoError::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })
}

/// Scan for markdown files under `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        return Err(IoError::InvalidDir(
            path.to_path_buf(),
            "directory does not exist",
        ));
    }
    if !path.is_dir() {
        return Err(IoError::InvalidDir(path.to_path_buf(), "not a directory"));
    }

    Ok(())
}

/// Mirror the directory tree at `src` into `dest`.
///
/// When `clean` is set, `dest` is removed first so stale output does not
/// survive. Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dest: &Path, clean: bool) -> Result<usize, IoError> {
    validate_dir(src)?;

    if clean && dest.exists() {
        log::info!("Cleaning {}", dest.display());
        fs::remove_dir_all(dest).map_err(IoError::Io)?;
    }
    fs::create_dir_all(dest).map_err(IoError::Io)?;

    copy_directory_recursive(src, dest)
}

fn copy_directory_recursive(src: &Path, dest: &Path) -> Result<usize, IoError> {
    let mut entries = fs::read_dir(src)
        .map_err(IoError::Io)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(IoError::Io)?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut copied = 0;
    for entry in entries {
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dest_path).map_err(IoError::Io)?;
            log::info!("Directory copied: {}", dest_path.display());
            copied += copy_directory_recursive(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(IoError::Io)?;
            log::info!("File copied: {}", dest_path.display());
            copied += 1;
        }
    }

    Ok(copied)
}
