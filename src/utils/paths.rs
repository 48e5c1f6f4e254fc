use std::path::{Component, Path, PathBuf};

#[cfg(not(unix))]
use crate::core::error::IgnoreError;
use crate::core::error::Result;

/// Makes `path` absolute against `cwd` and drops `.`/`..` components.
///
/// Works purely on the path text: symlinks are not resolved and the target
/// does not need to exist.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&cwd.join(path))
    }
}

/// Drops ../ components from paths without disk read
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::Prefix(c)) = components.peek() {
        let buf = PathBuf::from(c.as_os_str());
        components.next();
        buf
    } else {
        PathBuf::new()
    };
    for component in components {
        match component {
            Component::Prefix(..) => unreachable!(),
            Component::RootDir => {
                ret.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}

/// Computes `target` relative to the directory `base`.
///
/// Both paths are expected to be normalized. Returns `None` when they do not
/// share a root (one relative and one absolute, or different drives).
pub fn relative_to(target: &Path, base: &Path) -> Option<PathBuf> {
    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();

    let is_anchor = |c: Option<&Component>| {
        matches!(c, Some(Component::Prefix(_)) | Some(Component::RootDir))
    };
    if (is_anchor(target.first()) || is_anchor(base.first())) && target.first() != base.first() {
        return None;
    }

    let common = target
        .iter()
        .zip(base.iter())
        .take_while(|(t, b)| t == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }
    Some(relative)
}

/// Renders a path as an ignore-file entry.
///
/// Separators are always `/`. The base directory itself renders as `.`, and
/// directories get a trailing `/`. On Unix the path bytes are written as they
/// are, whatever their encoding.
pub fn render_entry(path: &Path, is_dir: bool) -> Result<Vec<u8>> {
    let mut entry = path_bytes(path)?;
    if entry.is_empty() {
        entry.push(b'.');
    }
    if is_dir && !entry.ends_with(b"/") {
        entry.push(b'/');
    }
    Ok(entry)
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Result<Vec<u8>> {
    use std::os::unix::ffi::OsStrExt;
    Ok(path.as_os_str().as_bytes().to_vec())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Result<Vec<u8>> {
    let text = path.to_str().ok_or_else(|| IgnoreError::NonUnicodePath {
        path: path.to_path_buf(),
    })?;
    Ok(text.replace(std::path::MAIN_SEPARATOR, "/").into_bytes())
}
