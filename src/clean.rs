//! Removal of previous build output.
//!
//! A production build starts from an empty output tree. Removing a tree
//! that is already gone is not an error; any other failure aborts the
//! build so stale assets are never shipped.
//!
//! Only a single output tree directly under the output root may be
//! removed. Target names that would reach outside it are refused before
//! anything is touched.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path};

use crate::error::{Result, WebpackEnvError};

/// What a clean did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// Something existed at the path and was removed.
    Removed,
    /// Nothing was there.
    AlreadyAbsent,
}

/// Delete the output tree `<project_root>/<dist_root>/<target>`.
///
/// `dist_root` must be relative without `..`, and `target` must be one
/// plain path segment.
///
/// # Errors
///
/// Returns `UnsafeCleanPath` when either check fails, and `CleanFailed`
/// when the removal itself fails.
///
/// # Example
///
/// ```
/// use webpack_env::clean::{clean_target, CleanOutcome};
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// std::fs::create_dir_all(temp.path().join("dist/cms-web/static")).unwrap();
///
/// let outcome = clean_target(temp.path(), "dist", "cms-web").unwrap();
/// assert_eq!(outcome, CleanOutcome::Removed);
/// assert!(clean_target(temp.path(), "dist", "cms-x/../..").is_err());
/// ```
pub fn clean_target(project_root: &Path, dist_root: &str, target: &str) -> Result<CleanOutcome> {
    let output_root = project_root.join(dist_root);
    let dir = output_root.join(target);
    if !stays_inside(Path::new(dist_root)) || !is_single_segment(Path::new(target)) {
        tracing::warn!("Refusing to clean {}", dir.display());
        return Err(WebpackEnvError::UnsafeCleanPath { path: dir });
    }
    clean_output(&dir)
}

/// Recursively delete `dir`, or the file standing in its place.
///
/// # Example
///
/// ```
/// use webpack_env::clean::{clean_output, CleanOutcome};
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// let out = temp.path().join("dist/cms-web");
/// std::fs::create_dir_all(out.join("static")).unwrap();
///
/// assert_eq!(clean_output(&out).unwrap(), CleanOutcome::Removed);
/// assert_eq!(clean_output(&out).unwrap(), CleanOutcome::AlreadyAbsent);
/// ```
pub fn clean_output(dir: &Path) -> Result<CleanOutcome> {
    let metadata = match fs::symlink_metadata(dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No previous output at {}", dir.display());
            return Ok(CleanOutcome::AlreadyAbsent);
        }
        Err(source) => return Err(clean_failed(dir, source)),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(dir)
    } else {
        fs::remove_file(dir)
    };

    match removed {
        Ok(()) => {
            tracing::info!("Removed previous output {}", dir.display());
            Ok(CleanOutcome::Removed)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(CleanOutcome::AlreadyAbsent),
        Err(source) => Err(clean_failed(dir, source)),
    }
}

fn clean_failed(dir: &Path, source: std::io::Error) -> WebpackEnvError {
    WebpackEnvError::CleanFailed {
        path: dir.to_path_buf(),
        source,
    }
}

/// A relative path that never climbs out of its base.
fn stays_inside(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Exactly one plain component: no separators, no `.` or `..`.
fn is_single_segment(path: &Path) -> bool {
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn removes_nested_tree() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("dist").join("dingtalk-mobile");
        fs::create_dir_all(out.join("static").join("images")).unwrap();
        fs::write(out.join("static").join("main.js"), "stale").unwrap();

        assert_eq!(clean_output(&out).unwrap(), CleanOutcome::Removed);
        assert!(!out.exists());
        assert!(temp.path().join("dist").exists());
    }

    #[test]
    fn absent_directory_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("dist").join("cms-web");
        assert_eq!(clean_output(&out).unwrap(), CleanOutcome::AlreadyAbsent);
    }

    #[test]
    fn leaves_sibling_targets_alone() {
        let temp = TempDir::new().unwrap();
        let dist = temp.path().join("dist");
        fs::create_dir_all(dist.join("cms-web")).unwrap();
        fs::create_dir_all(dist.join("cms-mobile")).unwrap();

        clean_output(&dist.join("cms-web")).unwrap();
        assert!(dist.join("cms-mobile").exists());
    }

    #[test]
    fn file_in_place_of_directory_is_removed() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("cms-web");
        fs::write(&out, "not a directory").unwrap();

        assert_eq!(clean_output(&out).unwrap(), CleanOutcome::Removed);
        assert!(!out.exists());
    }

    #[test]
    fn target_removes_only_its_tree() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("dist/cms-web/static")).unwrap();
        fs::create_dir_all(temp.path().join("dist/cms-mobile")).unwrap();

        let outcome = clean_target(temp.path(), "dist", "cms-web").unwrap();
        assert_eq!(outcome, CleanOutcome::Removed);
        assert!(!temp.path().join("dist/cms-web").exists());
        assert!(temp.path().join("dist/cms-mobile").exists());
    }

    #[test]
    fn traversing_target_is_refused() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        fs::create_dir_all(project.join("dist/cms-x")).unwrap();
        fs::write(project.join("package.json"), "{}").unwrap();

        for target in ["cms-x/../..", "../cms-web", "cms/web", "..", ".", ""] {
            let err = clean_target(&project, "dist", target).unwrap_err();
            assert!(
                matches!(err, WebpackEnvError::UnsafeCleanPath { .. }),
                "{target:?}"
            );
        }
        assert!(project.join("package.json").exists());
        assert!(project.join("dist/cms-x").exists());
    }

    #[test]
    fn escaping_output_root_is_refused() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        fs::create_dir_all(temp.path().join("cms-web")).unwrap();

        for dist_root in ["..", "/tmp", "dist/../.."] {
            let err = clean_target(&project, dist_root, "cms-web").unwrap_err();
            assert!(
                matches!(err, WebpackEnvError::UnsafeCleanPath { .. }),
                "{dist_root:?}"
            );
        }
        assert!(temp.path().join("cms-web").exists());
    }

    #[test]
    fn nested_output_root_is_allowed() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("build/out/cms-web")).unwrap();

        let outcome = clean_target(temp.path(), "./build/out/", "cms-web").unwrap();
        assert_eq!(outcome, CleanOutcome::Removed);
    }
}
