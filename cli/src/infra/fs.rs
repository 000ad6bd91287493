//! Filesystem infrastructure: implements the `HubFs` port.

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::application::ports::HubFs;

/// Production filesystem implementation of `HubFs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl HubFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_empty_dir(&self, path: &Path) -> Result<bool> {
        let mut entries = std::fs::read_dir(path)
            .with_context(|| format!("listing directory {}", path.display()))?;
        Ok(entries.next().is_none())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("creating directory {}", path.display()))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("reading file {}", path.display()))
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;

        // Same directory as the target so the rename stays on one filesystem.
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temp file in {}", dir.display()))?;
        tmp.write_all(content.as_bytes())
            .with_context(|| format!("writing temp file for {}", path.display()))?;
        carry_permissions(tmp.as_file(), path)?;
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("syncing temp file for {}", path.display()))?;
        tmp.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("renaming temp file to {}", path.display()))?;
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        std::fs::copy(from, to)
            .with_context(|| format!("copying {} to {}", from.display(), to.display()))?;
        Ok(())
    }

    fn modified(&self, path: &Path) -> Result<Option<DateTime<Utc>>> {
        match std::fs::metadata(path) {
            Ok(meta) => {
                let modified = meta
                    .modified()
                    .with_context(|| format!("reading mtime of {}", path.display()))?;
                Ok(Some(DateTime::<Utc>::from(modified)))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading metadata of {}", path.display())),
        }
    }
}

/// Mode for files `write_atomic` creates. The hub containers read them as a
/// different uid.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Give the temp file the target's mode, or [`NEW_FILE_MODE`] for a new
/// target. Temp files start out 0600.
#[cfg(unix)]
fn carry_permissions(tmp: &std::fs::File, target: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = match std::fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            std::fs::Permissions::from_mode(NEW_FILE_MODE)
        }
        Err(e) => {
            return Err(e).with_context(|| format!("reading metadata of {}", target.display()));
        }
    };
    tmp.set_permissions(perms)
        .with_context(|| format!("setting permissions for {}", target.display()))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn carry_permissions(_tmp: &std::fs::File, _target: &Path) -> Result<()> {
    Ok(())
}
