use anyhow::Context;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [".git"];

/// One side of a comparison: a project directory whose files are addressed
/// by paths relative to its root.
#[derive(Debug, Clone)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list_files(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        if !self.path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", self.path);
        }

        WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.path()))
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(err) => Some(Err(err)),
            })
            .map(|path| -> anyhow::Result<PathBuf> {
                let path =
                    path.with_context(|| format!("Failed to walk directory {:?}", self.path))?;
                Ok(path.strip_prefix(self.path.as_ref())?.to_path_buf())
            })
            .collect()
    }

    fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .map(|name| IGNORED_PATHS.contains(&name.to_string_lossy().as_ref()))
            .unwrap_or(false)
    }

    /// Reads a file relative to the root, `None` when it does not exist.
    pub async fn read_file(&self, file_path: &Path) -> anyhow::Result<Option<String>> {
        read_text(&self.path.join(file_path)).await
    }
}

/// Reads a text file, decoding invalid UTF-8 lossily. A path that does not
/// exist or is not a regular file is `None`; any other failure is an error.
pub async fn read_text(path: &Path) -> anyhow::Result<Option<String>> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => {}
        Ok(_) => {
            log::warn!("{:?} is not a regular file, treating it as absent", path);
            return Ok(None);
        }
        Err(err) if is_absent(&err) => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read file: {:?}", path));
        }
    }

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if is_absent(&err) => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read file: {:?}", path));
        }
    };

    match String::from_utf8(bytes) {
        Ok(text) => Ok(Some(text)),
        Err(err) => {
            log::warn!("{:?} is not valid UTF-8, decoding lossily", path);
            Ok(Some(String::from_utf8_lossy(err.as_bytes()).into_owned()))
        }
    }
}

// a parent that is a file on this side also means the path is absent here
fn is_absent(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
    )
}
