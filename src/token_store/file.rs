// ABOUTME: File-backed token store persisting the session as a JSON record
// ABOUTME: Atomic temp-file-and-rename writes; a missing file reads as no session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use contest_core::models::User;
use tokio::fs;
use tracing::debug;

use super::{StoredSession, TokenStore};
use crate::errors::StoreError;

/// Token store that survives restarts of the client
///
/// The whole session is one JSON document, written to a sibling temp file
/// and renamed into place, so a crash mid-write leaves either the old or the
/// new session on disk, never a mix.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the session at `path`; parent directories are created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the session file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Read the whole record
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded
    pub async fn load(&self) -> Result<Option<StoredSession>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Serialization {
                context: "session file",
                source,
            })
    }

    async fn write_atomically(&self, contents: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io_error(e))?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, contents)
            .await
            .map_err(|e| self.io_error(e))?;
        restrict_permissions(&temp_path)
            .await
            .map_err(|e| self.io_error(e))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.io_error(e))
    }
}

#[async_trait::async_trait]
impl TokenStore for FileTokenStore {
    async fn get_token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.load().await?.map(|record| record.token))
    }

    async fn get_user(&self) -> Result<Option<User>, StoreError> {
        Ok(self.load().await?.map(|record| record.user))
    }

    async fn set_session(&self, token: &str, user: &User) -> Result<(), StoreError> {
        let record = StoredSession::new(token, user);
        let contents =
            serde_json::to_vec_pretty(&record).map_err(|source| StoreError::Serialization {
                context: "session record",
                source,
            })?;
        self.write_atomically(&contents).await?;
        debug!(path = %self.path.display(), "Session persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

// Session file holds a bearer token: owner read/write only
#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
