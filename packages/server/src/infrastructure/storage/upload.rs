//! Chunked, bounded-memory upload writer.
//!
//! Bytes are buffered into fixed-size chunks and written to a hidden
//! `.part` file next to the destination. The part file is renamed onto the
//! final name only after the stream ended cleanly, so a stored name never
//! refers to a half-written file. An existing file of the same name is
//! replaced (last writer wins).

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use bytes::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt};
use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

use crate::domain::{Attachment, StoredFileName};

/// Bytes written to disk per write call.
pub const CHUNK_SIZE: usize = 100_000;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to prepare upload directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write upload '{name}': {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("upload stream for '{name}' aborted: {reason}")]
    Aborted { name: String, reason: String },
}

impl UploadError {
    /// Whether the client caused the failure (as opposed to local storage)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}

/// Result of a completed upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub attachment: Attachment,
    pub bytes_written: u64,
}

/// Upload directory plus the chunking policy used to fill it
#[derive(Debug, Clone)]
pub struct UploadStorage {
    dir: PathBuf,
    chunk_size: usize,
}

impl UploadStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_chunk_size(dir, CHUNK_SIZE)
    }

    /// Storage with a custom chunk size (clamped to at least one byte)
    pub fn with_chunk_size(dir: impl Into<PathBuf>, chunk_size: usize) -> Self {
        Self {
            dir: dir.into(),
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| UploadError::CreateDir {
                path: self.dir.clone(),
                source,
            })
    }

    /// Location of a stored file
    pub fn path_of(&self, name: &StoredFileName) -> PathBuf {
        self.dir.join(name.as_str())
    }

    /// Stream `source` into the upload directory under `name`.
    ///
    /// On any error the partial data is discarded and a previously stored
    /// file of the same name is left untouched.
    pub async fn ingest<S, E>(
        &self,
        name: StoredFileName,
        source: S,
    ) -> Result<StoredUpload, UploadError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Display,
    {
        // fixed length: the final basename may already be close to NAME_MAX
        let part_path = self.dir.join(format!(".{}.part", Uuid::new_v4()));

        let bytes_written = match self.write_chunks(&part_path, &name, source).await {
            Ok(written) => written,
            Err(e) => {
                discard(&part_path).await;
                return Err(e);
            }
        };

        let destination = self.path_of(&name);
        if let Err(source) = fs::rename(&part_path, &destination).await {
            discard(&part_path).await;
            return Err(UploadError::Write {
                name: name.into_string(),
                source,
            });
        }

        tracing::debug!(
            "stored upload '{}' ({} bytes) at {:?}",
            name,
            bytes_written,
            destination
        );

        Ok(StoredUpload {
            attachment: Attachment::new(name),
            bytes_written,
        })
    }

    async fn write_chunks<S, E>(
        &self,
        path: &Path,
        name: &StoredFileName,
        source: S,
    ) -> Result<u64, UploadError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Display,
    {
        let write_error = |source: std::io::Error| UploadError::Write {
            name: name.as_str().to_string(),
            source,
        };

        let mut file = fs::File::create(path).await.map_err(write_error)?;
        let mut source = std::pin::pin!(source);
        let mut chunk = BytesMut::with_capacity(self.chunk_size);
        let mut written: u64 = 0;

        while let Some(frame) = source.next().await {
            let mut frame = frame.map_err(|e| UploadError::Aborted {
                name: name.as_str().to_string(),
                reason: e.to_string(),
            })?;

            while !frame.is_empty() {
                let take = (self.chunk_size - chunk.len()).min(frame.len());
                chunk.extend_from_slice(&frame.split_to(take));
                if chunk.len() == self.chunk_size {
                    file.write_all(&chunk).await.map_err(write_error)?;
                    written += chunk.len() as u64;
                    chunk.clear();
                }
            }
        }

        if !chunk.is_empty() {
            file.write_all(&chunk).await.map_err(write_error)?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(write_error)?;

        Ok(written)
    }
}

async fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path).await
        && e.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!("failed to remove partial upload {:?}: {}", path, e);
    }
}
