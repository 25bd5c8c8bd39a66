//! Filesystem clip library.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs::File;
use tokio::io::BufReader;

use crate::audio::ports::AudioSource;
use crate::handlers::ports::{AudioOpener, ClipError, ClipResult};

/// Opens clips from a directory tree such as `assets/audio`.
#[derive(Debug, Clone)]
pub struct FsAudioOpener {
    root: PathBuf,
}

impl FsAudioOpener {
    /// Creates an opener rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the library root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, clip: &str) -> ClipResult<PathBuf> {
        let relative = Path::new(clip);
        let contained = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if clip.is_empty() || !contained {
            return Err(ClipError::NotFound(clip.to_owned()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl AudioOpener for FsAudioOpener {
    async fn open(&self, clip: &str) -> ClipResult<AudioSource> {
        let path = self.resolve(clip)?;
        match File::open(&path).await {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(ClipError::NotFound(clip.to_owned()))
            }
            Err(err) => Err(ClipError::unavailable(err)),
        }
    }
}
