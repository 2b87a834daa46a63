use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::consts::*;
use crate::network::HttpClientExt;
use crate::report::Report;
use crate::updater::Update;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to fetch unit data: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Unit data is not ASCII text: non-ASCII byte at position {position}")]
    NotAscii {
        position: usize
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error)
}

/// Final state of a single unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    /// Unit data was saved to the given path
    Written(PathBuf),

    /// Unit data wasn't saved, with the reason why
    Failed(String)
}

impl UnitOutcome {
    #[inline]
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}

fn decode_ascii(body: Vec<u8>) -> Result<String, Error> {
    if let Some(position) = body.iter().position(|byte| !byte.is_ascii()) {
        return Err(Error::NotAscii { position });
    }

    String::from_utf8(body).map_err(|err| Error::NotAscii {
        position: err.utf8_error().valid_up_to()
    })
}

/// Fetch unit's data file and decode it as ASCII text
#[tracing::instrument(level = "trace", skip(client))]
pub fn fetch_unit(client: &impl HttpClientExt, version: &str, id: &str) -> Result<String, Error> {
    let body = client.get(get_unit_data_uri(version, id))
        .map_err(|err| Error::Request(Box::new(err)))?;

    decode_ascii(body)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDownloader {
    folder: PathBuf,
    delay: Duration
}

impl Default for UnitDownloader {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FOLDER)
    }
}

impl UnitDownloader {
    #[inline]
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            delay: DEFAULT_REQUEST_DELAY
        }
    }

    /// Change pause made after each unit request
    #[inline]
    pub fn with_delay(self, delay: Duration) -> Self {
        Self {
            delay,
            ..self
        }
    }

    #[inline]
    pub fn folder(&self) -> &Path {
        self.folder.as_path()
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Path the unit's data will be saved to
    #[inline]
    pub fn unit_path(&self, id: impl AsRef<str>) -> PathBuf {
        self.folder.join(id.as_ref())
    }

    /// Create output folder if it doesn't exist
    /// 
    /// Only the folder itself is created, so its parent must exist
    pub fn prepare(&self) -> std::io::Result<()> {
        if !self.folder.is_dir() {
            tracing::debug!(folder = ?self.folder, "Creating output folder");

            std::fs::create_dir(&self.folder)?;
        }

        Ok(())
    }

    fn try_download_unit(&self, client: &impl HttpClientExt, version: &str, id: &str) -> Result<PathBuf, Error> {
        let data = fetch_unit(client, version, id)?;
        let path = self.unit_path(id);

        std::fs::write(&path, data)?;

        Ok(path)
    }

    /// Fetch unit's data and save it to the output folder
    /// 
    /// Already existing file is overwritten
    pub fn download_unit(&self, client: &impl HttpClientExt, version: &str, id: &str) -> UnitOutcome {
        match self.try_download_unit(client, version, id) {
            Ok(path) => UnitOutcome::Written(path),
            Err(err) => UnitOutcome::Failed(err.to_string())
        }
    }

    /// Download all the given units one by one
    /// 
    /// Failed units don't stop the downloading and are listed in the returned report.
    /// After every unit, failed or not, the downloader pauses for `delay`
    #[tracing::instrument(level = "debug", skip_all, fields(version = version, units = ids.len()))]
    pub fn download_all(&self, client: &impl HttpClientExt, version: &str, ids: &[String], updater: impl Fn(Update)) -> Report {
        let mut report = Report::new();

        for id in ids {
            (updater)(Update::RequestingUnit {
                id: id.clone(),
                uri: get_unit_data_uri(version, id)
            });

            let outcome = self.download_unit(client, version, id);

            match &outcome {
                UnitOutcome::Written(path) => {
                    tracing::trace!(%id, ?path, "Unit saved");

                    (updater)(Update::UnitWritten {
                        id: id.clone(),
                        path: path.clone()
                    });
                }

                UnitOutcome::Failed(reason) => {
                    tracing::warn!(%id, %reason, "Failed to download unit");

                    (updater)(Update::UnitFailed {
                        id: id.clone(),
                        reason: reason.clone()
                    });
                }
            }

            report.push(id, &outcome);

            if !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
        }

        report
    }
}
