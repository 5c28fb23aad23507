//! Save Response use case.
//!
//! Writes the currently displayed question/answer pair through a
//! [`ResponseExporter`].

use crate::ports::response_exporter::{ExportError, ResponseExporter, ResponseSnapshot};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// Use case for saving the response panel.
pub struct SaveResponseUseCase {
    exporter: Arc<dyn ResponseExporter>,
}

impl SaveResponseUseCase {
    pub fn new(exporter: Arc<dyn ResponseExporter>) -> Self {
        Self { exporter }
    }

    /// Export `snapshot` into `dir`.
    ///
    /// Returns [`ExportError::NothingToExport`] when no round trip has
    /// completed yet.
    pub fn execute(
        &self,
        snapshot: Option<&ResponseSnapshot>,
        dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let snapshot = snapshot.ok_or(ExportError::NothingToExport)?;
        match self.exporter.export(snapshot, dir) {
            Ok(path) => {
                info!("Saved response to {}", path.display());
                Ok(path)
            }
            Err(e) => {
                error!("Error saving response: {}", e);
                Err(e)
            }
        }
    }
}
