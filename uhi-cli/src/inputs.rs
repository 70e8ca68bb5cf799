//! Hotspot and catalogue inputs shared by the `recommend` and `simulate`
//! commands.

use camino::{Utf8Path, Utf8PathBuf};
use uhi_core::{Hotspot, InterventionCatalog, sample_hotspots};

use crate::fs::read_json;
use crate::{ARG_CATALOG, ARG_HOTSPOT_FILE, ARG_HOTSPOT_ID, CliError};

/// Where the hotspot under study comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HotspotSource {
    /// One of the reference hotspots, by id.
    Sample(u32),
    /// A JSON-encoded hotspot on disk.
    File(Utf8PathBuf),
}

impl HotspotSource {
    /// Pick the source from the merged `--hotspot-id` and `--hotspot-file`
    /// values; exactly one must be set.
    pub(crate) fn resolve(
        id: Option<u32>,
        file: Option<Utf8PathBuf>,
        id_env: &'static str,
    ) -> Result<Self, CliError> {
        match (id, file) {
            (Some(id), None) => Ok(Self::Sample(id)),
            (None, Some(path)) => Ok(Self::File(path)),
            (Some(_), Some(_)) => Err(CliError::ConflictingHotspotSources {
                id_field: ARG_HOTSPOT_ID,
                file_field: ARG_HOTSPOT_FILE,
            }),
            (None, None) => Err(CliError::MissingArgument {
                field: ARG_HOTSPOT_ID,
                env: id_env,
            }),
        }
    }

    pub(crate) fn load(&self) -> Result<Hotspot, CliError> {
        match self {
            Self::Sample(id) => sample_hotspots()
                .into_iter()
                .find(|hotspot| hotspot.id() == *id)
                .ok_or(CliError::UnknownHotspot { id: *id }),
            Self::File(path) => read_json(path, ARG_HOTSPOT_FILE),
        }
    }
}

/// Load the intervention catalogue, falling back to the reference one.
pub(crate) fn load_catalog(path: Option<&Utf8Path>) -> Result<InterventionCatalog, CliError> {
    match path {
        Some(path) => {
            let catalog: InterventionCatalog = read_json(path, ARG_CATALOG)?;
            log::debug!("loaded {} interventions from {path}", catalog.len());
            Ok(catalog)
        }
        None => Ok(InterventionCatalog::default()),
    }
}
