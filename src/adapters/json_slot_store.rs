use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::{AppError, SlotDocument, SlotEntry, SlotId, placeholder_name};
use crate::ports::SlotStore;

/// On-disk shape of the configuration document.
#[derive(Debug, Default, Deserialize)]
struct SlotDocumentDto {
    #[serde(default)]
    dossiers: BTreeMap<String, Option<PathBuf>>,
    #[serde(default)]
    noms_boutons: BTreeMap<String, String>,
}

/// Borrowed view written back to disk; keys serialize as decimal strings.
#[derive(Serialize)]
struct SlotDocumentRef<'a> {
    dossiers: BTreeMap<SlotId, Option<&'a Path>>,
    noms_boutons: BTreeMap<SlotId, &'a str>,
}

impl<'a> From<&'a SlotDocument> for SlotDocumentRef<'a> {
    fn from(document: &'a SlotDocument) -> Self {
        let dossiers = document.iter().map(|(id, entry)| (id, entry.path.as_deref())).collect();
        let noms_boutons = document.iter().map(|(id, entry)| (id, entry.name.as_str())).collect();
        Self { dossiers, noms_boutons }
    }
}

impl SlotDocumentDto {
    /// Reconcile the two maps into one document, skipping unusable keys.
    fn into_document(self) -> SlotDocument {
        let mut paths: BTreeMap<SlotId, Option<PathBuf>> = BTreeMap::new();
        for (key, path) in self.dossiers {
            match key.parse::<SlotId>() {
                Ok(id) => {
                    paths.insert(id, path.filter(|p| !p.as_os_str().is_empty()));
                }
                Err(_) => warn!("Ignoring folder entry with invalid slot key '{}'", key),
            }
        }

        let mut names: BTreeMap<SlotId, String> = BTreeMap::new();
        for (key, name) in self.noms_boutons {
            match key.parse::<SlotId>() {
                Ok(id) => {
                    names.insert(id, name);
                }
                Err(_) => warn!("Ignoring name entry with invalid slot key '{}'", key),
            }
        }

        let mut document = SlotDocument::new();
        for (id, path) in paths {
            let name = names.remove(&id).unwrap_or_else(|| {
                warn!("Slot {} has a folder but no name; using a placeholder", id);
                placeholder_name(id)
            });
            document.insert(id, SlotEntry::new(name, path));
        }
        for (id, name) in names {
            document.insert(id, SlotEntry::new(name, None));
        }
        document
    }
}

/// JSON-file-backed slot store.
#[derive(Debug, Clone)]
pub struct JsonSlotStore {
    path: PathBuf,
}

impl JsonSlotStore {
    /// Create a store persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read. A missing file is an empty document, not an error.
    pub fn read(&self) -> Result<SlotDocument, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(SlotDocument::new()),
            Err(err) => return Err(self.read_error(err.to_string())),
        };

        let dto: SlotDocumentDto =
            serde_json::from_str(&content).map_err(|err| self.read_error(err.to_string()))?;
        Ok(dto.into_document())
    }

    fn read_error(&self, details: String) -> AppError {
        AppError::PersistenceRead { path: self.path.clone(), details }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Write to a sibling temp file, then rename over the target.
    fn write_atomically(&self, contents: &[u8]) -> io::Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(contents)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

impl SlotStore for JsonSlotStore {
    fn load(&self) -> SlotDocument {
        if !self.path.exists() {
            debug!("No slot file at {}; creating an empty one", self.path.display());
            if let Err(err) = self.save(&SlotDocument::new()) {
                warn!("{}", err);
            }
            return SlotDocument::new();
        }

        match self.read() {
            Ok(document) => document,
            Err(err) => {
                warn!("{}; starting with no slots", err);
                SlotDocument::new()
            }
        }
    }

    fn save(&self, document: &SlotDocument) -> Result<(), AppError> {
        let write_error = |source: io::Error| AppError::PersistenceWrite {
            path: self.path.clone(),
            source,
        };

        let mut json = serde_json::to_string_pretty(&SlotDocumentRef::from(document))
            .map_err(|err| write_error(io::Error::new(io::ErrorKind::InvalidData, err)))?;
        json.push('\n');

        self.write_atomically(json.as_bytes()).map_err(write_error)?;
        debug!("Saved {} slot(s) to {}", document.len(), self.path.display());
        Ok(())
    }
}
