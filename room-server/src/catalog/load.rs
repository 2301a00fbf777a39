//! Vector file loading.
//!
//! Each catalog file is a JSON document of the form
//! `{"vectors": [{...}, ...]}` where every record describes one free
//! interval of one room. Records are validated individually: a malformed
//! record (missing or inverted slot bounds, wrong field types) is skipped
//! and counted without affecting its neighbors.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{SlotRange, Vacancy};

use super::error::CatalogError;

/// Wrapper for one vector file.
///
/// Records are held as raw values so that one malformed record does not
/// poison the rest of the file.
#[derive(Debug, Deserialize)]
struct VectorsFile {
    vectors: Vec<serde_json::Value>,
}

/// Raw vector record as written by the upstream compressor.
#[derive(Debug, Deserialize)]
struct VectorRecord {
    #[serde(default)]
    room_id: String,
    #[serde(default)]
    room_name: String,
    #[serde(default)]
    capacity: Option<u32>,
    #[serde(default)]
    facilities: Option<Facilities>,
    #[serde(default)]
    area_id: String,
    #[serde(default)]
    area_name: String,
    start_index: Option<i64>,
    end_index: Option<i64>,
    #[serde(default)]
    start_time: Option<String>,
    #[serde(default)]
    end_time: Option<String>,
}

/// Facility tags appear either as an array or as one delimited string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Facilities {
    List(Vec<String>),
    Joined(String),
}

impl Facilities {
    fn normalize(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            Facilities::List(items) => items,
            Facilities::Joined(s) => s
                .split([';', ',', '/', '|'])
                .map(str::to_string)
                .collect(),
        };
        raw.iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl VectorRecord {
    /// Validate and convert; `None` means the record is malformed.
    fn into_vacancy(self, source: &str) -> Option<Vacancy> {
        let start = u32::try_from(self.start_index?).ok()?;
        let end = u32::try_from(self.end_index?).ok()?;
        let span = SlotRange::new(start, end).ok()?;

        Some(Vacancy {
            room_id: self.room_id,
            room_name: self.room_name,
            capacity: self.capacity.unwrap_or(0),
            facilities: self.facilities.map(Facilities::normalize).unwrap_or_default(),
            area_id: self.area_id,
            area_name: self.area_name,
            span,
            start_time: self.start_time,
            end_time: self.end_time,
            source: Some(source.to_string()),
        })
    }
}

/// Per-area summary for catalog introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaInfo {
    pub area_id: String,
    pub area_name: String,
    pub vacancy_count: usize,
}

/// The materialized vacancy catalog.
///
/// Loaded once at startup and shared immutably; per-request work only reads
/// area views out of it.
#[derive(Debug, Default)]
pub struct Catalog {
    vacancies: Vec<Vacancy>,
    skipped_records: usize,
    skipped_files: usize,
}

impl Catalog {
    /// Load every `*.json` vector file in `dir`, in file-name order.
    ///
    /// Fails only when the directory itself is unreadable or holds no vector
    /// files; malformed files and records are skipped and counted.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut files = list_vector_files(dir)?;
        files.sort();
        if files.is_empty() {
            return Err(CatalogError::NoVectorFiles(dir.to_path_buf()));
        }

        let mut catalog = Catalog::default();
        for path in &files {
            catalog.load_file(path);
        }

        debug!(
            vacancies = catalog.vacancies.len(),
            skipped_records = catalog.skipped_records,
            skipped_files = catalog.skipped_files,
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from already-materialized vacancies.
    pub fn from_vacancies(vacancies: Vec<Vacancy>) -> Self {
        Self {
            vacancies,
            skipped_records: 0,
            skipped_files: 0,
        }
    }

    fn load_file(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!(file = %name, "skipping unreadable vector file: {err}");
                self.skipped_files += 1;
                return;
            }
        };

        let file: VectorsFile = match serde_json::from_str(&text) {
            Ok(file) => file,
            Err(err) => {
                warn!(file = %name, "skipping non-standard vector file: {err}");
                self.skipped_files += 1;
                return;
            }
        };

        for value in file.vectors {
            let vacancy = serde_json::from_value::<VectorRecord>(value)
                .ok()
                .and_then(|record| record.into_vacancy(&name));
            match vacancy {
                Some(v) => self.vacancies.push(v),
                None => {
                    warn!(file = %name, "skipping malformed vector record");
                    self.skipped_records += 1;
                }
            }
        }
    }

    /// All vacancies, in load order.
    pub fn vacancies(&self) -> &[Vacancy] {
        &self.vacancies
    }

    /// Vacancies belonging to one area, in load order.
    pub fn for_area(&self, area_id: &str) -> Vec<Vacancy> {
        self.vacancies
            .iter()
            .filter(|v| v.area_id == area_id)
            .cloned()
            .collect()
    }

    /// Summaries of the loaded areas, ordered by area id.
    pub fn areas(&self) -> Vec<AreaInfo> {
        let mut grouped: BTreeMap<&str, (&str, usize)> = BTreeMap::new();
        for v in &self.vacancies {
            let entry = grouped.entry(&v.area_id).or_insert((&v.area_name, 0));
            entry.1 += 1;
        }
        grouped
            .into_iter()
            .map(|(area_id, (area_name, vacancy_count))| AreaInfo {
                area_id: area_id.to_string(),
                area_name: area_name.to_string(),
                vacancy_count,
            })
            .collect()
    }

    /// Total number of vacancies.
    pub fn len(&self) -> usize {
        self.vacancies.len()
    }

    /// Whether the catalog holds no vacancies at all.
    pub fn is_empty(&self) -> bool {
        self.vacancies.is_empty()
    }

    /// Records skipped as malformed during loading.
    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    /// Files skipped as unreadable or non-standard during loading.
    pub fn skipped_files(&self) -> usize {
        self.skipped_files
    }
}

fn list_vector_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let entries = fs::read_dir(dir).map_err(|source| CatalogError::Io {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CatalogError::Io {
            dir: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(files)
}
