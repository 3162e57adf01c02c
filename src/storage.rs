use crate::errors::StoreError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::Mutex};
use tracing::warn;

/// On-disk shape: a workbook of named sheets, each an append-only list of
/// rows. Rows are kept as raw JSON so one malformed row never poisons a
/// whole sheet.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Workbook {
    sheets: BTreeMap<String, Vec<serde_json::Value>>,
}

/// File-backed sheet store. Every load reads the file fresh; appends
/// read-modify-write under the lock so append order survives restarts.
#[derive(Clone)]
pub struct SheetStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl SheetStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every row of a sheet in stored order. A missing file or missing
    /// sheet is an empty sheet, not an error; rows that no longer match the
    /// record shape are skipped with a warning.
    pub async fn load<T: DeserializeOwned>(&self, sheet: &str) -> Result<Vec<T>, StoreError> {
        let workbook = read_workbook(&self.path).await?;
        let rows = match workbook.sheets.get(sheet) {
            Some(rows) => rows,
            None => return Ok(Vec::new()),
        };

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            match serde_json::from_value(row.clone()) {
                Ok(record) => records.push(record),
                Err(err) => warn!("skipping malformed row in sheet {sheet}: {err}"),
            }
        }
        Ok(records)
    }

    /// Appends one record, creating the sheet on first use.
    pub async fn append<T: Serialize>(&self, sheet: &str, record: &T) -> Result<(), StoreError> {
        let row = serde_json::to_value(record)
            .map_err(|err| StoreError::Io(err.to_string()))?;

        let _guard = self.lock.lock().await;
        let mut workbook = read_workbook(&self.path).await?;
        workbook.sheets.entry(sheet.to_string()).or_default().push(row);

        let payload = serde_json::to_vec_pretty(&workbook)
            .map_err(|err| StoreError::Io(err.to_string()))?;
        fs::write(&self.path, payload)
            .await
            .map_err(StoreError::from_io)?;
        Ok(())
    }
}

async fn read_workbook(path: &Path) -> Result<Workbook, StoreError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Workbook::default());
        }
        Err(err) => return Err(StoreError::from_io(err)),
    };

    match serde_json::from_slice(&bytes) {
        Ok(workbook) => Ok(workbook),
        Err(err) => {
            warn!("data file is not a valid workbook, starting empty: {err}");
            Ok(Workbook::default())
        }
    }
}
