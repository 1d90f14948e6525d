//! Store snapshot persistence.
//!
//! The whole store is one pretty-printed JSON document with two top-level
//! collections:
//!
//! ```json
//! {
//!   "employees": [ ... ],
//!   "messages": [ ... ]
//! }
//! ```
//!
//! Saves use write-then-rename so a crash mid-write cannot corrupt the
//! previously durable document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::records::StoreData;

/// Save the whole store document to `path`.
///
/// Writes to a sibling `.tmp` file first, then renames over the target
/// (atomic on Unix). Parent directories are created as needed.
pub fn save(path: &Path, data: &StoreData) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let temp_path = temp_path(path);
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Load the store document from `path`.
///
/// A missing file and a parse failure are both errors here; `Store::init`
/// turns either into a fresh empty document.
pub fn load(path: &Path) -> Result<StoreData, io::Error> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Sibling temp file used for the write-then-rename step.
fn temp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Employee, EmployeeId, Message, MessageId};
    use tempfile::tempdir;

    fn sample_data() -> StoreData {
        let employee = Employee {
            id: EmployeeId("0190b36e-3c44-7aaa-8001-98b53e1e2b10".to_string()),
            first_name: "Barry".to_string(),
            last_name: "Allen".to_string(),
        };
        let message = Message {
            id: MessageId("0190b36e-3c44-7aaa-8001-98b53e1e2b11".to_string()),
            employee: employee.id.clone(),
            message: "hi".to_string(),
            expires_at: Some("2030-01-01".to_string()),
        };
        StoreData {
            employees: vec![employee],
            messages: vec![message],
        }
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");
        let data = sample_data();

        save(&path, &data).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn save_writes_an_indented_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");

        save(&path, &StoreData::default()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();

        assert!(contents.contains("\"employees\""));
        assert!(contents.contains("\"messages\""));
        assert!(contents.contains('\n'));
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");

        save(&path, &sample_data()).unwrap();

        assert!(path.exists());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("board.json");

        save(&path, &StoreData::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_overwrites_previous_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");

        save(&path, &sample_data()).unwrap();
        save(&path, &StoreData::default()).unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.employees.is_empty());
        assert!(loaded.messages.is_empty());
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempdir().unwrap();
        assert!(load(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn load_corrupt_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn load_rejects_wrong_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(load(&path).is_err());
    }
}
