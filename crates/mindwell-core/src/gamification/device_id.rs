//! Device identity for the gamification backend.
//!
//! A client-generated pseudo-identity, not an authenticated user. Stored
//! in a file under the data directory so the same device keeps its streak
//! across sessions.

use std::fs;
use std::io::Write;
use std::path::Path;

use uuid::Uuid;

use crate::error::DeviceIdError;
use crate::storage::data_dir;

const DEVICE_ID_FILE: &str = "device_id.txt";
const DEVICE_ID_PREFIX: &str = "device-";

/// Get or create the device ID at the specified directory.
///
/// # Errors
/// Returns an error on IO failure or if the stored ID has the wrong
/// format.
pub fn get_or_create_device_id_at(path: &Path) -> Result<String, DeviceIdError> {
    let device_id_path = path.join(DEVICE_ID_FILE);

    if device_id_path.exists() {
        let content = fs::read_to_string(&device_id_path)?;
        let device_id = content.trim().to_string();

        if device_id.starts_with(DEVICE_ID_PREFIX) {
            return Ok(device_id);
        }
        return Err(DeviceIdError::InvalidFormat(device_id));
    }

    let device_id = format!("{}{}", DEVICE_ID_PREFIX, Uuid::new_v4());

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let mut file = fs::File::create(&device_id_path)?;
    writeln!(file, "{device_id}")?;

    Ok(device_id)
}

/// Get or create the device ID under the default data directory.
pub fn get_or_create_device_id() -> Result<String, DeviceIdError> {
    let dir = data_dir()?;
    get_or_create_device_id_at(&dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_device_id_format() {
        let temp_dir = TempDir::new().unwrap();
        let device_id = get_or_create_device_id_at(temp_dir.path()).unwrap();

        assert!(device_id.starts_with(DEVICE_ID_PREFIX));
        assert_eq!(device_id.len(), DEVICE_ID_PREFIX.len() + 36);
    }

    #[test]
    fn test_device_id_persists_across_calls() {
        let temp_dir = TempDir::new().unwrap();

        let first = get_or_create_device_id_at(temp_dir.path()).unwrap();
        let second = get_or_create_device_id_at(temp_dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(DEVICE_ID_FILE), "wrong-prefix-id").unwrap();

        let result = get_or_create_device_id_at(temp_dir.path());
        assert!(matches!(result, Err(DeviceIdError::InvalidFormat(_))));
    }

    #[test]
    fn test_distinct_directories_get_distinct_ids() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();

        let a = get_or_create_device_id_at(dir_a.path()).unwrap();
        let b = get_or_create_device_id_at(dir_b.path()).unwrap();
        assert_ne!(a, b);
    }
}
