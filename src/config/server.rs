#[cfg(feature = "server")]
use crate::core::{ConfigProvider, Storage};
#[cfg(feature = "server")]
use crate::utils::error::{Result, SplitError};
#[cfg(feature = "server")]
use std::collections::HashMap;
#[cfg(feature = "server")]
use std::sync::Arc;
#[cfg(feature = "server")]
use tokio::sync::Mutex;

/// Storage keys the server pipeline reads its uploads from.
#[cfg(feature = "server")]
pub const MEMBERS_KEY: &str = "members.csv";
#[cfg(feature = "server")]
pub const REGIONS_KEY: &str = "regions.xlsx";

/// Request-scoped configuration: uploads land under fixed keys and the
/// archive is produced next to them. One instance per request, nothing
/// shared between requests.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub archive_name: String,
}

#[cfg(feature = "server")]
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            archive_name: "NYSAND_Member_Files.zip".to_string(),
        }
    }
}

#[cfg(feature = "server")]
impl ConfigProvider for ServerConfig {
    fn members_file(&self) -> &str {
        MEMBERS_KEY
    }

    fn regions_file(&self) -> &str {
        REGIONS_KEY
    }

    fn output_path(&self) -> &str {
        ""
    }

    fn archive_name(&self) -> &str {
        &self.archive_name
    }
}

/// In-memory storage backing one upload/split/download cycle.
#[cfg(feature = "server")]
#[derive(Clone, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

#[cfg(feature = "server")]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put_file(&self, path: &str, data: Vec<u8>) {
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data);
    }
}

#[cfg(feature = "server")]
impl Storage for MemoryStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| {
            SplitError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }
}
