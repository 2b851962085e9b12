use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

/// Storage keys used by the session store and the campaign ledger.
///
/// The defaults are the keys the page scripts have always written, so an
/// existing browser profile keeps its account and campaigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub session_key: String,
    pub ledger_key: String,
    pub counter_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            session_key: "userAccount".to_string(),
            ledger_key: "campaignsData".to_string(),
            counter_key: "campaignsNextId".to_string(),
        }
    }
}

impl StorageKeys {
    /// Key under which an unreadable ledger blob is parked before re-seeding.
    pub fn corrupt_ledger_key(&self) -> String {
        format!("{}.corrupt", self.ledger_key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageKeys,
    /// How long a notice stays on screen before the page hides it.
    pub notice_ttl_ms: u64,
    /// Directory for the file-backed store on native targets.
    pub data_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            notice_ttl_ms: 3_000,
            data_dir: "data".to_string(),
        }
    }
}

impl Config {
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        fs::write(path, json)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let data = fs::read_to_string(path)?;
        serde_json::from_str::<Config>(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
