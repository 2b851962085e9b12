//! ledger
//!
//! The campaign ledger: an ordered list of campaigns persisted as a single
//! JSON blob. Every mutation rewrites the whole blob.

mod mutations;
mod seed;

pub use seed::seed_campaigns;

use tracing::{debug, info, warn};

use crowdfund_common::{
    config::StorageKeys,
    error::{FundError, Result},
    storage::KeyValueStore,
};

use crate::core::campaign::{diagnose, Campaign};

pub struct CampaignLedger<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
    campaigns: Vec<Campaign>,
    /// Next id to hand out. Never reused, never below `max(id) + 1`.
    next_id: u64,
}

impl<S: KeyValueStore> CampaignLedger<S> {
    /// Creates an empty, unloaded ledger. Call [`load`](Self::load) before use.
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self {
            store,
            keys,
            campaigns: Vec::new(),
            next_id: 0,
        }
    }

    /// Reads the stored ledger, seeding it when nothing usable is stored.
    ///
    /// A blob that is not valid JSON is copied to the corrupt-ledger key and
    /// replaced by the seed set. A blob that parses but breaks invariants is
    /// kept as-is; each issue is logged.
    pub fn load(&mut self) -> Result<&[Campaign]> {
        let stored = match self.store.get(&self.keys.ledger_key)? {
            None => None,
            Some(raw) => match serde_json::from_str::<Option<Vec<Campaign>>>(&raw) {
                Ok(parsed) => parsed,
                Err(e) => {
                    let backup_key = self.keys.corrupt_ledger_key();
                    warn!(
                        "⚠️ Stored ledger under {:?} is unreadable ({}); saved to {:?} and re-seeding",
                        self.keys.ledger_key, e, backup_key
                    );
                    self.store.set(&backup_key, &raw)?;
                    None
                }
            },
        };

        match stored {
            Some(campaigns) if !campaigns.is_empty() => {
                for issue in diagnose(&campaigns) {
                    warn!("⚠️ Ledger inconsistency: {}", issue);
                }
                debug!("Loaded {} campaigns", campaigns.len());
                self.campaigns = campaigns;
                self.next_id = self.read_counter()?.max(self.min_next_id());
            }
            _ => {
                let seeds = seed_campaigns();
                info!("🌱 No stored campaigns, installing {} seed campaigns", seeds.len());
                self.campaigns = seeds;
                self.next_id = self.read_counter()?.max(self.min_next_id());
                self.persist(self.next_id, &self.campaigns)?;
            }
        }

        Ok(&self.campaigns)
    }

    /// Campaigns in display order, newest first.
    pub fn list(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Id the next created campaign will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn find_by_id(&self, id: u64) -> Result<&Campaign> {
        self.campaigns
            .iter()
            .find(|c| c.id == id)
            .ok_or(FundError::NotFound(id))
    }

    /// Campaigns whose owner is `account`, ignoring ASCII case.
    pub fn created_by(&self, account: &str) -> Vec<&Campaign> {
        self.campaigns.iter().filter(|c| c.is_owned_by(account)).collect()
    }

    /// Campaigns with at least one donation from `account`, ignoring ASCII case.
    pub fn backed_by(&self, account: &str) -> Vec<&Campaign> {
        self.campaigns.iter().filter(|c| c.is_backed_by(account)).collect()
    }

    /// Smallest id above every stored one. Saturates at `u64::MAX`, which
    /// `create` then refuses to hand out.
    fn min_next_id(&self) -> u64 {
        let mut next = self.campaigns.len() as u64;
        for campaign in &self.campaigns {
            match campaign.id.checked_add(1) {
                Some(above) => next = next.max(above),
                None => {
                    warn!("⚠️ Campaign id {} leaves no room for new ids", campaign.id);
                    return u64::MAX;
                }
            }
        }
        next
    }

    fn read_counter(&self) -> Result<u64> {
        let Some(raw) = self.store.get(&self.keys.counter_key)? else {
            return Ok(0);
        };
        match raw.trim().parse::<u64>() {
            Ok(value) => Ok(value),
            Err(_) => {
                warn!("⚠️ Ignoring unreadable id counter {:?}", raw);
                Ok(0)
            }
        }
    }

    /// Writes the counter, then the ledger blob.
    ///
    /// The blob is encoded before anything is written. A failure between the
    /// two writes leaves the counter ahead of the blob, which only skips ids.
    fn persist(&self, next_id: u64, campaigns: &[Campaign]) -> Result<()> {
        let blob = serde_json::to_string(campaigns)?;
        self.store.set(&self.keys.counter_key, &next_id.to_string())?;
        self.store.set(&self.keys.ledger_key, &blob)?;
        debug!("Persisted {} campaigns ({} bytes)", campaigns.len(), blob.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowdfund_common::storage::MemoryStore;

    fn ledger(store: &MemoryStore) -> CampaignLedger<MemoryStore> {
        CampaignLedger::new(store.clone(), StorageKeys::default())
    }

    #[test]
    fn test_load_seeds_empty_store() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);

        let campaigns = ledger.load().unwrap();
        assert_eq!(campaigns.len(), 6);
        assert_eq!(ledger.next_id(), 6);

        let stored = store.get("campaignsData").unwrap().expect("seed persisted");
        let parsed: Vec<Campaign> = serde_json::from_str(&stored).unwrap();
        assert_eq!(parsed, seed_campaigns());
        assert_eq!(store.get("campaignsNextId").unwrap().as_deref(), Some("6"));
    }

    #[test]
    fn test_load_seeds_empty_array_and_null() {
        for raw in ["[]", "null"] {
            let store = MemoryStore::new();
            store.set("campaignsData", raw).unwrap();

            let mut ledger = ledger(&store);
            assert_eq!(ledger.load().unwrap().len(), 6, "blob {raw:?}");
        }
    }

    #[test]
    fn test_load_keeps_stored_campaigns() {
        let store = MemoryStore::new();
        let mut only = seed_campaigns();
        only.truncate(2);
        store.set("campaignsData", &serde_json::to_string(&only).unwrap()).unwrap();

        let mut ledger = ledger(&store);
        assert_eq!(ledger.load().unwrap(), only.as_slice());
        assert_eq!(ledger.next_id(), 2);
    }

    #[test]
    fn test_corrupt_blob_is_backed_up_and_reseeded() {
        let store = MemoryStore::new();
        store.set("campaignsData", "{not json").unwrap();

        let mut ledger = ledger(&store);
        assert_eq!(ledger.load().unwrap().len(), 6);
        assert_eq!(
            store.get("campaignsData.corrupt").unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_counter_never_goes_below_max_id() {
        let store = MemoryStore::new();
        let mut campaigns = seed_campaigns();
        campaigns[0].id = 41;
        store.set("campaignsData", &serde_json::to_string(&campaigns).unwrap()).unwrap();
        store.set("campaignsNextId", "3").unwrap();

        let mut ledger = ledger(&store);
        ledger.load().unwrap();
        assert_eq!(ledger.next_id(), 42);
    }

    #[test]
    fn test_counter_ahead_of_ledger_is_kept() {
        let store = MemoryStore::new();
        store.set("campaignsNextId", "10").unwrap();

        let mut ledger = ledger(&store);
        ledger.load().unwrap();
        assert_eq!(ledger.next_id(), 10);
    }

    #[test]
    fn test_max_stored_id_loads() {
        let store = MemoryStore::new();
        let mut campaigns = seed_campaigns();
        campaigns[0].id = u64::MAX;
        store.set("campaignsData", &serde_json::to_string(&campaigns).unwrap()).unwrap();

        let mut ledger = ledger(&store);
        assert_eq!(ledger.load().unwrap().len(), 6);
        assert_eq!(ledger.next_id(), u64::MAX);
    }

    #[test]
    fn test_null_target_blob_is_kept() {
        let store = MemoryStore::new();
        let raw = r#"[
            {"id":7,"owner":"0xA","title":"Blank goal","description":"D","target":null,
             "deadline":1767139200000,"amountCollected":0,"image":"img","donators":[]},
            {"id":0,"owner":"0x1234...","title":"Project Nebula: A Sci-Fi Game","description":"D",
             "target":50,"amountCollected":35.5,"image":"img","donators":[]}
        ]"#;
        store.set("campaignsData", raw).unwrap();

        let mut ledger = ledger(&store);
        let campaigns = ledger.load().unwrap();
        assert_eq!(campaigns.len(), 2);
        assert_eq!(campaigns[0].title, "Blank goal");
        assert!(campaigns[0].target.is_nan());
        assert_eq!(store.get("campaignsData.corrupt").unwrap(), None);
        assert_eq!(ledger.next_id(), 8);

        let issues = diagnose(ledger.list());
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], crate::core::campaign::LedgerIssue::NonPositiveTarget { id: 7, .. }));
    }

    #[test]
    fn test_unreadable_counter_is_ignored() {
        let store = MemoryStore::new();
        store.set("campaignsNextId", "lots").unwrap();

        let mut ledger = ledger(&store);
        ledger.load().unwrap();
        assert_eq!(ledger.next_id(), 6);
    }

    #[test]
    fn test_find_by_id() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);
        assert!(matches!(ledger.find_by_id(0), Err(FundError::NotFound(0))));

        ledger.load().unwrap();
        assert_eq!(ledger.find_by_id(3).unwrap().title, "Quantum Leap Music Studio");
        assert!(matches!(ledger.find_by_id(99), Err(FundError::NotFound(99))));
    }

    #[test]
    fn test_created_by_ignores_case() {
        let store = MemoryStore::new();
        let mut ledger = ledger(&store);
        ledger.load().unwrap();

        let created = ledger.created_by("0XABCD...");
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].id, 1);
        assert!(ledger.backed_by("0xabcd...").is_empty());
    }
}
