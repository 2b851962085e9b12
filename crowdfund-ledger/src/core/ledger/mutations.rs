use tracing::info;

use crowdfund_common::{
    address::Account,
    error::{FundError, Result},
    storage::KeyValueStore,
    utils::parse_amount,
};

use super::CampaignLedger;
use crate::core::campaign::{Campaign, CampaignDraft};

impl<S: KeyValueStore> CampaignLedger<S> {
    /// Registers a new campaign owned by `owner` and puts it at the front.
    ///
    /// - `owner` must be a connected account (`NotConnected`).
    /// - `draft.target` must parse to a positive number (`InvalidAmount`).
    ///
    /// The ledger is persisted before the in-memory list changes; on any
    /// error both are left as they were.
    pub fn create(&mut self, owner: Option<&Account>, draft: CampaignDraft) -> Result<Campaign> {
        let owner = owner.ok_or(FundError::NotConnected)?;
        let target = parse_amount(&draft.target)?;

        let id = self.next_id;
        let following = match id.checked_add(1) {
            Some(following) if !self.campaigns.iter().any(|c| c.id == id) => following,
            _ => return Err(FundError::IdsExhausted),
        };
        let campaign = Campaign {
            id,
            owner: owner.to_string(),
            title: draft.title,
            description: draft.description,
            target,
            deadline: Some(draft.deadline),
            amount_collected: 0.0,
            image: draft.image,
            donators: Vec::new(),
        };

        let mut updated = Vec::with_capacity(self.campaigns.len() + 1);
        updated.push(campaign.clone());
        updated.extend(self.campaigns.iter().cloned());

        self.persist(following, &updated)?;
        self.campaigns = updated;
        self.next_id = following;

        info!("📝 Campaign [{}] \"{}\" created by {}", id, campaign.title, owner);
        Ok(campaign)
    }

    /// Records a donation of `amount` from `account` on campaign `campaign_id`.
    ///
    /// Checks run in order: connected account (`NotConnected`), positive
    /// amount (`InvalidAmount`), existing campaign (`NotFound`). Funding past
    /// the target is allowed.
    pub fn fund(
        &mut self,
        campaign_id: u64,
        account: Option<&Account>,
        amount: &str,
    ) -> Result<Campaign> {
        let account = account.ok_or(FundError::NotConnected)?;
        let amount = parse_amount(amount)?;
        let index = self
            .campaigns
            .iter()
            .position(|c| c.id == campaign_id)
            .ok_or(FundError::NotFound(campaign_id))?;

        let mut updated = self.campaigns.clone();
        updated[index].record_donation(account.as_str(), amount);

        self.persist(self.next_id, &updated)?;
        self.campaigns = updated;

        let campaign = self.campaigns[index].clone();
        info!(
            "💸 {} funded campaign [{}] with {} (total {})",
            account, campaign_id, amount, campaign.amount_collected
        );
        Ok(campaign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    use crowdfund_common::{
        config::StorageKeys,
        storage::{MemoryStore, StoreError},
    };

    /// Memory store whose writes fail once `broken` is set.
    #[derive(Clone)]
    struct BrokenStore {
        inner: MemoryStore,
        broken: Arc<AtomicBool>,
    }

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
            if self.broken.load(Ordering::SeqCst) {
                return Err(StoreError::Backend("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }
    }

    fn loaded(store: &MemoryStore) -> CampaignLedger<MemoryStore> {
        let mut ledger = CampaignLedger::new(store.clone(), StorageKeys::default());
        ledger.load().unwrap();
        ledger
    }

    fn account(raw: &str) -> Account {
        Account::try_from(raw).unwrap()
    }

    fn draft(target: &str) -> CampaignDraft {
        CampaignDraft {
            title: "T".to_string(),
            description: "D".to_string(),
            target: target.to_string(),
            deadline: 4_102_444_800_000,
            image: "img".to_string(),
        }
    }

    #[test]
    fn test_create_goes_to_front_with_next_id() {
        let store = MemoryStore::new();
        let mut ledger = loaded(&store);

        let created = ledger.create(Some(&account("0xA")), draft("10")).unwrap();

        assert_eq!(created.id, 6);
        assert_eq!(created.amount_collected, 0.0);
        assert!(created.donators.is_empty());
        assert_eq!(ledger.list()[0], created);
        assert_eq!(ledger.len(), 7);
        assert_eq!(ledger.next_id(), 7);
        assert_eq!(store.get("campaignsNextId").unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn test_create_persists_whole_ledger() {
        let store = MemoryStore::new();
        let mut ledger = loaded(&store);
        ledger.create(Some(&account("0xA")), draft("10")).unwrap();

        let mut reloaded = CampaignLedger::new(store.clone(), StorageKeys::default());
        assert_eq!(reloaded.load().unwrap(), ledger.list());
    }

    #[test]
    fn test_create_requires_account() {
        let store = MemoryStore::new();
        let mut ledger = loaded(&store);
        let before = store.get("campaignsData").unwrap();

        let err = ledger.create(None, draft("10")).unwrap_err();

        assert!(matches!(err, FundError::NotConnected));
        assert_eq!(ledger.len(), 6);
        assert_eq!(store.get("campaignsData").unwrap(), before);
    }

    #[test]
    fn test_create_rejects_bad_target() {
        let store = MemoryStore::new();
        let mut ledger = loaded(&store);

        for target in ["0", "-5", "ten", ""] {
            let err = ledger.create(Some(&account("0xA")), draft(target)).unwrap_err();
            assert!(matches!(err, FundError::InvalidAmount(_)), "target {target:?}");
        }
        assert_eq!(ledger.len(), 6);
        assert_eq!(ledger.next_id(), 6);
    }

    #[test]
    fn test_fund_seed_campaign() {
        let store = MemoryStore::new();
        let mut ledger = loaded(&store);

        let funded = ledger.fund(0, Some(&account("0xB")), "2.5").unwrap();

        assert_eq!(funded.amount_collected, 38.0);
        assert_eq!(funded.donators.len(), 1);
        assert_eq!(funded.donators[0].address, "0xB");
        assert_eq!(funded.donators[0].amount, 2.5);
        assert_eq!(ledger.find_by_id(0).unwrap(), &funded);
    }

    #[test]
    fn test_fund_allows_overfunding() {
        let store = MemoryStore::new();
        let mut ledger = loaded(&store);

        let funded = ledger.fund(5, Some(&account("0xB")), "100").unwrap();
        assert!(funded.amount_collected > funded.target);
        assert_eq!(funded.percent_funded(), 100.0);
    }

    #[test]
    fn test_fund_error_order() {
        let store = MemoryStore::new();
        let mut ledger = loaded(&store);
        let who = account("0xB");

        assert!(matches!(ledger.fund(99, None, "abc"), Err(FundError::NotConnected)));
        assert!(matches!(ledger.fund(99, Some(&who), "abc"), Err(FundError::InvalidAmount(_))));
        assert!(matches!(ledger.fund(99, Some(&who), "1"), Err(FundError::NotFound(99))));
    }

    #[test]
    fn test_failed_fund_leaves_campaign_unchanged() {
        let store = MemoryStore::new();
        let mut ledger = loaded(&store);
        let before = ledger.find_by_id(2).unwrap().clone();
        let blob = store.get("campaignsData").unwrap();

        for amount in ["0", "-1", "abc"] {
            assert!(ledger.fund(2, Some(&account("0xB")), amount).is_err());
        }
        assert!(ledger.fund(2, None, "1").is_err());

        assert_eq!(ledger.find_by_id(2).unwrap(), &before);
        assert_eq!(store.get("campaignsData").unwrap(), blob);
    }

    #[test]
    fn test_write_failure_leaves_ledger_untouched() {
        let store = BrokenStore {
            inner: MemoryStore::new(),
            broken: Arc::new(AtomicBool::new(false)),
        };
        let mut ledger = CampaignLedger::new(store.clone(), StorageKeys::default());
        ledger.load().unwrap();
        let before = ledger.list().to_vec();
        let blob = store.inner.get("campaignsData").unwrap();

        store.broken.store(true, Ordering::SeqCst);

        let err = ledger.create(Some(&account("0xA")), draft("10")).unwrap_err();
        assert!(matches!(err, FundError::Storage(_)));
        let err = ledger.fund(0, Some(&account("0xB")), "2.5").unwrap_err();
        assert!(matches!(err, FundError::Storage(_)));

        assert_eq!(ledger.list(), before.as_slice());
        assert_eq!(ledger.next_id(), 6);
        assert_eq!(store.inner.get("campaignsData").unwrap(), blob);
        assert_eq!(store.inner.get("campaignsNextId").unwrap().as_deref(), Some("6"));
    }

    #[test]
    fn test_create_refuses_exhausted_counter() {
        let store = MemoryStore::new();
        store.set("campaignsNextId", &u64::MAX.to_string()).unwrap();
        let mut ledger = loaded(&store);
        assert_eq!(ledger.next_id(), u64::MAX);

        let err = ledger.create(Some(&account("0xA")), draft("10")).unwrap_err();
        assert!(matches!(err, FundError::IdsExhausted));
        assert_eq!(ledger.len(), 6);
    }

    #[test]
    fn test_create_refuses_when_max_id_is_taken() {
        let store = MemoryStore::new();
        let mut campaigns = crate::core::ledger::seed_campaigns();
        campaigns[3].id = u64::MAX;
        store.set("campaignsData", &serde_json::to_string(&campaigns).unwrap()).unwrap();

        let mut ledger = loaded(&store);
        let err = ledger.create(Some(&account("0xA")), draft("10")).unwrap_err();
        assert!(matches!(err, FundError::IdsExhausted));

        // funding still works
        let funded = ledger.fund(u64::MAX, Some(&account("0xB")), "1").unwrap();
        assert_eq!(funded.donators.len(), 1);
    }
}
