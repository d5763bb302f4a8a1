use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use pinhole_core::repository::{Claim, ReadRepository, Repository, Result};
use pinhole_core::ShortCode;
use tracing::trace;

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap shards its locks, so lookups of different codes never contend
/// and reads run concurrently with writes to other shards. A claim holds the
/// shard write lock of its code for the whole check-and-insert, which makes
/// claims on the same code strictly serialized.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, String>,
}

impl InMemoryRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of assigned codes.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<String>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| entry.value().clone()))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.storage.contains_key(code.as_str()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn claim(&self, code: &ShortCode, original_url: &str) -> Result<Claim> {
        let claim = match self.storage.entry(code.as_str().to_owned()) {
            Entry::Occupied(entry) if entry.get() == original_url => Claim::Existing,
            Entry::Occupied(_) => Claim::Conflict,
            Entry::Vacant(entry) => {
                entry.insert(original_url.to_owned());
                Claim::Inserted
            }
        };

        trace!(code = %code, ?claim, "claimed short code");
        Ok(claim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    #[tokio::test]
    async fn claim_and_get() {
        let repo = InMemoryRepository::new();

        let claim = repo
            .claim(&code("abc123"), "https://example.com")
            .await
            .unwrap();
        assert_eq!(claim, Claim::Inserted);

        let result = repo.get(&code("abc123")).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.get(&code("nope")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn claim_same_url_is_existing() {
        let repo = InMemoryRepository::new();

        repo.claim(&code("abc123"), "https://example.com")
            .await
            .unwrap();
        let claim = repo
            .claim(&code("abc123"), "https://example.com")
            .await
            .unwrap();

        assert_eq!(claim, Claim::Existing);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn claim_conflict_keeps_original_mapping() {
        let repo = InMemoryRepository::new();

        repo.claim(&code("abc123"), "https://example.com")
            .await
            .unwrap();
        let claim = repo
            .claim(&code("abc123"), "https://other.com")
            .await
            .unwrap();

        assert_eq!(claim, Claim::Conflict);
        assert!(!claim.is_held());
        let result = repo.get(&code("abc123")).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn exists_checks() {
        let repo = InMemoryRepository::with_capacity(4);

        assert!(!repo.exists(&code("abc123")).await.unwrap());
        assert!(repo.is_empty());

        repo.claim(&code("abc123"), "https://example.com")
            .await
            .unwrap();

        assert!(repo.exists(&code("abc123")).await.unwrap());
        assert!(!repo.is_empty());
    }

    #[tokio::test]
    async fn concurrent_claims_on_one_code_have_a_single_winner() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..32u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let url = format!("https://example{}.com", i);
                let claim = repo.claim(&code("shared"), &url).await.unwrap();
                (url, claim)
            }));
        }

        let mut winners = vec![];
        for handle in handles {
            let (url, claim) = handle.await.unwrap();
            if claim == Claim::Inserted {
                winners.push(url);
            } else {
                assert_eq!(claim, Claim::Conflict);
            }
        }

        assert_eq!(winners.len(), 1);
        let stored = repo.get(&code("shared")).await.unwrap();
        assert_eq!(stored.as_deref(), Some(winners[0].as_str()));
    }

    #[tokio::test]
    async fn concurrent_access() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let c = ShortCode::new_unchecked(format!("code-{:03}", i));
                repo.claim(&c, &format!("https://example{}.com", i))
                    .await
                    .unwrap();
            }));
        }

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let c = ShortCode::new_unchecked(format!("code-{:03}", i));
                // either absent or the complete value, never anything else
                if let Some(url) = repo.get(&c).await.unwrap() {
                    assert_eq!(url, format!("https://example{}.com", i));
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let c = ShortCode::new_unchecked(format!("code-{:03}", i));
            let result = repo.get(&c).await.unwrap();
            assert_eq!(result, Some(format!("https://example{}.com", i)));
        }
    }
}
