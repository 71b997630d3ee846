//! Collaborator contracts implemented by concrete data-access layers.
//!
//! This crate never talks to a datastore. These traits are the shared
//! vocabulary between service code and repository implementations: services
//! build a [`Criteria`], repositories answer with a [`Page`] whose tokens
//! were issued by a [`TokenCodec`](crate::token::TokenCodec).

use async_trait::async_trait;

use crate::criteria::Criteria;
use crate::page::Page;

/// Write side of a repository.
#[async_trait]
pub trait WriteRepository<T>: Send + Sync {
    type Error;

    async fn save(&self, entity: T) -> Result<(), Self::Error>;
    async fn save_many(&self, entities: Vec<T>) -> Result<(), Self::Error>;
    async fn remove(&self, entity: T) -> Result<(), Self::Error>;
}

/// Keyed read side of a repository.
#[async_trait]
pub trait ReadRepository<T, K>: Send + Sync {
    type Error;

    async fn find_by_key(&self, key: &K) -> Result<Option<T>, Self::Error>;
}

/// Paging read side of a repository.
///
/// Implementations read the criteria's token through the codec's tolerant
/// accessors to resume iteration, and issue fresh tokens on the page they
/// return.
#[async_trait]
pub trait PagingRepository<T>: Send + Sync {
    type Error;

    async fn find_all(&self, criteria: Criteria) -> Result<Page<T>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;
    use crate::token::{PageToken, TokenCodec};
    use pageseal_crypto::AesCfbEncryptor;

    const TEST_KEY: &[u8; 32] = b"an-insecure-32-byte-test-key-00!";
    const DEFAULT_PAGE_SIZE: usize = 20;

    /// Offset-paginated repository over an in-memory dataset.
    struct InMemoryRepository {
        items: Vec<String>,
        codec: TokenCodec<AesCfbEncryptor>,
    }

    impl InMemoryRepository {
        fn new(items: Vec<String>) -> Self {
            Self {
                items,
                codec: TokenCodec::new(AesCfbEncryptor::new(TEST_KEY).unwrap()),
            }
        }
    }

    #[async_trait]
    impl PagingRepository<String> for InMemoryRepository {
        type Error = TokenError;

        async fn find_all(&self, criteria: Criteria) -> Result<Page<String>, Self::Error> {
            let offset = self.codec.offset_or_default(&criteria.page_token).max(0) as usize;
            let size = criteria.page_size.unwrap_or(DEFAULT_PAGE_SIZE as u64) as usize;
            let total = self.items.len();
            let end = offset.saturating_add(size).min(total);

            let next_page_token = if end < total {
                self.codec.encode_offset(end as i64)?
            } else {
                PageToken::none()
            };
            let previous_page_token = self.codec.encode_offset(offset as i64 - size as i64)?;

            Ok(Page {
                previous_page_token,
                next_page_token,
                total_items: total as u64,
                items: self
                    .items
                    .get(offset..end)
                    .unwrap_or_default()
                    .to_vec(),
            })
        }
    }

    fn dataset(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{i:03}")).collect()
    }

    #[tokio::test]
    async fn first_page_has_no_previous_token() {
        let repo = InMemoryRepository::new(dataset(5));
        let criteria = Criteria {
            page_size: Some(2),
            ..Criteria::default()
        };
        let page = repo.find_all(criteria).await.unwrap();
        assert_eq!(page.items, ["item-000", "item-001"]);
        assert_eq!(page.total_items, 5);
        assert!(page.previous_page_token.is_empty());
        assert!(!page.next_page_token.is_empty());
    }

    #[tokio::test]
    async fn walking_tokens_visits_the_whole_dataset() {
        let repo = InMemoryRepository::new(dataset(7));
        let mut token = PageToken::none();
        let mut seen = Vec::new();
        loop {
            let criteria = Criteria {
                page_size: Some(3),
                page_token: token,
                ..Criteria::default()
            };
            let page = repo.find_all(criteria).await.unwrap();
            seen.extend(page.items);
            if page.next_page_token.is_empty() {
                break;
            }
            token = page.next_page_token;
        }
        assert_eq!(seen, dataset(7));
    }

    #[tokio::test]
    async fn tampered_token_restarts_from_the_first_page() {
        let repo = InMemoryRepository::new(dataset(4));
        let criteria = Criteria {
            page_size: Some(2),
            page_token: PageToken::from("deadbeef"),
            ..Criteria::default()
        };
        let page = repo.find_all(criteria).await.unwrap();
        assert_eq!(page.items, ["item-000", "item-001"]);
    }
}
