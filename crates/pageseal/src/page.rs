//! Page envelope returned by paging repositories.

use serde::{Deserialize, Serialize};

use crate::token::PageToken;

/// A chunk of items from a dataset plus the tokens needed to fetch more.
///
/// Constructed fresh per response; ownership transfers to the caller. Field
/// names match the JSON the transport layer exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub previous_page_token: PageToken,
    pub next_page_token: PageToken,
    pub total_items: u64,
    pub items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            previous_page_token: PageToken::none(),
            next_page_token: PageToken::none(),
            total_items: 0,
            items: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Map every item through `f`, keeping tokens and total untouched.
    ///
    /// This is how a repository's row type becomes a transport view without
    /// re-deriving pagination state.
    pub fn map<B>(self, f: impl FnMut(T) -> B) -> Page<B> {
        Page {
            previous_page_token: self.previous_page_token,
            next_page_token: self.next_page_token,
            total_items: self.total_items,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_tokens_and_total() {
        let page = Page {
            previous_page_token: PageToken::from("aa"),
            next_page_token: PageToken::from("bb"),
            total_items: 3,
            items: vec![1, 2, 3],
        };
        let mapped = page.map(|n: i32| n.to_string());
        assert_eq!(mapped.previous_page_token, PageToken::from("aa"));
        assert_eq!(mapped.next_page_token, PageToken::from("bb"));
        assert_eq!(mapped.total_items, 3);
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
    }

    #[test]
    fn json_field_names_are_stable() {
        let page = Page {
            items: vec!["x"],
            total_items: 1,
            ..Page::default()
        };
        let json = serde_json::to_string(&page).unwrap();
        for field in [
            "previous_page_token",
            "next_page_token",
            "total_items",
            "items",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }

    #[test]
    fn default_is_the_empty_page() {
        let page: Page<i32> = Page::default();
        assert!(page.previous_page_token.is_empty());
        assert!(page.next_page_token.is_empty());
        assert_eq!(page.total_items, 0);
        assert!(page.items.is_empty());
    }
}
