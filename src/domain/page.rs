use serde::{Deserialize, Serialize};

/// Standard `{ "data": ... }` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// One entry of a paginator's `links` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    #[serde(default)]
    pub active: bool,
}

/// A paginated list as the backend's paginator renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default)]
    pub links: Vec<PageLink>,
}

fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    pub fn single(data: Vec<T>) -> Self {
        Self {
            data,
            current_page: 1,
            last_page: 1,
            links: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counters_default_to_one() {
        let page: Page<u32> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 1);
        assert!(page.links.is_empty());
    }
}
