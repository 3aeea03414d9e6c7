use crate::brreg::Registry;
use std::sync::atomic::{AtomicU64, Ordering};

/// Organizational form sent to Enhetsregisteret: voluntary associations
pub const ORG_FORM_FLI: &str = "FLI";
/// Prefix search mode understood by Enhetsregisteret
pub const NAME_SEARCH_METHOD: &str = "FORTLOEPENDE";

/// Everything needed to fetch one page from a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub mode: Registry,
    pub query: String,
    /// ICNPO code, empty for "all categories"
    pub category: String,
    pub page: u32,
    pub size: u32,
}

impl SearchRequest {
    /// Query string parameters for the registry endpoint
    pub fn query_params(&self, municipality_number: &str) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if self.mode == Registry::Enhetsregisteret {
            params.push(("organisasjonsform", ORG_FORM_FLI.to_string()));
        }
        params.push(("kommunenummer", municipality_number.to_string()));
        params.push(("size", self.size.to_string()));
        params.push(("page", self.page.to_string()));

        if !self.query.is_empty() {
            params.push(("navn", self.query.clone()));
            if self.mode == Registry::Enhetsregisteret {
                params.push(("navnMetodeForSoek", NAME_SEARCH_METHOD.to_string()));
            }
        }

        if !self.category.is_empty() && self.mode.supports_categories() {
            params.push(("icnpoKategoriKode", self.category.clone()));
        }

        params
    }
}

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Hands out increasing tokens; only the newest one is current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new fetch, superseding every earlier token
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mode: Registry, query: &str, category: &str) -> SearchRequest {
        SearchRequest {
            mode,
            query: query.to_string(),
            category: category.to_string(),
            page: 1,
            size: 25,
        }
    }

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_enhet_params_without_query() {
        let params = request(Registry::Enhetsregisteret, "", "").query_params("4012");

        assert_eq!(param(&params, "organisasjonsform"), Some("FLI"));
        assert_eq!(param(&params, "kommunenummer"), Some("4012"));
        assert_eq!(param(&params, "page"), Some("1"));
        assert_eq!(param(&params, "size"), Some("25"));
        assert_eq!(param(&params, "navn"), None);
        assert_eq!(param(&params, "navnMetodeForSoek"), None);
    }

    #[test]
    fn test_enhet_params_with_query_add_search_method() {
        let params = request(Registry::Enhetsregisteret, "kor", "7.3").query_params("4012");

        assert_eq!(param(&params, "navn"), Some("kor"));
        assert_eq!(param(&params, "navnMetodeForSoek"), Some("FORTLOEPENDE"));
        // Enhetsregisteret has no categories
        assert_eq!(param(&params, "icnpoKategoriKode"), None);
    }

    #[test]
    fn test_frivillig_params() {
        let params =
            request(Registry::Frivillighetsregisteret, "speider", "7.3").query_params("4012");

        assert_eq!(param(&params, "organisasjonsform"), None);
        assert_eq!(param(&params, "kommunenummer"), Some("4012"));
        assert_eq!(param(&params, "navn"), Some("speider"));
        assert_eq!(param(&params, "navnMetodeForSoek"), None);
        assert_eq!(param(&params, "icnpoKategoriKode"), Some("7.3"));

        let params = request(Registry::Frivillighetsregisteret, "", "").query_params("4012");
        assert_eq!(param(&params, "icnpoKategoriKode"), None);
        assert_eq!(param(&params, "navn"), None);
    }

    #[test]
    fn test_only_latest_token_is_current() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        assert!(tracker.is_current(first));

        let second = tracker.issue();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
