//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo v1 search API; its `news` section backs the recent-news lookup.
pub(crate) const DEFAULT_BASE_SEARCH: &str = "https://query2.finance.yahoo.com/v1/finance/search";

/// How many news items to request when the builder does not say otherwise.
pub(crate) const DEFAULT_NEWS_COUNT: u32 = 10;
