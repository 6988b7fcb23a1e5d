mod api;
mod model;
mod wire;

pub use model::NewsItem;

use crate::core::{FbClient, FinbotError};

impl FbClient {
    /// Fetches the most recent news items Yahoo lists for `symbol`.
    ///
    /// The symbol is not validated; an unknown ticker usually comes back as an empty list.
    ///
    /// # Errors
    ///
    /// Returns a `FinbotError` if the request fails, the service answers with a
    /// non-2xx status, or the body cannot be parsed.
    pub async fn recent_news(&self, symbol: &str) -> Result<Vec<NewsItem>, FinbotError> {
        api::fetch_news(self, symbol).await
    }
}
