use chrono::DateTime;

use crate::{
    core::{FbClient, FinbotError, net},
    news::{model::NewsItem, wire},
};

const PUBLISHED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a Unix timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Returns `None` when the timestamp is outside chrono's representable range.
pub(crate) fn format_publish_time(ts: i64) -> Option<String> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.format(PUBLISHED_FORMAT).to_string())
}

/// Entries without a headline, a link or a representable publish time can't be
/// scraped or reported, so they yield `None`.
fn into_news_item(raw: wire::WireNewsItem) -> Option<NewsItem> {
    let title = raw.title?;
    let link = raw.link?;
    let ts = raw.provider_publish_time?;
    let published = format_publish_time(ts)?;

    Some(NewsItem {
        uuid: raw.uuid,
        title,
        link,
        publisher: raw.publisher,
        provider_publish_time: ts,
        published,
    })
}

pub(crate) fn parse_news_body(body: &str) -> Result<Vec<NewsItem>, FinbotError> {
    let envelope: wire::SearchEnvelope = serde_json::from_str(body)?;

    let items = envelope
        .news
        .unwrap_or_default()
        .into_iter()
        .filter_map(|raw| {
            let uuid = raw.uuid.clone();
            let item = into_news_item(raw);
            if item.is_none() {
                tracing::debug!(?uuid, "dropping news entry without title, link or valid publish time");
            }
            item
        })
        .collect();

    Ok(items)
}

#[tracing::instrument(skip(client), err)]
pub(super) async fn fetch_news(client: &FbClient, symbol: &str) -> Result<Vec<NewsItem>, FinbotError> {
    let mut url = client.base_search().clone();
    url.query_pairs_mut()
        .append_pair("q", symbol)
        .append_pair("quotesCount", "0")
        .append_pair("newsCount", &client.news_count().to_string())
        .append_pair("listsCount", "0");

    let resp = client
        .http()
        .get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    let body = net::get_text(resp, "news").await?;
    let items = parse_news_body(&body)?;
    tracing::debug!(count = items.len(), "parsed news items");
    Ok(items)
}
