//! Pull the readable body out of a Yahoo article page.

use scraper::{Html, Selector};

use crate::core::FinbotError;

/// CSS selector for the container that holds the article text.
pub(crate) const ARTICLE_BODY_SELECTOR: &str = "div.caas-body";

/// Returns the text of the first article body container, or `None` if the page has none.
///
/// Every text node under the container is kept and joined with `\n`; markup is dropped.
pub(crate) fn extract_article_body(html: &str) -> Result<Option<String>, FinbotError> {
    let selector = Selector::parse(ARTICLE_BODY_SELECTOR)
        .map_err(|e| FinbotError::Selector(format!("{ARTICLE_BODY_SELECTOR}: {e}")))?;

    let document = Html::parse_document(html);
    let body = document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<Vec<_>>().join("\n"));

    Ok(body)
}
