use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default)]
    pub(crate) news: Option<Vec<WireNewsItem>>,
}

#[derive(Deserialize)]
pub(crate) struct WireNewsItem {
    pub(crate) uuid: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) publisher: Option<String>,
    pub(crate) link: Option<String>,
    #[serde(rename = "providerPublishTime")]
    pub(crate) provider_publish_time: Option<i64>,
}
