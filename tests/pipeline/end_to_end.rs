use finbot_media::{ArticleContent, ReportRow, SummaryLength, TickerSession};

use crate::common::{
    FakeClassifier, FakeSummarizer, article_html, client_for, mock_news, mock_page, news_body,
    setup_server,
};

#[tokio::test]
async fn single_article_becomes_single_row() {
    let server = setup_server();
    let link = server.url("/1");
    let news = mock_news(
        &server,
        "ACME",
        news_body(&[("ACME beats", link.as_str(), "Wire", 1_700_000_000)]),
    );
    let page = mock_page(&server, "/1", 200, article_html("Good quarter. Profits up."));

    let client = client_for(&server);
    let summarizer = FakeSummarizer::constant("Profits up");
    let classifier = FakeClassifier::constant("5 stars");

    let mut session = TickerSession::new("ACME");
    let (items, contents) = session.fetch_news(&client).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        contents.get(&link),
        Some(&ArticleContent::Body("Good quarter. Profits up.".into()))
    );

    session
        .summarize_and_analyze(&summarizer, &classifier)
        .await
        .unwrap();
    news.assert();
    page.assert();

    assert_eq!(
        session.report().rows(),
        [ReportRow {
            title: "ACME beats".into(),
            url: link.clone(),
            publisher: Some("Wire".into()),
            published: "2023-11-14 22:13:20".into(),
            summary: "Profits up".into(),
            sentiment: 5.0,
        }]
    );

    let calls = summarizer.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Good quarter. Profits up.");
    assert_eq!(calls[0].1, SummaryLength { min: 30, max: 60 });
    assert_eq!(classifier.call_count(), 1);

    let mut out = Vec::new();
    session.report().render(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        format!(
            "Title: ACME beats\nURL: {link}\nSummary: Profits up\nSentiment Score: 5.0\n{}\n",
            "=".repeat(50)
        )
    );
}

#[tokio::test]
async fn long_article_is_chunked_per_service() {
    let server = setup_server();
    let link = server.url("/long");
    let body = "x".repeat(1500);
    let _news = mock_news(
        &server,
        "ACME",
        news_body(&[("Long read", link.as_str(), "Wire", 1_700_000_000)]),
    );
    let _page = mock_page(&server, "/long", 200, article_html(&body));

    let summarizer = FakeSummarizer::new(|chunk| Ok(format!("{} chars", chunk.chars().count())));
    let classifier = FakeClassifier::sequence(&["5 stars", "3 stars", "4 stars"]);

    let mut session = TickerSession::new("ACME");
    session.fetch_news(&client_for(&server)).await.unwrap();
    session
        .summarize_and_analyze(&summarizer, &classifier)
        .await
        .unwrap();

    // 1500 chars: two 1024-char summary chunks, three 512-char sentiment chunks.
    assert_eq!(summarizer.call_count(), 2);
    assert_eq!(classifier.call_count(), 3);
    let sentiment_chunks: Vec<usize> = classifier
        .calls
        .lock()
        .unwrap()
        .iter()
        .map(|c| c.chars().count())
        .collect();
    assert_eq!(sentiment_chunks, [512, 512, 476]);

    let row = &session.report().rows()[0];
    assert_eq!(row.summary, "1024 chars\n476 chars");
    assert_eq!(row.sentiment, 4.0);
}

#[tokio::test]
async fn rows_follow_article_order_and_skip_failures() {
    let server = setup_server();
    let first = server.url("/a");
    let missing = server.url("/b");
    let third = server.url("/c");
    let _news = mock_news(
        &server,
        "ACME",
        news_body(&[
            ("First", first.as_str(), "Wire", 1_700_000_000),
            ("Video", missing.as_str(), "Wire", 1_700_000_100),
            ("Third", third.as_str(), "Daily", 1_700_000_200),
        ]),
    );
    let _a = mock_page(&server, "/a", 200, article_html("alpha"));
    let _b = mock_page(&server, "/b", 200, "<html><body>no body</body></html>".into());
    let _c = mock_page(&server, "/c", 200, article_html("gamma"));

    let summarizer = FakeSummarizer::new(|chunk| Ok(chunk.to_uppercase()));
    let classifier = FakeClassifier::constant("2 stars");

    let mut session = TickerSession::new("ACME");
    session.fetch_news(&client_for(&server)).await.unwrap();
    assert_eq!(session.articles().len(), 3);
    assert_eq!(session.articles().get(&missing), Some(&ArticleContent::NotFound));

    session
        .summarize_and_analyze(&summarizer, &classifier)
        .await
        .unwrap();

    let rows = session.report().rows();
    let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["First", "Third"]);
    assert_eq!(rows[1].summary, "GAMMA");
    assert_eq!(rows[1].publisher.as_deref(), Some("Daily"));
    assert!(rows.iter().all(|r| r.url != missing));
}
