use finbot_media::{ArticleContent, FinbotError, TickerSession};

use crate::common::{
    FakeClassifier, FakeSummarizer, UNREACHABLE_URL, article_html, client_for, mock_news,
    mock_page, news_body, setup_server,
};

#[tokio::test]
async fn connection_error_is_recorded_not_raised() {
    let server = setup_server();
    let _news = mock_news(
        &server,
        "ACME",
        news_body(&[("Down", UNREACHABLE_URL, "Wire", 1_700_000_000)]),
    );

    let mut session = TickerSession::new("ACME");
    let (_, contents) = session.fetch_news(&client_for(&server)).await.unwrap();
    assert_eq!(contents.get(UNREACHABLE_URL), Some(&ArticleContent::RequestError));

    let summarizer = FakeSummarizer::constant("unused");
    let classifier = FakeClassifier::constant("3 stars");
    session
        .summarize_and_analyze(&summarizer, &classifier)
        .await
        .unwrap();

    assert!(session.report().is_empty());
    assert_eq!(summarizer.call_count(), 0);
    assert_eq!(classifier.call_count(), 0);
}

#[tokio::test]
async fn no_news_means_empty_report_and_no_output() {
    let server = setup_server();
    let _news = mock_news(&server, "NOPE", news_body(&[]));

    let mut session = TickerSession::new("NOPE");
    let (items, contents) = session.fetch_news(&client_for(&server)).await.unwrap();
    assert!(items.is_empty());
    assert!(contents.is_empty());

    session
        .summarize_and_analyze(&FakeSummarizer::constant("x"), &FakeClassifier::constant("1 star"))
        .await
        .unwrap();

    let mut out = Vec::new();
    session.report().render(&mut out).unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn lookup_failure_propagates_from_fetch() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/v1/finance/search");
        then.status(503).body("unavailable");
    });

    let mut session = TickerSession::new("ACME");
    let err = session.fetch_news(&client_for(&server)).await.unwrap_err();
    assert!(matches!(err, FinbotError::Status { status: 503, .. }));
}

#[tokio::test]
async fn failed_summary_chunks_are_left_out() {
    let server = setup_server();
    let link = server.url("/1");
    let _news = mock_news(
        &server,
        "ACME",
        news_body(&[("Mixed", link.as_str(), "Wire", 1_700_000_000)]),
    );
    let body = format!("{}{}", "a".repeat(1024), "b".repeat(10));
    let _page = mock_page(&server, "/1", 200, article_html(&body));

    let summarizer = FakeSummarizer::new(|chunk| {
        if chunk.starts_with('a') {
            Err(FinbotError::Inference {
                model: "fake".into(),
                message: "input too long".into(),
            })
        } else {
            Ok("tail summary".into())
        }
    });
    let classifier = FakeClassifier::constant("4 stars");

    let mut session = TickerSession::new("ACME");
    session.fetch_news(&client_for(&server)).await.unwrap();
    session
        .summarize_and_analyze(&summarizer, &classifier)
        .await
        .unwrap();

    assert_eq!(summarizer.call_count(), 2);
    let row = &session.report().rows()[0];
    assert_eq!(row.summary, "tail summary");
    assert_eq!(row.sentiment, 4.0);
}

#[tokio::test]
async fn all_summary_chunks_failing_gives_empty_summary() {
    let server = setup_server();
    let link = server.url("/1");
    let _news = mock_news(
        &server,
        "ACME",
        news_body(&[("Quiet", link.as_str(), "Wire", 1_700_000_000)]),
    );
    let _page = mock_page(&server, "/1", 200, article_html("Short text."));

    let summarizer = FakeSummarizer::new(|_| Err(FinbotError::Data("model offline".into())));
    let classifier = FakeClassifier::constant("3 stars");

    let mut session = TickerSession::new("ACME");
    session.fetch_news(&client_for(&server)).await.unwrap();
    session
        .summarize_and_analyze(&summarizer, &classifier)
        .await
        .unwrap();

    let rows = session.report().rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].summary, "");
    assert_eq!(rows[0].sentiment, 3.0);
}

#[tokio::test]
async fn sentiment_failure_propagates() {
    let server = setup_server();
    let link = server.url("/1");
    let _news = mock_news(
        &server,
        "ACME",
        news_body(&[("Oops", link.as_str(), "Wire", 1_700_000_000)]),
    );
    let _page = mock_page(&server, "/1", 200, article_html("Some text."));

    let classifier = FakeClassifier::new(|_| {
        Err(FinbotError::Inference {
            model: "fake".into(),
            message: "status 503: loading".into(),
        })
    });

    let mut session = TickerSession::new("ACME");
    session.fetch_news(&client_for(&server)).await.unwrap();
    let err = session
        .summarize_and_analyze(&FakeSummarizer::constant("s"), &classifier)
        .await
        .unwrap_err();

    assert!(matches!(err, FinbotError::Inference { .. }));
    assert!(session.report().is_empty());
}

#[tokio::test]
async fn label_without_score_is_a_data_error() {
    let server = setup_server();
    let link = server.url("/1");
    let _news = mock_news(
        &server,
        "ACME",
        news_body(&[("Odd", link.as_str(), "Wire", 1_700_000_000)]),
    );
    let _page = mock_page(&server, "/1", 200, article_html("Some text."));

    let mut session = TickerSession::new("ACME");
    session.fetch_news(&client_for(&server)).await.unwrap();
    let err = session
        .summarize_and_analyze(&FakeSummarizer::constant("s"), &FakeClassifier::constant("POSITIVE"))
        .await
        .unwrap_err();

    assert!(matches!(err, FinbotError::Data(_)));
}

#[tokio::test]
async fn empty_body_gets_no_row() {
    let server = setup_server();
    let link = server.url("/1");
    let _news = mock_news(
        &server,
        "ACME",
        news_body(&[("Blank", link.as_str(), "Wire", 1_700_000_000)]),
    );
    let _page = mock_page(&server, "/1", 200, article_html(""));

    let classifier = FakeClassifier::constant("5 stars");
    let mut session = TickerSession::new("ACME");
    session.fetch_news(&client_for(&server)).await.unwrap();
    assert_eq!(session.articles().get(&link), Some(&ArticleContent::Body(String::new())));

    session
        .summarize_and_analyze(&FakeSummarizer::constant("s"), &classifier)
        .await
        .unwrap();

    assert!(session.report().is_empty());
    assert_eq!(classifier.call_count(), 0);
}

#[tokio::test]
async fn article_without_news_item_is_skipped() {
    let mut session = TickerSession::new("ACME");
    session
        .articles_mut()
        .insert("http://elsewhere/1", ArticleContent::Body("orphan text".into()));

    assert!(matches!(
        session.news_item("http://elsewhere/1"),
        Err(FinbotError::UnknownArticle(url)) if url == "http://elsewhere/1"
    ));

    let classifier = FakeClassifier::constant("5 stars");
    session
        .summarize_and_analyze(&FakeSummarizer::constant("s"), &classifier)
        .await
        .unwrap();

    assert!(session.report().is_empty());
    assert_eq!(classifier.call_count(), 0);
}
