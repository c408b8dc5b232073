//! End-to-end client behavior against a local fake backend.

mod support;

use pretty_assertions::assert_eq;
use serde_json::json;

use rcv_backend::{BackendError, OutcomeStatus};
use rcv_core::options::AssetQuery;
use rcv_core::requests::{EventRecord, FeedPullRequest};
use support::FakeBackend;

fn asset_row(id: &str, style: &str, tags: &[&str]) -> serde_json::Value {
    json!({
        "id": id,
        "object_name": format!("recoverlution-assets/brand/{id}.png"),
        "style": style,
        "type": "image",
        "dimension": "1:1",
        "tags": tags,
    })
}

#[tokio::test]
async fn function_failure_carries_status_and_body() {
    let backend = FakeBackend::start(|_| (500, "boom".to_string()));
    let err = backend
        .client()
        .feed_pull(&FeedPullRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "v1_feed_pull failed: 500 boom");
}

#[tokio::test]
async fn function_posts_json_without_bearer_when_signed_out() {
    let backend = FakeBackend::start(|_| (200, "{}".to_string()));
    let mut payload = serde_json::Map::new();
    payload.insert("screen".into(), json!("home"));
    backend
        .client()
        .log_event(&EventRecord {
            event_type: "view".into(),
            payload,
        })
        .await
        .unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.url, "/functions/v1/events-api");
    assert_eq!(req.header("authorization"), None);
    assert_eq!(req.json(), json!({"type": "view", "payload": {"screen": "home"}}));
}

#[tokio::test]
async fn session_token_is_sent_as_bearer() {
    let backend = FakeBackend::start(|_| (200, "[]".to_string()));
    let client = backend.client().with_session_token("user-jwt");
    client.list_user_audio("voice notes/").await.unwrap();
    client.fetch_soundbite_tracks_frontend(None).await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].url, "/functions/v1/list-user-audio?prefix=voice%20notes%2F");
    assert_eq!(requests[0].header("authorization"), Some("Bearer user-jwt"));
    assert_eq!(requests[1].header("apikey"), Some("anon-key"));
    assert_eq!(requests[1].header("authorization"), Some("Bearer user-jwt"));
}

#[tokio::test]
async fn missing_content_row_is_none() {
    let backend = FakeBackend::start(|_| {
        (
            406,
            json!({"code": "PGRST116", "message": "JSON object requested, multiple (or no) rows returned"})
                .to_string(),
        )
    });
    let item = backend
        .client()
        .fetch_content_registry_by_id("nope")
        .await
        .unwrap();
    assert!(item.is_none());

    let req = &backend.requests()[0];
    assert_eq!(req.url, "/rest/v1/content_registry?select=%2A&id=eq.nope&limit=1");
    assert_eq!(req.header("accept"), Some("application/vnd.pgrst.object+json"));
}

#[tokio::test]
async fn other_rest_errors_propagate() {
    let backend = FakeBackend::start(|_| {
        (400, json!({"code": "42P01", "message": "relation does not exist"}).to_string())
    });
    let err = backend
        .client()
        .query_storage_assets(&AssetQuery::default())
        .await
        .unwrap_err();
    assert!(
        matches!(&err, BackendError::Rest { status: 400, code, .. } if code == "42P01"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn facets_are_sorted_and_deduplicated() {
    let backend = FakeBackend::start(|req| {
        let body = if req.url.contains("select=style") {
            json!([{"style": "flowstate"}, {"style": "evolvingforms"}, {"style": "flowstate"}])
        } else if req.url.contains("select=dimension") {
            json!([{"dimension": "16:9"}, {"dimension": ""}, {"dimension": "1:1"}])
        } else {
            json!([{"type": "video"}, {"type": "image"}])
        };
        (200, body.to_string())
    });
    let facets = backend.client().get_asset_facets().await.unwrap();

    assert_eq!(facets.styles, vec!["evolvingforms", "flowstate"]);
    assert_eq!(facets.dimensions, vec!["16:9", "1:1"]);
    assert_eq!(facets.types, vec!["image", "video"]);
    assert!(
        backend
            .requests()
            .iter()
            .any(|r| r.url.contains("style=not.is.null"))
    );
}

#[tokio::test]
async fn hero_assets_spread_across_styles() {
    let backend = FakeBackend::start(|_| {
        let rows: Vec<_> = (0..3)
            .map(|i| asset_row(&format!("{i}"), "s", &[]))
            .collect();
        (200, serde_json::Value::Array(rows).to_string())
    });
    let assets = backend.client().get_hero_assets(None, Some(6)).await.unwrap();
    assert_eq!(assets.len(), 6);

    let urls: Vec<String> = backend.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls.len(), 3);
    assert!(urls[0].contains("style=eq.neural_flower"));
    assert!(urls[1].contains("style=eq.flowstate"));
    assert!(urls[2].contains("style=eq.evolvingforms"));
    assert!(urls.iter().all(|u| u.contains("limit=2")));
}

#[tokio::test]
async fn governance_requires_service_key() {
    let backend = FakeBackend::start(|_| (200, "[]".to_string()));
    let err = backend
        .anon_client()
        .sync_asset_governance()
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::ServiceCredentialRequired { .. }));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn governance_sweep_skips_unchanged_and_survives_failures() {
    let backend = FakeBackend::start(|req| match req.method.as_str() {
        "GET" => {
            let rows = json!([
                asset_row("a", "flowstate", &[]),
                asset_row(
                    "b",
                    "neural_flower",
                    &["therapeutic", "growth", "reflection", "beauty", "neural", "image", "1-1"]
                ),
                asset_row("c", "evolvingforms", &["old"]),
            ]);
            (200, rows.to_string())
        }
        _ if req.url.contains("id=eq.c") => (500, "write failed".to_string()),
        _ => (204, String::new()),
    });

    let mut seen = Vec::new();
    let report = backend
        .client()
        .sync_asset_governance_with(|outcome, total| seen.push((outcome.id.clone(), total)))
        .await
        .unwrap();

    assert_eq!(
        (report.scanned, report.updated, report.unchanged, report.failed),
        (3, 1, 1, 1)
    );
    assert_eq!(seen, vec![("a".into(), 3), ("b".into(), 3), ("c".into(), 3)]);
    assert_eq!(report.outcomes[2].previous_tags, vec!["old"]);
    assert!(matches!(
        report.outcomes[2].status,
        OutcomeStatus::Failed { .. }
    ));

    let requests = backend.requests();
    let list = &requests[0];
    assert!(list.url.contains("object_name=like.recoverlution-assets%2Fbrand%2F%2A"));
    assert_eq!(list.header("apikey"), Some("service-key"));
    assert_eq!(list.header("authorization"), Some("Bearer service-key"));

    let patches: Vec<_> = requests.iter().filter(|r| r.method == "PATCH").collect();
    assert_eq!(patches.len(), 2);
    assert_eq!(patches[0].url, "/rest/v1/storage_assets?id=eq.a");
    assert_eq!(
        patches[0].json()["tags"],
        json!(["therapeutic", "flow", "harmony", "balance", "engagement", "image", "1-1"])
    );
    assert!(patches[0].json()["updated_at"].is_string());
}

#[tokio::test]
async fn governance_sweep_tags_rows_with_null_columns() {
    let backend = FakeBackend::start(|req| match req.method.as_str() {
        "GET" => {
            let rows = json!([{
                "id": "n",
                "object_name": "recoverlution-assets/brand/n.png",
                "bucket_id": null,
                "style": "flowstate",
                "type": "image",
                "dimension": "1:1",
                "tags": null,
            }]);
            (200, rows.to_string())
        }
        _ => (204, String::new()),
    });

    let report = backend.client().sync_asset_governance().await.unwrap();

    assert_eq!((report.scanned, report.updated, report.failed), (1, 1, 0));
    assert!(report.outcomes[0].previous_tags.is_empty());
    let patch = backend
        .requests()
        .into_iter()
        .find(|r| r.method == "PATCH")
        .unwrap();
    assert_eq!(patch.url, "/rest/v1/storage_assets?id=eq.n");
    assert_eq!(
        patch.json()["tags"],
        json!(["therapeutic", "flow", "harmony", "balance", "engagement", "image", "1-1"])
    );
}

#[tokio::test]
async fn recent_listens_null_is_empty() {
    let backend = FakeBackend::start(|_| (200, "null".to_string()));
    let listens = backend.client().list_recent_listens(None).await.unwrap();
    assert!(listens.is_empty());

    let req = &backend.requests()[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.url, "/rest/v1/rpc/list_recent_listens");
    assert_eq!(req.json(), json!({"limit": 25}));
}
