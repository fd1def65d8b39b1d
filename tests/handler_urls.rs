mod common;

use shortify::state::AppState;

async fn seed(state: &AppState, count: usize) {
    for i in 0..count {
        common::create_test_short_url(state, &format!("https://example.com/page/{i}")).await;
    }
}

#[tokio::test]
async fn test_list_defaults() {
    let state = common::create_test_state();
    seed(&state, 12).await;
    let server = common::create_test_server(state);

    let response = server.get("/api/urls").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"].as_array().unwrap().len(), 10);
    assert_eq!(json["pagination"]["total"], 12);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["limit"], 10);
    assert_eq!(json["pagination"]["totalPages"], 2);
}

#[tokio::test]
async fn test_list_last_partial_page() {
    let state = common::create_test_state();
    seed(&state, 23).await;
    let server = common::create_test_server(state);

    let json = server
        .get("/api/urls")
        .add_query_param("page", 3)
        .add_query_param("limit", 10)
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["data"].as_array().unwrap().len(), 3);
    assert_eq!(json["pagination"]["total"], 23);
    assert_eq!(json["pagination"]["totalPages"], 3);
}

#[tokio::test]
async fn test_list_newest_first() {
    let state = common::create_test_state();
    seed(&state, 3).await;
    let server = common::create_test_server(state);

    let json = server.get("/api/urls").await.json::<serde_json::Value>();

    let urls: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["originalUrl"].as_str().unwrap())
        .collect();

    assert_eq!(
        urls,
        vec![
            "https://example.com/page/2",
            "https://example.com/page/1",
            "https://example.com/page/0",
        ]
    );
}

#[tokio::test]
async fn test_list_clamps_parameters() {
    let state = common::create_test_state();
    seed(&state, 2).await;
    let server = common::create_test_server(state);

    let json = server
        .get("/api/urls")
        .add_query_param("page", 0)
        .add_query_param("limit", 500)
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["limit"], 100);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_empty_store() {
    let server = common::create_test_server(common::create_test_state());

    let json = server.get("/api/urls").await.json::<serde_json::Value>();

    assert!(json["data"].as_array().unwrap().is_empty());
    assert_eq!(json["pagination"]["total"], 0);
    assert_eq!(json["pagination"]["totalPages"], 0);
}

#[tokio::test]
async fn test_list_non_numeric_params_use_defaults() {
    let state = common::create_test_state();
    common::create_test_short_url(&state, "https://example.com/a").await;
    let server = common::create_test_server(state);

    let response = server
        .get("/api/urls")
        .add_query_param("page", "abc")
        .add_query_param("limit", "many")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["limit"], 10);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
