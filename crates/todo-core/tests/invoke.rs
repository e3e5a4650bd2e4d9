//! Function-level event tables, run through `App` the way the runtime would.

use rstest::rstest;
use serde_json::{Value, json};
use todo_core::App;
use todo_core::impls::{InMemoryTaskStore, KNOWN_TASK_ID, MockStore};

async fn invoke(function: &str, event: &str) -> Value {
    let app = App::with_store(MockStore::new()).unwrap();
    let response = app.invoke(function, event.as_bytes()).await.unwrap();
    match response.envelope() {
        // 失敗時は errorMessage をもう一度 JSON として読む
        Some(body) => serde_json::to_value(body.unwrap()).unwrap(),
        None => serde_json::to_value(&response).unwrap(),
    }
}

#[rstest]
#[case::empty_note(
    r#"{"note": ""}"#,
    json!({
        "code": "INVALID_INPUT",
        "public_message": "Invalid input",
        "private_message": "validation failed: missing note value"
    })
)]
#[case::missing_note(
    "{}",
    json!({
        "code": "INVALID_INPUT",
        "public_message": "Invalid input",
        "private_message": "validation failed: missing note value"
    })
)]
#[case::null_note(
    r#"{"note": null}"#,
    json!({
        "code": "INVALID_INPUT",
        "public_message": "Invalid input",
        "private_message": "validation failed: missing note value"
    })
)]
#[case::null_event(
    "null",
    json!({
        "code": "INVALID_INPUT",
        "public_message": "Invalid input",
        "private_message": "validation failed: missing note value"
    })
)]
#[tokio::test]
async fn add_task_errors(#[case] event: &str, #[case] expected: Value) {
    assert_eq!(invoke("add-task", event).await, expected);
}

#[tokio::test]
async fn add_task_success() {
    let task = invoke("add-task", r#"{"note": "foo"}"#).await;
    assert_eq!(task["note"], "foo");
    assert_eq!(task["done"], false);
    assert_eq!(task["created_at"], task["updated_at"]);

    let other = invoke("add-task", r#"{"note": "foo"}"#).await;
    assert_ne!(task["id"], other["id"]);
}

#[rstest]
#[case::lowercase_key(r#"{"note": "foo"}"#, "foo")]
#[case::capitalized_key(r#"{"Note": "foo"}"#, "foo")]
#[case::upper_key(r#"{"NOTE": "foo"}"#, "foo")]
#[case::lone_surrogate(r#"{"note": "\ud800x"}"#, "\u{FFFD}x")]
#[tokio::test]
async fn add_task_accepts_note(#[case] event: &str, #[case] note: &str) {
    let task = invoke("add-task", event).await;
    assert_eq!(task["note"], note);
    assert!(task["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[rstest]
#[case::unknown_id(
    r#"{"task": "foo-bar"}"#,
    json!({
        "code": "TASK_NOT_FOUND",
        "public_message": "Task not found",
        "private_message": "unknown task: foo-bar"
    })
)]
#[case::known_id(
    r#"{"task": "6eb69ac1-14fb-48b5-9c06-a82670342384"}"#,
    json!({
        "id": "6eb69ac1-14fb-48b5-9c06-a82670342384",
        "done": false,
        "note": "Take the umbrella ☔",
        "created_at": "2018-04-23T11:04:00Z",
        "updated_at": "2018-04-23T11:04:00Z"
    })
)]
#[case::capitalized_key(
    r#"{"Task": "6eb69ac1-14fb-48b5-9c06-a82670342384"}"#,
    json!({
        "id": "6eb69ac1-14fb-48b5-9c06-a82670342384",
        "done": false,
        "note": "Take the umbrella ☔",
        "created_at": "2018-04-23T11:04:00Z",
        "updated_at": "2018-04-23T11:04:00Z"
    })
)]
#[case::null_event(
    "null",
    json!({
        "code": "TASK_NOT_FOUND",
        "public_message": "Task not found",
        "private_message": "unknown task: "
    })
)]
#[tokio::test]
async fn get_task_events(#[case] event: &str, #[case] expected: Value) {
    assert_eq!(invoke("get-task", event).await, expected);
}

#[rstest]
#[case::not_json("add-task", "note: foo")]
#[case::array("add-task", "[]")]
#[case::wrong_type("add-task", r#"{"note": false}"#)]
#[case::truncated("get-task", r#"{"task": "#)]
#[case::number_key("get-task", r#"{"task": 42}"#)]
#[tokio::test]
async fn malformed_events_are_bad_input(#[case] function: &str, #[case] event: &str) {
    let body = invoke(function, event).await;
    assert_eq!(body["code"], "BAD_INPUT");
    assert_eq!(body["public_message"], "Bad input");
    assert!(body["private_message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn runtime_payload_shape() {
    let app = App::with_store(MockStore::new()).unwrap();
    let response = app.invoke("get-task", br#"{"task": "nope"}"#).await.unwrap();

    let outer: Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
    assert_eq!(outer["errorType"], "LambdaError");
    assert_eq!(
        outer["errorMessage"],
        r#"{"code":"TASK_NOT_FOUND","public_message":"Task not found","private_message":"unknown task: nope"}"#
    );
}

#[tokio::test]
async fn memory_store_round_trip() {
    let app = App::with_store(InMemoryTaskStore::new()).unwrap();

    let added = app.invoke("add-task", br#"{"note": "water plants"}"#).await.unwrap();
    let task = serde_json::to_value(&added).unwrap();
    let id = task["id"].as_str().unwrap();
    assert_ne!(id, KNOWN_TASK_ID);

    let event = json!({ "task": id }).to_string();
    let got = app.invoke("get-task", event.as_bytes()).await.unwrap();
    assert_eq!(serde_json::to_value(&got).unwrap(), task);
}
