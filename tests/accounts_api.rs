//! Integration tests for the account API binding.
//!
//! These drive `HttpAccountsApi` against a wiremock HTTP server instead of
//! the real Eclipse Foundation account service, verifying the request shape
//! (bearer header, optional query filters) and response handling without
//! network access or credentials.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use git_eca::api::{AccountsApi, HttpAccountsApi, UserQuery};

fn sample_users() -> serde_json::Value {
    json!([
        {
            "uid": "mlowe",
            "name": "Martin Lowe",
            "mail": "martin@example.org",
            "eca": { "signed": true, "can_contribute_spec_project": true },
            "is_committer": true
        },
        {
            "uid": "jdoe",
            "name": "Jane Doe",
            "mail": "jdoe@example.org",
            "eca": { "signed": false, "can_contribute_spec_project": false },
            "is_committer": false
        }
    ])
}

#[tokio::test]
async fn forwards_bearer_and_filters_and_decodes_users() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/profile"))
        .and(header("Authorization", "Bearer test-token"))
        .and(query_param("uid", "mlowe"))
        .and(query_param("mail", "martin@example.org"))
        .and(query_param_is_missing("name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_users()))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpAccountsApi::new(server.uri());
    let query = UserQuery::new()
        .with_uid("mlowe")
        .with_mail("martin@example.org");

    let users = api.get_users("Bearer test-token", &query).await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].uid, "mlowe");
    assert!(users[0].eca.signed);
    assert!(users[0].is_committer);
    assert!(!users[1].eca.signed);
}

#[tokio::test]
async fn empty_filters_send_no_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/profile"))
        .and(query_param_is_missing("uid"))
        .and(query_param_is_missing("name"))
        .and(query_param_is_missing("mail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpAccountsApi::new(server.uri());
    let users = api
        .get_users("Bearer test-token", &UserQuery::new())
        .await
        .unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn authentication_failure_surfaces_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let api = HttpAccountsApi::new(server.uri());
    let err = api
        .get_users("Bearer expired", &UserQuery::new())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("401"), "unexpected error: {message}");
    assert!(message.contains("unauthorized"), "unexpected error: {message}");
}

#[tokio::test]
async fn malformed_response_propagates_as_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = HttpAccountsApi::new(server.uri());
    let result = api.get_users("Bearer test-token", &UserQuery::new()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn connection_failure_propagates_as_error() {
    // Port 9 (discard) is not listening in the test environment.
    let api = HttpAccountsApi::new("http://127.0.0.1:9");
    let result = api.get_users("Bearer test-token", &UserQuery::new()).await;

    assert!(result.is_err());
}
