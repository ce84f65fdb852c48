//! Behavior-driven tests for the user record service
//!
//! These tests verify what a caller observes when fetching, creating and
//! saving preferences, and which operations reach the database endpoint.

use serde_json::json;
use stockdigest_core::preferences::{set_time_period, track_symbols};
use stockdigest_tests::*;

// =============================================================================
// Fetch or create: first visit
// =============================================================================

#[tokio::test]
async fn when_user_has_no_record_one_query_and_one_insert_are_sent() {
    // Given: The store has no row for u1
    let client = Arc::new(
        ScriptedHttpClient::new()
            .with_response(200, "[]")
            .with_response(200, INSERT_ACK),
    );
    let service = service_with(&client);

    // When: The user's record is requested
    let record = service
        .fetch_or_create(&identity("u1"))
        .await
        .expect("first visit succeeds");

    // Then: The default record is returned and exactly one insert was issued
    assert_eq!(
        serde_json::to_value(&record).expect("serialize"),
        json!({ "id": "u1", "timeperiod": "today", "symbols": [] })
    );
    let bodies = client.request_bodies();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["operation"], "sql");
    assert_eq!(bodies[1]["operation"], "insert");
    assert_eq!(
        bodies[1]["records"],
        json!([{ "id": "u1", "timeperiod": "today", "symbols": [] }])
    );
}

#[tokio::test]
async fn when_concurrent_first_visit_already_created_the_row_fetch_still_succeeds() {
    // Given: Another session inserted u1 between our query and our insert
    let client = Arc::new(
        ScriptedHttpClient::new()
            .with_response(200, "[]")
            .with_response(
                200,
                r#"{"message":"inserted 0 of 1 records","inserted_hashes":[],"skipped_hashes":["u1"]}"#,
            ),
    );
    let service = service_with(&client);

    // When: The record is requested
    let record = service.fetch_or_create(&identity("u1")).await;

    // Then: The duplicate insert is not treated as a failure
    assert_eq!(
        record.expect("duplicate insert is benign"),
        UserRecord::new_default(identity("u1"))
    );
}

// =============================================================================
// Fetch or create: returning user
// =============================================================================

#[tokio::test]
async fn when_user_has_a_record_it_is_returned_without_server_timestamps() {
    // Given: The store holds a row for u2 with a creation timestamp
    let client = Arc::new(ScriptedHttpClient::new().with_response(
        200,
        r#"[{"id":"u2","timeperiod":"the past week","symbols":["AAPL"],"__createdtime__":"t1"}]"#,
    ));
    let service = service_with(&client);

    // When: The record is requested
    let record = service
        .fetch_or_create(&identity("u2"))
        .await
        .expect("fetch succeeds");

    // Then: The stored values come back, timestamps removed, no insert issued
    assert_eq!(
        serde_json::to_value(&record).expect("serialize"),
        json!({ "id": "u2", "timeperiod": "the past week", "symbols": ["AAPL"] })
    );
    assert_eq!(client.requests().len(), 1);
}

#[tokio::test]
async fn when_stored_symbols_are_unusual_they_are_returned_verbatim() {
    // Given: A legacy row with lowercase and duplicate symbols
    let client = Arc::new(ScriptedHttpClient::new().with_response(
        200,
        r#"[{"id":"u5","timeperiod":"today","symbols":["aapl","AAPL","brk.b"],"__updatedtime__":1700000000000}]"#,
    ));

    // When: The record is requested
    let record = service_with(&client)
        .fetch_or_create(&identity("u5"))
        .await
        .expect("fetch succeeds");

    // Then: Order and spelling are preserved
    assert_eq!(record.symbols, vec!["aapl", "AAPL", "brk.b"]);
}

#[tokio::test]
async fn when_query_is_built_identity_is_matched_exactly_on_configured_table() {
    // Given: A provider subject containing separators
    let client = Arc::new(ScriptedHttpClient::new().with_response(200, "[]").with_response(
        200,
        r#"{"message":"inserted 1 of 1 records","inserted_hashes":["google-oauth2|1093"],"skipped_hashes":[]}"#,
    ));

    // When: The record is requested
    service_with(&client)
        .fetch_or_create(&identity("google-oauth2|1093"))
        .await
        .expect("fetch succeeds");

    // Then: The query filters on that exact id
    assert_eq!(
        client.request_bodies()[0]["sql"],
        "SELECT * FROM digest.users WHERE id = 'google-oauth2|1093'"
    );
}

#[tokio::test]
async fn when_identity_is_an_opaque_provider_key_it_is_queried_and_returned_verbatim() {
    for (raw, literal) in [
        ("samlp|corp|a/b=", "'samlp|corp|a/b='"),
        ("oidc|Zm9v+YmFy/cXV4==", "'oidc|Zm9v+YmFy/cXV4=='"),
        ("oauth2|émilie", "'oauth2|émilie'"),
        ("auth0|o'brien", "'auth0|o''brien'"),
        (" u1", "' u1'"),
    ] {
        // Given: The store holds a row keyed by the provider subject
        let row = json!([{ "id": raw, "timeperiod": "the past week", "symbols": ["MSFT"] }]);
        let client = Arc::new(ScriptedHttpClient::new().with_response(200, row.to_string()));

        // When: The record is requested
        let record = service_with(&client)
            .fetch_or_create(&identity(raw))
            .await
            .expect("fetch succeeds");

        // Then: The query quotes the exact key and the stored row comes back
        assert_eq!(
            client.request_bodies()[0]["sql"],
            format!("SELECT * FROM digest.users WHERE id = {literal}")
        );
        assert_eq!(record.id.as_str(), raw);
        assert_eq!(record.timeperiod, TimePeriod::PastWeek);
        assert_eq!(client.requests().len(), 1);
    }
}

#[tokio::test]
async fn when_first_visit_has_an_opaque_key_the_insert_carries_it_unchanged() {
    // Given: No row for a subject with slashes and padding
    let client = Arc::new(
        ScriptedHttpClient::new()
            .with_response(200, "[]")
            .with_response(200, INSERT_ACK),
    );

    // When: The record is requested
    let record = service_with(&client)
        .fetch_or_create(&identity("samlp|corp|a/b="))
        .await
        .expect("first visit succeeds");

    // Then: The inserted and returned ids are the raw key
    assert_eq!(record.id.as_str(), "samlp|corp|a/b=");
    assert_eq!(
        client.request_bodies()[1]["records"],
        json!([{ "id": "samlp|corp|a/b=", "timeperiod": "today", "symbols": [] }])
    );
}

// =============================================================================
// Save
// =============================================================================

#[tokio::test]
async fn when_user_saves_preferences_one_update_carries_the_record() {
    // Given: An edited record
    let client = Arc::new(ScriptedHttpClient::new().with_response(200, UPDATE_ACK));
    let record = UserRecord {
        id: identity("u2"),
        timeperiod: TimePeriod::Today,
        symbols: vec![String::from("AAPL"), String::from("MSFT")],
    };

    // When: It is saved
    service_with(&client).save(&record).await.expect("save succeeds");

    // Then: Exactly one update with that record was sent
    assert_eq!(
        client.request_bodies(),
        vec![json!({
            "operation": "update",
            "schema": "digest",
            "table": "users",
            "records": [{ "id": "u2", "timeperiod": "today", "symbols": ["AAPL", "MSFT"] }],
        })]
    );
}

#[tokio::test]
async fn when_user_edits_after_fetch_the_saved_record_reflects_the_edits() {
    // Given: A returning user
    let client = Arc::new(
        ScriptedHttpClient::new()
            .with_response(200, r#"[{"id":"u2","timeperiod":"today","symbols":["AAPL"]}]"#)
            .with_response(200, UPDATE_ACK),
    );
    let service = service_with(&client);
    let mut record = service
        .fetch_or_create(&identity("u2"))
        .await
        .expect("fetch succeeds");

    // When: They switch to weekly digests and track MSFT
    set_time_period(&mut record, TimePeriod::PastWeek);
    track_symbols(&mut record, &[Symbol::parse("msft").expect("symbol")]);
    service.save(&record).await.expect("save succeeds");

    // Then: The update carries both edits
    let update = &client.request_bodies()[1];
    assert_eq!(
        update["records"],
        json!([{ "id": "u2", "timeperiod": "the past week", "symbols": ["AAPL", "MSFT"] }])
    );
}

#[tokio::test]
async fn when_user_is_created_explicitly_outcome_is_reported() {
    // Given: An empty store
    let client = Arc::new(ScriptedHttpClient::new().with_response(200, INSERT_ACK));

    // When: The record is created directly
    let outcome = service_with(&client)
        .create(&identity("u1"))
        .await
        .expect("create succeeds");

    // Then: The insert was accepted
    assert_eq!(outcome, CreateOutcome::Created);
}
