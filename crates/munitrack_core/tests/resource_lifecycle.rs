use async_trait::async_trait;
use munitrack_core::{
    ApiError, ApiResult, Attachment, BudgetTransfer, EndpointConfig, ListFilter, RecordEndpoint,
    RecordId, ResourceRecord, ResourceService, ResourceStatus,
};
use serde_json::{json, Value};
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

/// Scripted endpoint double; every operation pops its next queued outcome.
///
/// Clones share the same script and observation log, so a test can keep a
/// handle after moving the endpoint into a service.
#[derive(Clone, Default)]
struct MockEndpoint {
    inner: Arc<MockEndpointInner>,
}

#[derive(Default)]
struct MockEndpointInner {
    list_outcomes: Mutex<VecDeque<ApiResult<Value>>>,
    get_outcomes: Mutex<VecDeque<ApiResult<Value>>>,
    create_outcomes: Mutex<VecDeque<ApiResult<Value>>>,
    update_outcomes: Mutex<VecDeque<ApiResult<Value>>>,
    delete_outcomes: Mutex<VecDeque<ApiResult<()>>>,
    seen_filters: Mutex<Vec<Option<Value>>>,
    seen_attachment_fields: Mutex<Vec<Vec<String>>>,
}

impl MockEndpoint {
    fn new() -> Self {
        Self::default()
    }

    fn script_list(&self, outcome: ApiResult<Value>) {
        self.inner.list_outcomes.lock().unwrap().push_back(outcome);
    }

    fn script_get(&self, outcome: ApiResult<Value>) {
        self.inner.get_outcomes.lock().unwrap().push_back(outcome);
    }

    fn script_create(&self, outcome: ApiResult<Value>) {
        self.inner.create_outcomes.lock().unwrap().push_back(outcome);
    }

    fn script_update(&self, outcome: ApiResult<Value>) {
        self.inner.update_outcomes.lock().unwrap().push_back(outcome);
    }

    fn script_delete(&self, outcome: ApiResult<()>) {
        self.inner.delete_outcomes.lock().unwrap().push_back(outcome);
    }

    fn seen_filters(&self) -> Vec<Option<Value>> {
        self.inner.seen_filters.lock().unwrap().clone()
    }

    fn seen_attachment_fields(&self) -> Vec<Vec<String>> {
        self.inner.seen_attachment_fields.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordEndpoint for MockEndpoint {
    async fn list(&self, filter: Option<&ListFilter>) -> ApiResult<Value> {
        self.inner.seen_filters.lock().unwrap().push(filter.cloned());
        self.inner
            .list_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted list call")
    }

    async fn get(&self, _id: RecordId) -> ApiResult<Value> {
        self.inner
            .get_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted get call")
    }

    async fn create(&self, _body: &Value, attachments: &[Attachment]) -> ApiResult<Value> {
        self.inner.seen_attachment_fields.lock().unwrap().push(
            attachments
                .iter()
                .map(|attachment| attachment.field_name.clone())
                .collect(),
        );
        self.inner
            .create_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted create call")
    }

    async fn update(&self, _id: RecordId, _body: &Value) -> ApiResult<Value> {
        self.inner
            .update_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted update call")
    }

    async fn delete(&self, _id: RecordId) -> ApiResult<()> {
        self.inner
            .delete_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted delete call")
    }
}

fn service(endpoint: MockEndpoint) -> ResourceService<BudgetTransfer, MockEndpoint> {
    ResourceService::new(
        endpoint,
        EndpointConfig::new("budget_transfers", "budget-transfers"),
    )
}

fn service_with_placeholder_fallback(
    endpoint: MockEndpoint,
) -> ResourceService<BudgetTransfer, MockEndpoint> {
    ResourceService::new(
        endpoint,
        EndpointConfig {
            clear_rows_on_list_failure: true,
            ..EndpointConfig::new("financial_statements", "financial-statements")
        },
    )
}

fn transfer_json(id: i64, transfer_no: &str, amount: f64) -> Value {
    json!({
        "id": id,
        "transfer_no": transfer_no,
        "date": "2026-07-15",
        "from_department": "Engineering",
        "to_department": "Health Services",
        "fund_id": 1,
        "amount": amount,
        "particulars": "Realignment"
    })
}

fn transfer(id: i64, transfer_no: &str, amount: f64) -> BudgetTransfer {
    BudgetTransfer {
        id,
        transfer_no: transfer_no.to_string(),
        date: "2026-07-15".to_string(),
        from_department: "Engineering".to_string(),
        to_department: "Health Services".to_string(),
        fund_id: 1,
        amount,
        particulars: "Realignment".to_string(),
    }
}

fn row_ids(rows: &[BudgetTransfer]) -> Vec<i64> {
    rows.iter().map(|row| row.record_id()).collect()
}

#[tokio::test]
async fn fetch_all_replaces_rows_with_the_server_listing() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([
        transfer_json(1, "BT-001", 5000.0),
        transfer_json(2, "BT-002", 7500.0)
    ])));
    let mut slice = service(endpoint);

    let rows = slice.fetch_all(None).await.unwrap();
    assert_eq!(row_ids(rows), vec![1, 2]);
    assert_eq!(slice.state().status(), ResourceStatus::Succeeded);
    assert_eq!(slice.state().error(), None);
}

#[tokio::test]
async fn fetch_all_coerces_non_array_payloads_to_empty_rows() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([transfer_json(1, "BT-001", 5000.0)])));
    endpoint.script_list(Ok(json!({ "unexpected": "shape" })));
    let mut slice = service(endpoint);

    slice.fetch_all(None).await.unwrap();
    assert_eq!(slice.state().rows().len(), 1);

    slice.fetch_all(None).await.unwrap();
    assert!(slice.state().rows().is_empty());
    assert_eq!(slice.state().status(), ResourceStatus::Succeeded);
    assert_eq!(slice.state().error(), None);
}

#[tokio::test]
async fn fetch_all_skips_elements_that_do_not_decode() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([
        transfer_json(1, "BT-001", 5000.0),
        "junk",
        42,
        transfer_json(2, "BT-002", 7500.0)
    ])));
    let mut slice = service(endpoint);

    let rows = slice.fetch_all(None).await.unwrap();
    assert_eq!(row_ids(rows), vec![1, 2]);
}

#[tokio::test]
async fn fetch_all_failure_preserves_rows_and_records_the_error() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([transfer_json(1, "BT-001", 5000.0)])));
    endpoint.script_list(Err(ApiError::from_status_body(
        500,
        br#"{"message":"ledger offline"}"#,
    )));
    let mut slice = service(endpoint);

    slice.fetch_all(None).await.unwrap();
    let err = slice.fetch_all(None).await.unwrap_err();

    assert_eq!(err.message(), "ledger offline");
    assert_eq!(slice.state().rows().len(), 1);
    assert_eq!(slice.state().status(), ResourceStatus::Failed);
    assert_eq!(slice.state().error(), Some("ledger offline"));
}

#[tokio::test]
async fn fetch_all_failure_falls_back_to_the_empty_placeholder_when_configured() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([transfer_json(1, "BT-001", 5000.0)])));
    endpoint.script_list(Err(ApiError::transport("connection refused")));
    let mut slice = service_with_placeholder_fallback(endpoint);

    slice.fetch_all(None).await.unwrap();
    assert_eq!(slice.state().rows().len(), 1);

    slice.fetch_all(None).await.unwrap_err();
    assert!(slice.state().rows().is_empty());
    assert_eq!(slice.state().error(), Some("connection refused"));
}

#[tokio::test]
async fn filtered_fetch_passes_the_filter_payload_to_the_endpoint() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([])));
    let observer = endpoint.clone();
    let mut slice = service(endpoint);

    let filter = json!({ "fund_id": 3, "date_from": "2026-01-01" });
    slice.fetch_all(Some(&filter)).await.unwrap();

    assert_eq!(observer.seen_filters(), vec![Some(filter)]);
}

#[tokio::test]
async fn fetch_one_focuses_the_record_and_failure_leaves_it_untouched() {
    let endpoint = MockEndpoint::new();
    endpoint.script_get(Ok(transfer_json(7, "BT-007", 1200.0)));
    endpoint.script_get(Err(ApiError::from_status_body(
        404,
        br#"{"message":"transfer not found"}"#,
    )));
    let mut slice = service(endpoint);

    let fetched = slice.fetch_one(7).await.unwrap();
    assert_eq!(fetched.record_id(), 7);
    assert_eq!(slice.state().current().map(|record| record.id), Some(7));

    slice.fetch_one(8).await.unwrap_err();
    assert_eq!(slice.state().current().map(|record| record.id), Some(7));
    assert_eq!(slice.state().error(), Some("transfer not found"));
    assert_eq!(slice.state().status(), ResourceStatus::Failed);
}

#[tokio::test]
async fn fetch_one_records_a_decode_failure_for_malformed_record_bodies() {
    let endpoint = MockEndpoint::new();
    endpoint.script_get(Ok(json!("not a record")));
    let mut slice = service(endpoint);

    let err = slice.fetch_one(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
    assert!(slice.state().current().is_none());
    assert_eq!(slice.state().status(), ResourceStatus::Failed);
}

#[tokio::test]
async fn create_appends_the_server_canonical_record() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([transfer_json(1, "BT-001", 5000.0)])));
    endpoint.script_create(Ok(transfer_json(99, "BT-2026-099", 2500.0)));
    let mut slice = service(endpoint);

    slice.fetch_all(None).await.unwrap();

    // The submitted draft has no id yet; the server assigns one.
    let draft = transfer(0, "BT-2026-099", 2500.0);
    let created = slice.create(&draft).await.unwrap();

    assert_eq!(created.record_id(), 99);
    assert_eq!(row_ids(slice.state().rows()), vec![1, 99]);
    assert_eq!(slice.state().status(), ResourceStatus::Succeeded);
}

#[tokio::test]
async fn create_failure_leaves_rows_unchanged_and_records_the_server_message() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([transfer_json(1, "BT-001", 5000.0)])));
    endpoint.script_create(Err(ApiError::from_status_body(
        409,
        br#"{"message":"Duplicate entry"}"#,
    )));
    let mut slice = service(endpoint);

    slice.fetch_all(None).await.unwrap();
    let rows_before = slice.state().rows().to_vec();

    let err = slice.create(&transfer(0, "BT-001", 5000.0)).await.unwrap_err();

    assert_eq!(err.message(), "Duplicate entry");
    assert_eq!(slice.state().rows(), rows_before.as_slice());
    assert_eq!(slice.state().error(), Some("Duplicate entry"));
    assert_eq!(slice.state().status(), ResourceStatus::Failed);
}

#[tokio::test]
async fn create_forwards_attachments_to_the_endpoint() {
    let endpoint = MockEndpoint::new();
    endpoint.script_create(Ok(transfer_json(5, "BT-005", 100.0)));
    let observer = endpoint.clone();
    let mut slice = service(endpoint);

    let attachment = Attachment {
        field_name: "certificate".to_string(),
        file_name: "scan.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        bytes: vec![0x25, 0x50, 0x44, 0x46],
    };
    slice
        .create_with_attachments(&transfer(0, "BT-005", 100.0), &[attachment])
        .await
        .unwrap();

    assert_eq!(
        observer.seen_attachment_fields(),
        vec![vec!["certificate".to_string()]]
    );
    assert_eq!(slice.state().rows().len(), 1);
}

#[tokio::test]
async fn update_replaces_the_matching_row_and_refreshes_current() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([
        transfer_json(1, "BT-001", 5000.0),
        transfer_json(2, "BT-002", 7500.0)
    ])));
    endpoint.script_get(Ok(transfer_json(2, "BT-002", 7500.0)));
    endpoint.script_update(Ok(transfer_json(2, "BT-002-REV", 9000.0)));
    let mut slice = service(endpoint);

    slice.fetch_all(None).await.unwrap();
    slice.fetch_one(2).await.unwrap();

    let revised = transfer(2, "BT-002-REV", 9000.0);
    slice.update(&revised).await.unwrap();

    assert_eq!(row_ids(slice.state().rows()), vec![1, 2]);
    assert_eq!(slice.state().rows()[1].transfer_no, "BT-002-REV");
    assert_eq!(
        slice.state().current().map(|record| record.amount),
        Some(9000.0)
    );
}

#[tokio::test]
async fn update_with_an_unknown_id_is_silently_dropped() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([
        transfer_json(1, "BT-001", 5000.0),
        transfer_json(2, "BT-002", 7500.0)
    ])));
    endpoint.script_update(Ok(transfer_json(9, "BT-009", 1.0)));
    let mut slice = service(endpoint);

    slice.fetch_all(None).await.unwrap();
    let rows_before = slice.state().rows().to_vec();

    slice.update(&transfer(9, "BT-009", 1.0)).await.unwrap();

    assert_eq!(slice.state().rows(), rows_before.as_slice());
    assert_eq!(slice.state().status(), ResourceStatus::Succeeded);
}

#[tokio::test]
async fn update_failure_leaves_rows_unchanged() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([transfer_json(1, "BT-001", 5000.0)])));
    endpoint.script_update(Err(ApiError::from_status_body(
        422,
        br#"{"error":"amount exceeds available appropriation"}"#,
    )));
    let mut slice = service(endpoint);

    slice.fetch_all(None).await.unwrap();
    let rows_before = slice.state().rows().to_vec();

    let err = slice.update(&transfer(1, "BT-001", 999_999.0)).await.unwrap_err();

    assert_eq!(err.message(), "amount exceeds available appropriation");
    assert_eq!(slice.state().rows(), rows_before.as_slice());
    assert_eq!(slice.state().status(), ResourceStatus::Failed);
}

#[tokio::test]
async fn delete_removes_the_row_and_a_repeat_failure_does_not_corrupt_state() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([
        transfer_json(1, "BT-001", 5000.0),
        transfer_json(2, "BT-002", 7500.0)
    ])));
    endpoint.script_get(Ok(transfer_json(2, "BT-002", 7500.0)));
    endpoint.script_delete(Ok(()));
    endpoint.script_delete(Err(ApiError::from_status_body(
        404,
        br#"{"message":"transfer not found"}"#,
    )));
    let mut slice = service(endpoint);

    slice.fetch_all(None).await.unwrap();
    slice.fetch_one(2).await.unwrap();

    slice.delete(2).await.unwrap();
    assert_eq!(row_ids(slice.state().rows()), vec![1]);
    assert!(slice.state().current().is_none());

    // No local existence check precedes the second call; the server's
    // failure settles without touching the rows.
    slice.delete(2).await.unwrap_err();
    assert_eq!(row_ids(slice.state().rows()), vec![1]);
    assert_eq!(slice.state().error(), Some("transfer not found"));
    assert_eq!(slice.state().status(), ResourceStatus::Failed);
}

#[tokio::test]
async fn mutation_sequences_keep_row_ids_unique() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([
        transfer_json(1, "BT-001", 5000.0),
        transfer_json(2, "BT-002", 7500.0)
    ])));
    endpoint.script_create(Ok(transfer_json(3, "BT-003", 100.0)));
    // A misbehaving server hands back an id the rows already hold.
    endpoint.script_create(Ok(transfer_json(2, "BT-002-DUP", 7500.0)));
    endpoint.script_update(Ok(transfer_json(1, "BT-001-REV", 5500.0)));
    endpoint.script_delete(Ok(()));
    let mut slice = service(endpoint);

    slice.fetch_all(None).await.unwrap();
    slice.create(&transfer(0, "BT-003", 100.0)).await.unwrap();
    slice.create(&transfer(0, "BT-002-DUP", 7500.0)).await.unwrap();
    slice.update(&transfer(1, "BT-001-REV", 5500.0)).await.unwrap();
    slice.delete(3).await.unwrap();

    let ids = row_ids(slice.state().rows());
    let distinct: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(ids.len(), distinct.len());
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(slice.state().rows()[1].transfer_no, "BT-002-DUP");
}

#[tokio::test]
async fn reset_clears_rows_and_error() {
    let endpoint = MockEndpoint::new();
    endpoint.script_list(Ok(json!([transfer_json(1, "BT-001", 5000.0)])));
    endpoint.script_list(Err(ApiError::transport("connection refused")));
    let mut slice = service(endpoint);

    slice.fetch_all(None).await.unwrap();
    slice.fetch_all(None).await.unwrap_err();
    assert!(slice.state().error().is_some());

    slice.reset();
    assert!(slice.state().rows().is_empty());
    assert_eq!(slice.state().error(), None);
}
