use std::time::Duration;

use http::{Request, Response, StatusCode};
use serde_json::json;

use crate::{
    api::{
        CreateVcnRequest, DeleteVcnRequest, GetRouteTableRequest, GetVcnRequest, ListSubnetsRequest,
        VirtualNetwork,
    },
    client::{Body, CircuitBreaker},
    Client, Config, Error, RetryPolicy,
};
use cloudnet_core::models::CreateVcnDetails;

#[tokio::test]
async fn create_vcn_generates_a_token_and_surfaces_the_correlation_id() {
    let (vnet, fakeserver) = testcontext();
    let mocksrv = fakeserver.run(Scenario::CreateVcn);

    let res = vnet
        .create_vcn(CreateVcnRequest {
            details: CreateVcnDetails {
                compartment_id: "ocid1.compartment.oc1..bbbb".into(),
                cidr_block: Some("10.0.0.0/16".into()),
                ..CreateVcnDetails::default()
            },
            ..CreateVcnRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.request_id.as_deref(), Some("abc-123"));
    assert_eq!(res.body.id, "ocid1.vcn.oc1..aaaa");
    timeout_after_1s(mocksrv).await;
}

#[tokio::test]
async fn delete_vcn_forwards_the_caller_token_verbatim() {
    let (vnet, fakeserver) = testcontext();
    let mocksrv = fakeserver.run(Scenario::DeleteVcn);

    let res = vnet
        .delete_vcn(DeleteVcnRequest {
            vcn_id: "ocid1.vcn.xxx".into(),
            opc_retry_token: Some("tok-1".into()),
            ..DeleteVcnRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(res.status, StatusCode::NO_CONTENT);
    timeout_after_1s(mocksrv).await;
}

#[tokio::test]
async fn list_subnets_retries_transient_errors_under_a_request_policy() {
    let (vnet, fakeserver) = testcontext();
    // Two 500s then a 200; the policy below permits exactly three attempts.
    let mocksrv = fakeserver.run(Scenario::ListSubnetsFlaky);

    let res = vnet
        .list_subnets(ListSubnetsRequest {
            compartment_id: "ocid1.compartment.oc1..bbbb".into(),
            retry_policy: Some(test_policy(2)),
            ..ListSubnetsRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(res.body.len(), 1);
    assert_eq!(res.body[0].id, "ocid1.subnet.oc1..cccc");
    timeout_after_1s(mocksrv).await;
}

#[tokio::test]
async fn get_route_table_error_names_the_operation() {
    let (vnet, fakeserver) = testcontext();
    let mocksrv = fakeserver.run(Scenario::GetRouteTableMissing);

    let err = vnet
        .get_route_table(GetRouteTableRequest {
            rt_id: "ocid1.routetable.oc1..dddd".into(),
            ..GetRouteTableRequest::default()
        })
        .await
        .unwrap_err();

    match err {
        Error::Api(service_err) => {
            assert_eq!(service_err.status, StatusCode::NOT_FOUND);
            assert_eq!(service_err.operation, "GetRouteTable");
            assert_eq!(service_err.service, "core");
            assert_eq!(service_err.code, "NotAuthorizedOrNotFound");
            assert_eq!(service_err.request_id.as_deref(), Some("req-404"));
            assert!(service_err.to_string().contains("core.GetRouteTable"));
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
    timeout_after_1s(mocksrv).await;
}

#[tokio::test]
async fn client_level_policy_applies_when_the_request_has_none() {
    let (mut vnet, fakeserver) = testcontext();
    // GetVcn defaults to no-retry; the client-level policy turns one 500
    // into a second attempt.
    vnet.set_retry_policy(Some(test_policy(1)));
    let mocksrv = fakeserver.run(Scenario::GetVcnOnceFlaky);

    let res = vnet
        .get_vcn(GetVcnRequest {
            vcn_id: "ocid1.vcn.oc1..aaaa".into(),
            ..GetVcnRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(res.body.id, "ocid1.vcn.oc1..aaaa");
    timeout_after_1s(mocksrv).await;
}

#[tokio::test]
async fn operation_default_applies_without_overrides() {
    let (vnet, fakeserver) = testcontext();
    // No request or client policy: GetVcn's no-retry default surfaces the
    // first 500 as an error, without a second attempt.
    let mocksrv = fakeserver.run(Scenario::GetVcnAlwaysBroken);

    let err = vnet
        .get_vcn(GetVcnRequest {
            vcn_id: "ocid1.vcn.oc1..aaaa".into(),
            ..GetVcnRequest::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(&err, Error::Api(e) if e.status == StatusCode::INTERNAL_SERVER_ERROR));
    timeout_after_1s(mocksrv).await;
}

#[tokio::test]
async fn request_policy_wins_over_the_client_policy() {
    let (mut vnet, fakeserver) = testcontext();
    // The client-level policy would allow retries, but the request pins a
    // no-retry policy; the single 500 must surface without a second attempt.
    vnet.set_retry_policy(Some(test_policy(3)));
    let mocksrv = fakeserver.run(Scenario::GetVcnAlwaysBroken);

    let err = vnet
        .get_vcn(GetVcnRequest {
            vcn_id: "ocid1.vcn.oc1..aaaa".into(),
            retry_policy: Some(RetryPolicy::none()),
            ..GetVcnRequest::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(&err, Error::Api(e) if e.status == StatusCode::INTERNAL_SERVER_ERROR));
    timeout_after_1s(mocksrv).await;
}

fn test_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy::new(Duration::from_millis(1), Duration::from_millis(2), max_retries).unwrap()
}

// ------------------------------------------------------------------------
// mock test setup cruft
// ------------------------------------------------------------------------

// We wrap tower_test::mock::Handle
type ServiceHandle = tower_test::mock::Handle<Request<Body>, Response<Body>>;
struct ServiceVerifier(ServiceHandle);

async fn timeout_after_1s(handle: tokio::task::JoinHandle<()>) {
    tokio::time::timeout(std::time::Duration::from_secs(1), handle)
        .await
        .expect("timeout on mock service")
        .expect("scenario succeeded")
}

/// Scenarios we test for in ServiceVerifier above
enum Scenario {
    CreateVcn,
    DeleteVcn,
    ListSubnetsFlaky,
    GetRouteTableMissing,
    GetVcnOnceFlaky,
    GetVcnAlwaysBroken,
}

impl ServiceVerifier {
    /// Tests only get to run specific scenarios that have matching handlers.
    ///
    /// Await the `JoinHandle` (with a timeout) from this function to ensure
    /// the scenario ran to completion, i.e. all expected calls were responded
    /// to, using the timeout to catch missing calls.
    fn run(self, scenario: Scenario) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            // moving self => one scenario per test
            match scenario {
                Scenario::CreateVcn => self.handle_create_vcn().await,
                Scenario::DeleteVcn => self.handle_delete_vcn().await,
                Scenario::ListSubnetsFlaky => self.handle_list_subnets_flaky().await,
                Scenario::GetRouteTableMissing => self.handle_get_route_table_missing().await,
                Scenario::GetVcnOnceFlaky => self.handle_get_vcn_once_flaky().await,
                Scenario::GetVcnAlwaysBroken => self.handle_get_vcn_broken().await,
            }
            .expect("scenario completed without errors");
        })
    }

    // chainable scenario handlers

    async fn handle_create_vcn(mut self) -> Result<Self, Error> {
        let (request, send) = self.0.next_request().await.expect("service not called");
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.uri().path(), "/20160918/vcns");
        // A token must have been generated for us, and be a v4 uuid.
        let token = request
            .headers()
            .get("opc-retry-token")
            .expect("idempotency token missing")
            .to_str()
            .unwrap();
        assert!(uuid::Uuid::parse_str(token).is_ok());

        let respdata = json!({
            "id": "ocid1.vcn.oc1..aaaa",
            "compartmentId": "ocid1.compartment.oc1..bbbb",
            "cidrBlock": "10.0.0.0/16",
            "lifecycleState": "PROVISIONING"
        });
        send.send_response(
            Response::builder()
                .status(StatusCode::OK)
                .header("opc-request-id", "abc-123")
                .body(Body::from(serde_json::to_vec(&respdata).unwrap()))
                .unwrap(),
        );
        Ok(self)
    }

    async fn handle_delete_vcn(mut self) -> Result<Self, Error> {
        let (request, send) = self.0.next_request().await.expect("service not called");
        assert_eq!(request.method(), http::Method::DELETE);
        assert_eq!(request.uri().path(), "/20160918/vcns/ocid1.vcn.xxx");
        assert_eq!(request.headers().get("opc-retry-token").unwrap(), "tok-1");

        send.send_response(
            Response::builder()
                .status(StatusCode::NO_CONTENT)
                .header("opc-request-id", "del-1")
                .body(Body::empty())
                .unwrap(),
        );
        Ok(self)
    }

    async fn handle_list_subnets_flaky(mut self) -> Result<Self, Error> {
        for _ in 0..2 {
            let (request, send) = self.0.next_request().await.expect("service not called");
            assert_eq!(request.method(), http::Method::GET);
            assert_eq!(request.uri().path(), "/20160918/subnets");
            send.send_response(
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from(
                        br#"{"code":"InternalError","message":"try again"}"#.to_vec(),
                    ))
                    .unwrap(),
            );
        }
        let (request, send) = self.0.next_request().await.expect("service not called 3");
        assert!(request
            .uri()
            .query()
            .unwrap()
            .contains("compartmentId=ocid1.compartment.oc1..bbbb"));
        let respdata = json!([{
            "id": "ocid1.subnet.oc1..cccc",
            "compartmentId": "ocid1.compartment.oc1..bbbb",
            "vcnId": "ocid1.vcn.oc1..aaaa",
            "cidrBlock": "10.0.1.0/24",
            "lifecycleState": "AVAILABLE"
        }]);
        send.send_response(
            Response::builder()
                .status(StatusCode::OK)
                .header("opc-request-id", "list-1")
                .body(Body::from(serde_json::to_vec(&respdata).unwrap()))
                .unwrap(),
        );
        // The harness must stop at exactly three attempts; a fourth request
        // would hang the scenario and trip the timeout.
        Ok(self)
    }

    async fn handle_get_route_table_missing(mut self) -> Result<Self, Error> {
        let (request, send) = self.0.next_request().await.expect("service not called");
        assert_eq!(request.method(), http::Method::GET);
        assert_eq!(
            request.uri().path(),
            "/20160918/routeTables/ocid1.routetable.oc1..dddd"
        );
        send.send_response(
            Response::builder()
                .status(StatusCode::NOT_FOUND)
                .header("opc-request-id", "req-404")
                .body(Body::from(
                    br#"{"code":"NotAuthorizedOrNotFound","message":"resource does not exist"}"#
                        .to_vec(),
                ))
                .unwrap(),
        );
        Ok(self)
    }

    async fn handle_get_vcn_once_flaky(mut self) -> Result<Self, Error> {
        {
            let (_, send) = self.0.next_request().await.expect("service not called 1");
            send.send_response(
                Response::builder()
                    .status(StatusCode::SERVICE_UNAVAILABLE)
                    .body(Body::empty())
                    .unwrap(),
            );
        }
        let (_, send) = self.0.next_request().await.expect("service not called 2");
        let respdata = json!({
            "id": "ocid1.vcn.oc1..aaaa",
            "compartmentId": "ocid1.compartment.oc1..bbbb",
            "lifecycleState": "AVAILABLE"
        });
        send.send_response(
            Response::builder()
                .status(StatusCode::OK)
                .body(Body::from(serde_json::to_vec(&respdata).unwrap()))
                .unwrap(),
        );
        Ok(self)
    }

    async fn handle_get_vcn_broken(mut self) -> Result<Self, Error> {
        let (_, send) = self.0.next_request().await.expect("service not called");
        send.send_response(
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::from(
                    br#"{"code":"InternalError","message":"broken"}"#.to_vec(),
                ))
                .unwrap(),
        );
        // No second response queued: a retry here would hang and trip the
        // scenario timeout.
        Ok(self)
    }
}

// Create a test context with a mocked transport
fn testcontext() -> (VirtualNetwork, ServiceVerifier) {
    let (mock_service, handle) = tower_test::mock::pair::<Request<Body>, Response<Body>>();
    let client = Client::new(mock_service, "core").with_breaker(CircuitBreaker::disabled());
    let config = Config::new(http::Uri::from_static(
        "https://iaas.us-phoenix-1.oraclecloud.com",
    ));
    (VirtualNetwork::with_client(client, config), ServiceVerifier(handle))
}
