use std::time::{Duration, Instant};

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use boskos_client::{heartbeat, Client, Config};

const INTERVAL: Duration = Duration::from_millis(40);

#[tokio::test]
async fn test_heartbeat_outlives_pool_manager_faults() {
    let server = MockServer::start().await;
    // First beat lands, second is refused, third lands again. The loop must
    // shrug off the refusal and keep going.
    Mock::given(method("POST"))
        .and(path("/update"))
        .and(query_param("name", "aws-account-0042"))
        .and(query_param("state", "busy"))
        .and(query_param("owner", "ci-robot"))
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/update"))
        .respond_with(ResponseTemplate::new(500).set_body_string("lost my database"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/update"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&Config::new(server.uri(), "ci-robot")).unwrap();
    heartbeat::run(&client, "aws-account-0042", INTERVAL, Some(3)).await;
}

#[tokio::test]
async fn test_heartbeat_sends_one_update_per_interval() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/update"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&server)
        .await;

    let client = Client::new(&Config::new(server.uri(), "ci-robot")).unwrap();
    let started = Instant::now();
    heartbeat::run(&client, "aws-account-0042", INTERVAL, Some(3)).await;

    // Two sleeps separate three beats.
    assert!(started.elapsed() >= INTERVAL * 2);
}

#[tokio::test]
async fn test_heartbeat_never_raises_on_constant_faults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/update"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let client = Client::new(&Config::new(server.uri(), "ci-robot")).unwrap();
    heartbeat::run(&client, "aws-account-0042", INTERVAL, Some(2)).await;
}
