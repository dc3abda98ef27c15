use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;
use tonic_health::pb::HealthCheckRequest;

use amadeus_gateway::translate::ResponseEncoder;

use crate::common::TestGateway;

#[tokio::test]
async fn test_gateway_reports_serving() {
    let gateway = TestGateway::start(&[], ResponseEncoder::default()).await;
    let mut health = HealthClient::new(gateway.channel().await);

    let response = health
        .check(HealthCheckRequest {
            service: "amadeus.service.AmadeusService".to_string(),
        })
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.status, ServingStatus::Serving as i32);

    gateway.stop().await;
}
