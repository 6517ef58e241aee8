//! Unit tests for the depth chart HTTP client

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    fn client_for(server: &MockServer) -> DepthChartClient {
        DepthChartClient::new(format!("{}/api/player-chart/", server.uri()))
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = DepthChartClient::new("http://localhost:8080/api/player-chart/");
        assert_eq!(client.base_url(), "http://localhost:8080/api/player-chart");
        assert_eq!(client.url("add"), "http://localhost:8080/api/player-chart/add");
    }

    #[tokio::test]
    async fn test_fetch_chart_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/player-chart"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "playerChart": {
                    "QB": ["Mac Jones", "Tom Brady"],
                    "WR": ["A"]
                }
            })))
            .mount(&mock_server)
            .await;

        let chart = client_for(&mock_server).fetch_chart().await.unwrap();
        assert_eq!(chart.roster("QB").unwrap(), ["Mac Jones", "Tom Brady"]);
        assert_eq!(chart.roster("WR").unwrap(), ["A"]);
    }

    #[tokio::test]
    async fn test_fetch_chart_missing_field_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/player-chart"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let chart = client_for(&mock_server).fetch_chart().await.unwrap();
        assert!(chart.is_empty());
    }

    #[tokio::test]
    async fn test_add_player_sends_depth() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/player-chart/add"))
            .and(body_json(json!({
                "position": "QB",
                "player": "Mac Jones",
                "positionDepth": 0
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        client_for(&mock_server)
            .add_player("QB", "Mac Jones", Some(0))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_player_sends_null_depth() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/player-chart/add"))
            .and(body_json(json!({
                "position": "QB",
                "player": "Tom Brady",
                "positionDepth": null
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        client_for(&mock_server)
            .add_player("QB", "Tom Brady", None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_player_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/player-chart/add"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .add_player("QB", "Tom Brady", None)
            .await;

        match result {
            Err(DepthChartError::Rejected { status, operation }) => {
                assert_eq!(status, 409);
                assert_eq!(operation, "add player");
            }
            other => panic!("Expected Rejected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remove_player_returns_removed_names() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/player-chart/remove"))
            .and(body_json(json!({"position": "QB", "player": "Mac Jones"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "player": ["Mac Jones"]
            })))
            .mount(&mock_server)
            .await;

        let removed = client_for(&mock_server)
            .remove_player("QB", "Mac Jones")
            .await
            .unwrap();
        assert_eq!(removed, vec!["Mac Jones"]);
    }

    #[tokio::test]
    async fn test_remove_player_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/player-chart/remove"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"player": []})))
            .mount(&mock_server)
            .await;

        let removed = client_for(&mock_server)
            .remove_player("QB", "Nobody")
            .await
            .unwrap();
        assert!(removed.is_empty());
    }

    #[tokio::test]
    async fn test_remove_player_rejected_reads_as_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/player-chart/remove"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let removed = client_for(&mock_server)
            .remove_player("QB", "Tom Brady")
            .await
            .unwrap();
        assert!(removed.is_empty());
        assert_eq!(
            crate::commands::handlers::removal_message("QB", &removed),
            crate::commands::handlers::PLAYER_NOT_FOUND_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_backups_encodes_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/player-chart/backups"))
            .and(query_param("position", "D/ST"))
            .and(query_param("player", "Tom Brady"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "backups": ["B", "C"]
            })))
            .mount(&mock_server)
            .await;

        let backups = client_for(&mock_server)
            .backups("D/ST", "Tom Brady")
            .await
            .unwrap();
        assert_eq!(backups, vec!["B", "C"]);
    }

    #[tokio::test]
    async fn test_backups_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/player-chart/backups"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).backups("QB", "A").await;
        assert!(matches!(
            result,
            Err(DepthChartError::Rejected { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/player-chart"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).fetch_chart().await;
        assert!(matches!(result, Err(DepthChartError::Json(_))));
    }
}
