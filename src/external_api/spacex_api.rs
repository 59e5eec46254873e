pub mod models;

use tracing::{debug, error};

use super::{ApiError, BaseApiClient};
use crate::constants::PAST_LAUNCHES_LIMIT;
use models::launch::Launch;
use models::launch_filter::LaunchFilter;

/// Stateless client for the SpaceX launches API.
///
/// Every operation issues a single request and either returns the parsed
/// body or logs one diagnostic and propagates the error unchanged. There is
/// no retry and no caching.
pub struct SpacexApi {
    pub client: BaseApiClient,
    api_prefix: String,
}

impl SpacexApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_api_client = BaseApiClient::new(base_url)?;
        Ok(Self {
            client: base_api_client,
            api_prefix: "/v5/launches".to_string(),
        })
    }

    pub async fn get_next_launch(&self) -> Result<Launch, ApiError> {
        debug!("fetching next launch");
        self.client
            .get::<Launch>(&format!("{}/next", self.api_prefix))
            .await
            .inspect_err(|e| error!("failed to fetch next launch: {e}"))
    }

    /// Past launches in the order the upstream returned them.
    pub async fn get_past_launches(&self) -> Result<Vec<Launch>, ApiError> {
        debug!("fetching past launches");
        self.client
            .get::<Vec<Launch>>(&format!("{}/past", self.api_prefix))
            .await
            .inspect_err(|e| error!("failed to fetch past launches: {e}"))
    }

    /// Launch details by upstream id. The id is sent as-is; an unknown id
    /// surfaces as the upstream error status.
    pub async fn get_launch_details(&self, launch_id: &str) -> Result<Launch, ApiError> {
        debug!("fetching launch details for id {launch_id}");
        self.client
            .get::<Launch>(&format!("{}/{}", self.api_prefix, launch_id))
            .await
            .inspect_err(|e| error!("failed to fetch launch details for id {launch_id}: {e}"))
    }

    /// Past launches narrowed by outcome, truncated to the first
    /// [`PAST_LAUNCHES_LIMIT`] matches. Ordering is inherited from
    /// [`Self::get_past_launches`], which also emits the diagnostic when the
    /// underlying fetch fails.
    pub async fn get_filtered_launches(
        &self,
        filter: LaunchFilter,
    ) -> Result<Vec<Launch>, ApiError> {
        let launches = self.get_past_launches().await?;
        Ok(launches
            .into_iter()
            .filter(|launch| filter.matches(launch))
            .take(PAST_LAUNCHES_LIMIT)
            .collect())
    }
}

#[cfg(test)]
impl SpacexApi {
    pub fn mock(base_url: &str) -> Self {
        Self {
            client: BaseApiClient::new(base_url).unwrap(),
            api_prefix: "/v5/launches".to_string(),
        }
    }

    pub async fn mock_get_next_launch(
        server: &mut mockito::ServerGuard,
        launch: &Launch,
    ) -> mockito::Mock {
        server
            .mock("GET", "/v5/launches/next")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(launch).unwrap())
            .create_async()
            .await
    }

    pub async fn mock_get_past_launches(
        server: &mut mockito::ServerGuard,
        launches: &[Launch],
    ) -> mockito::Mock {
        server
            .mock("GET", "/v5/launches/past")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(launches).unwrap())
            .create_async()
            .await
    }

    pub async fn mock_get_launch_by_id(
        server: &mut mockito::ServerGuard,
        launch: &Launch,
    ) -> mockito::Mock {
        server
            .mock("GET", format!("/v5/launches/{}", launch.id).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(launch).unwrap())
            .create_async()
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Server;
    use reqwest::StatusCode;

    use super::*;

    fn past_launches() -> Vec<Launch> {
        vec![
            Launch::stub("1", Some(true), 0),
            Launch::stub("2", Some(false), 1),
            Launch::stub("3", Some(false), 0),
        ]
    }

    #[test]
    fn test_field_api_prefix() {
        let spacex_api = SpacexApi::mock("http://localhost:1234");
        assert_eq!(spacex_api.api_prefix, "/v5/launches")
    }

    #[tokio::test]
    async fn test_get_next_launch() {
        let mut server = Server::new_async().await;
        let expected = Launch::stub("5eb87d47ffd86e000604b38a", None, 0);
        let mock = SpacexApi::mock_get_next_launch(&mut server, &expected).await;

        let spacex_api = SpacexApi::mock(&server.url());
        let launch = spacex_api.get_next_launch().await.unwrap();

        assert_eq!(launch, expected);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_past_launches_preserves_order() {
        let mut server = Server::new_async().await;
        SpacexApi::mock_get_past_launches(&mut server, &past_launches()).await;

        let spacex_api = SpacexApi::mock(&server.url());
        let launches = spacex_api.get_past_launches().await.unwrap();

        let ids: Vec<&str> = launches.iter().map(|launch| launch.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_get_launch_details() {
        let mut server = Server::new_async().await;
        let expected = Launch::stub("5eb87d42ffd86e000604b384", Some(true), 0);
        let mock = SpacexApi::mock_get_launch_by_id(&mut server, &expected).await;

        let spacex_api = SpacexApi::mock(&server.url());
        let launch = spacex_api
            .get_launch_details("5eb87d42ffd86e000604b384")
            .await
            .unwrap();

        assert_eq!(launch, expected);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_launch_details_idempotent() {
        let mut server = Server::new_async().await;
        let expected = Launch::stub("5eb87d42ffd86e000604b384", Some(true), 0);
        let mock = server
            .mock("GET", "/v5/launches/5eb87d42ffd86e000604b384")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&expected).unwrap())
            .expect(2)
            .create_async()
            .await;

        let spacex_api = SpacexApi::mock(&server.url());
        let first = spacex_api
            .get_launch_details("5eb87d42ffd86e000604b384")
            .await
            .unwrap();
        let second = spacex_api
            .get_launch_details("5eb87d42ffd86e000604b384")
            .await
            .unwrap();

        assert_eq!(first, second);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_launch_details_nonexistent_id() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v5/launches/unknown")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let spacex_api = SpacexApi::mock(&server.url());
        let api_error = spacex_api.get_launch_details("unknown").await.unwrap_err();

        assert!(matches!(api_error, ApiError::Api(StatusCode::NOT_FOUND, _)));
    }

    #[tokio::test]
    async fn test_get_next_launch_upstream_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v5/launches/next")
            .with_status(500)
            .create_async()
            .await;

        let spacex_api = SpacexApi::mock(&server.url());
        let api_error = spacex_api.get_next_launch().await.unwrap_err();

        assert!(matches!(api_error, ApiError::Api(_, _)));
    }

    #[tokio::test]
    async fn test_get_next_launch_malformed_body() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v5/launches/next")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let spacex_api = SpacexApi::mock(&server.url());
        let api_error = spacex_api.get_next_launch().await.unwrap_err();

        assert!(matches!(api_error, ApiError::Serde(_)));
    }

    #[tokio::test]
    async fn test_filtered_launches_scenario() {
        let mut server = Server::new_async().await;
        SpacexApi::mock_get_past_launches(&mut server, &past_launches()).await;
        let spacex_api = SpacexApi::mock(&server.url());

        let failed = spacex_api
            .get_filtered_launches(LaunchFilter::Failed)
            .await
            .unwrap();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].id, "2");

        let success = spacex_api
            .get_filtered_launches(LaunchFilter::Success)
            .await
            .unwrap();
        assert_eq!(success.len(), 1);
        assert_eq!(success[0].id, "1");

        let all = spacex_api
            .get_filtered_launches(LaunchFilter::All)
            .await
            .unwrap();
        let ids: Vec<&str> = all.iter().map(|launch| launch.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_filtered_launches_truncates_to_limit() {
        let launches: Vec<Launch> = (0..15)
            .map(|i| Launch::stub(&i.to_string(), Some(true), 0))
            .collect();
        let mut server = Server::new_async().await;
        SpacexApi::mock_get_past_launches(&mut server, &launches).await;

        let spacex_api = SpacexApi::mock(&server.url());
        let all = spacex_api
            .get_filtered_launches(LaunchFilter::All)
            .await
            .unwrap();

        assert_eq!(all.len(), PAST_LAUNCHES_LIMIT);
        let ids: Vec<&str> = all.iter().map(|launch| launch.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[tokio::test]
    async fn test_filtered_launches_success_only() {
        let launches = vec![
            Launch::stub("1", Some(true), 0),
            Launch::stub("2", None, 0),
            Launch::stub("3", Some(true), 0),
            Launch::stub("4", Some(false), 2),
        ];
        let mut server = Server::new_async().await;
        SpacexApi::mock_get_past_launches(&mut server, &launches).await;

        let spacex_api = SpacexApi::mock(&server.url());
        let success = spacex_api
            .get_filtered_launches(LaunchFilter::Success)
            .await
            .unwrap();

        assert!(success.iter().all(|launch| launch.is_success()));
        let ids: Vec<&str> = success.iter().map(|launch| launch.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_filtered_launches_failed_requires_failure_entries() {
        let launches = vec![
            Launch::stub("1", Some(false), 0),
            Launch::stub("2", Some(false), 1),
            Launch::stub("3", None, 1),
        ];
        let mut server = Server::new_async().await;
        SpacexApi::mock_get_past_launches(&mut server, &launches).await;

        let spacex_api = SpacexApi::mock(&server.url());
        let failed = spacex_api
            .get_filtered_launches(LaunchFilter::Failed)
            .await
            .unwrap();

        assert!(failed
            .iter()
            .all(|launch| !launch.is_success() && launch.has_failures()));
        let ids: Vec<&str> = failed.iter().map(|launch| launch.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[tokio::test]
    async fn test_filtered_launches_propagates_upstream_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v5/launches/past")
            .with_status(503)
            .create_async()
            .await;

        let spacex_api = SpacexApi::mock(&server.url());
        let api_error = spacex_api
            .get_filtered_launches(LaunchFilter::All)
            .await
            .unwrap_err();

        assert!(matches!(
            api_error,
            ApiError::Api(StatusCode::SERVICE_UNAVAILABLE, _)
        ));
    }
}
