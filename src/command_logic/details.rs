use crate::external_api::spacex_api::SpacexApi;
use crate::external_api::ApiError;
use crate::utils::format_launch_details;

/// Details for a single launch, rendered for the terminal
pub async fn show_launch_details(
    launch_id: &str,
    spacex_api_client: &SpacexApi,
) -> Result<String, ApiError> {
    let launch = spacex_api_client.get_launch_details(launch_id).await?;
    Ok(format_launch_details(&launch))
}
