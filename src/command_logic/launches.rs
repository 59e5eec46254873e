use crate::constants::Message;
use crate::external_api::spacex_api::models::launch_filter::LaunchFilter;
use crate::external_api::spacex_api::SpacexApi;
use crate::external_api::ApiError;
use crate::utils::format_launch_summary;

/// Filtered listing of past launches, rendered for the terminal
pub async fn list_launches(
    filter: LaunchFilter,
    spacex_api_client: &SpacexApi,
) -> Result<String, ApiError> {
    let launches = spacex_api_client.get_filtered_launches(filter).await?;
    if launches.is_empty() {
        return Ok(Message::NoLaunchesMatched(filter.to_string()).to_formatted_string());
    }
    let mut lines =
        vec![Message::LaunchesListed(launches.len(), filter.to_string()).to_formatted_string()];
    lines.extend(launches.iter().map(format_launch_summary));
    Ok(lines.join("\n"))
}
