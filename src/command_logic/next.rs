use crate::constants::Message;
use crate::external_api::spacex_api::SpacexApi;
use crate::external_api::ApiError;
use crate::utils::format_launch_details;

/// Next scheduled launch, rendered for the terminal
pub async fn show_next_launch(spacex_api_client: &SpacexApi) -> Result<String, ApiError> {
    let launch = spacex_api_client.get_next_launch().await?;
    Ok(format!(
        "{}\n{}",
        Message::NextLaunch(launch.name.clone()).to_formatted_string(),
        format_launch_details(&launch)
    ))
}
