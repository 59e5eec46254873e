use chrono::DateTime;

use crate::external_api::spacex_api::models::launch::Launch;

/// Render an upstream UTC timestamp for display.
///
/// Falls back to the raw upstream string when it does not parse.
pub fn format_launch_date(date_utc: &str) -> String {
    DateTime::parse_from_rfc3339(date_utc)
        .map(|date| date.format("%d/%m/%Y %H:%M UTC").to_string())
        .unwrap_or_else(|_| date_utc.to_string())
}

pub fn format_outcome(launch: &Launch) -> &'static str {
    match launch.success {
        Some(true) => "success",
        Some(false) => "failed",
        None => "unknown",
    }
}

/// One line per launch for the list output
pub fn format_launch_summary(launch: &Launch) -> String {
    format!(
        "{}  {} [{}] id: {}",
        format_launch_date(&launch.date_utc),
        launch.name,
        format_outcome(launch),
        launch.id
    )
}

/// Multi-line block for a single launch
pub fn format_launch_details(launch: &Launch) -> String {
    let mut lines = vec![
        format!("Name:      {}", launch.name),
        format!("Id:        {}", launch.id),
        format!("Date:      {}", format_launch_date(&launch.date_utc)),
        format!("Outcome:   {}", format_outcome(launch)),
    ];
    if !launch.customers.is_empty() {
        lines.push(format!("Customers: {}", launch.customers.join(", ")));
    }
    if let Some(details) = launch.details.as_deref().filter(|value| !value.is_empty()) {
        lines.push(format!("Details:   {}", details));
    }
    if let Some(webcast) = &launch.links.webcast {
        lines.push(format!("Webcast:   {}", webcast));
    }
    if let Some(article) = &launch.links.article {
        lines.push(format!("Article:   {}", article));
    }
    lines.join("\n")
}
