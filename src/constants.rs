pub const CONFIG_DIR: &str = ".config/slt";
pub const DEFAULT_SPACEX_BASE_URL: &str = "https://api.spacexdata.com";
/// Upper bound on launches returned by the filtered listing.
pub const PAST_LAUNCHES_LIMIT: usize = 10;

/// Standard message
#[derive(Debug)]
pub enum Message {
    NextLaunch(String),
    LaunchesListed(usize, String),
    NoLaunchesMatched(String),
}

impl Message {
    pub fn to_formatted_string(&self) -> String {
        match self {
            Message::NextLaunch(name) => format!("Next scheduled launch: {}", name),
            Message::LaunchesListed(count, filter) => {
                format!("Showing {} past launches (filter: {})", count, filter)
            }
            Message::NoLaunchesMatched(filter) => {
                format!("No past launches matched the '{}' filter", filter)
            }
        }
    }
}
