use std::fmt;

use clap::ValueEnum;

use super::launch::Launch;

/// Outcome filter over past launches.
///
/// `Failed` keeps only launches that are unsuccessful and carry at least one
/// upstream failure entry. An unsuccessful launch with an empty `failures`
/// list matches neither `Success` nor `Failed`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchFilter {
    All,
    Success,
    Failed,
}

impl LaunchFilter {
    pub fn matches(&self, launch: &Launch) -> bool {
        match self {
            LaunchFilter::All => true,
            LaunchFilter::Success => launch.is_success(),
            LaunchFilter::Failed => !launch.is_success() && launch.has_failures(),
        }
    }
}

impl fmt::Display for LaunchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchFilter::All => write!(f, "all"),
            LaunchFilter::Success => write!(f, "success"),
            LaunchFilter::Failed => write!(f, "failed"),
        }
    }
}
