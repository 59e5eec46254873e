use super::launch_links::LaunchLinks;

/// One launch as reported by the upstream API.
///
/// Records are read-only snapshots of upstream responses. Optional fields
/// default to empty and unknown upstream fields are ignored.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Launch {
    pub id: String,
    pub name: String,
    pub date_utc: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub links: LaunchLinks,
    #[serde(default)]
    pub launchpad: Option<String>,
    #[serde(default)]
    pub payloads: Vec<String>,
    #[serde(default)]
    pub customers: Vec<String>,
    /// Upstream-defined failure entries; only emptiness is ever checked.
    #[serde(default)]
    pub failures: Vec<serde_json::Value>,
}

impl Launch {
    /// A `null` upstream `success` counts as not successful.
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false)
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
impl Launch {
    pub fn stub(id: &str, success: Option<bool>, failure_count: usize) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Mission {}", id),
            date_utc: "2022-03-19T04:42:00.000Z".to_string(),
            success,
            details: None,
            links: LaunchLinks::default(),
            launchpad: None,
            payloads: vec![],
            customers: vec![],
            failures: (0..failure_count)
                .map(|i| serde_json::json!({"time": i, "reason": "engine failure"}))
                .collect(),
        }
    }
}
