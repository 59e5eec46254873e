#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct LaunchLinks {
    #[serde(default)]
    pub patch: LaunchPatch,
    #[serde(default)]
    pub webcast: Option<String>,
    #[serde(default)]
    pub article: Option<String>,
    #[serde(default)]
    pub flickr: LaunchFlickr,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct LaunchPatch {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct LaunchFlickr {
    #[serde(default)]
    pub original: Vec<String>,
}
