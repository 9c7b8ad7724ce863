use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub short_name: String,
    pub logo_url: Option<String>,
    pub home_venue: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub home_venue: Option<String>,
}

impl Team {
    /// True when `name` matches either the full or the short team name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name || self.short_name == name
    }
}

/// Stadium pitch character, used by the narrative generator to bias its
/// pitch-conditions paragraph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PitchType {
    SpinFriendly,
    BattingFriendly,
    Balanced,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stadium {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub country: String,
    pub pitch_type: Option<PitchType>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewStadium {
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub pitch_type: Option<PitchType>,
}
