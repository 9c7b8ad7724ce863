use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player role drives which halves of a performance prediction get filled:
/// batting numbers for batsmen, keepers and all-rounders, bowling numbers
/// for bowlers and all-rounders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerRole {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl PlayerRole {
    pub fn bats(&self) -> bool {
        matches!(self, Self::Batsman | Self::AllRounder | Self::WicketKeeper)
    }

    pub fn bowls(&self) -> bool {
        matches!(self, Self::Bowler | Self::AllRounder)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub team_id: Option<i32>,
    pub role: PlayerRole,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
    pub image_url: Option<String>,
    pub country: Option<String>,
    pub is_captain: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    #[serde(default)]
    pub team_id: Option<i32>,
    pub role: PlayerRole,
    #[serde(default)]
    pub batting_style: Option<String>,
    #[serde(default)]
    pub bowling_style: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub is_captain: bool,
}
