use serde::Serialize;
use tokio::time::{sleep, Duration};

/// A fixture row as it would come off the schedule page.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedMatch {
    pub team1: String,
    pub team2: String,
    pub venue: String,
    pub date: String,
    pub time: String,
}

/// A season stat line as it would come off the stats page.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedPlayerStats {
    pub name: String,
    pub team: String,
    pub matches: u32,
    pub runs: u32,
    pub average: f64,
    pub strike_rate: f64,
    pub wickets: u32,
    pub economy: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedData {
    pub matches: Vec<ScrapedMatch>,
    pub player_stats: Vec<ScrapedPlayerStats>,
}

/// Pretends to scrape the IPL site and returns canned schedule and stat
/// rows after simulated network delays. Real scraping is out of scope; the
/// shape of the data is what the ingestion path consumes.
pub async fn scrape_latest_ipl_data() -> ScrapedData {
    tracing::info!("starting data scraping process");

    tracing::info!("scraping match schedule");
    let matches = scrape_match_schedule().await;

    tracing::info!("scraping player statistics");
    let player_stats = scrape_player_stats().await;

    tracing::info!(
        matches = matches.len(),
        player_stats = player_stats.len(),
        "data scraping completed"
    );

    ScrapedData {
        matches,
        player_stats,
    }
}

async fn scrape_match_schedule() -> Vec<ScrapedMatch> {
    // Simulated network latency.
    sleep(Duration::from_millis(500)).await;

    vec![
        ScrapedMatch {
            team1: "Chennai Super Kings".to_string(),
            team2: "Mumbai Indians".to_string(),
            venue: "M. A. Chidambaram Stadium, Chennai".to_string(),
            date: "2023-05-15".to_string(),
            time: "19:30".to_string(),
        },
        ScrapedMatch {
            team1: "Royal Challengers Bangalore".to_string(),
            team2: "Kolkata Knight Riders".to_string(),
            venue: "M. Chinnaswamy Stadium, Bengaluru".to_string(),
            date: "2023-05-16".to_string(),
            time: "15:30".to_string(),
        },
        ScrapedMatch {
            team1: "Sunrisers Hyderabad".to_string(),
            team2: "Royal Challengers Bangalore".to_string(),
            venue: "Rajiv Gandhi International Stadium, Hyderabad".to_string(),
            date: "2023-05-17".to_string(),
            time: "19:30".to_string(),
        },
        ScrapedMatch {
            team1: "Punjab Kings".to_string(),
            team2: "Rajasthan Royals".to_string(),
            venue: "Punjab Cricket Association Stadium, Mohali".to_string(),
            date: "2023-05-18".to_string(),
            time: "15:30".to_string(),
        },
    ]
}

async fn scrape_player_stats() -> Vec<ScrapedPlayerStats> {
    sleep(Duration::from_millis(800)).await;

    vec![
        ScrapedPlayerStats {
            name: "MS Dhoni".to_string(),
            team: "Chennai Super Kings".to_string(),
            matches: 12,
            runs: 219,
            average: 43.80,
            strike_rate: 186.44,
            wickets: 0,
            economy: 0.0,
        },
        ScrapedPlayerStats {
            name: "Rohit Sharma".to_string(),
            team: "Mumbai Indians".to_string(),
            matches: 12,
            runs: 322,
            average: 29.27,
            strike_rate: 133.61,
            wickets: 0,
            economy: 0.0,
        },
        ScrapedPlayerStats {
            name: "Jasprit Bumrah".to_string(),
            team: "Mumbai Indians".to_string(),
            matches: 12,
            runs: 15,
            average: 7.50,
            strike_rate: 115.38,
            wickets: 18,
            economy: 6.73,
        },
        ScrapedPlayerStats {
            name: "Ravindra Jadeja".to_string(),
            team: "Chennai Super Kings".to_string(),
            matches: 12,
            runs: 175,
            average: 35.00,
            strike_rate: 142.27,
            wickets: 12,
            economy: 7.86,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scrape_returns_canned_rows() {
        let data = scrape_latest_ipl_data().await;

        assert_eq!(data.matches.len(), 4);
        assert_eq!(data.player_stats.len(), 4);
        assert_eq!(data.matches[0].team1, "Chennai Super Kings");
        assert_eq!(data.player_stats[2].name, "Jasprit Bumrah");
        assert_eq!(data.player_stats[2].wickets, 18);
    }

    #[tokio::test]
    async fn test_scraped_rows_serialize_camel_case() {
        let data = scrape_latest_ipl_data().await;
        let json = serde_json::to_value(&data.player_stats[0]).unwrap();
        assert!(json.get("strikeRate").is_some());
    }
}
