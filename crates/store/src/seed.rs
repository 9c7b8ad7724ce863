use chrono::{Duration, Utc};

use pitchside_models::{
    NewMatch, NewPlayer, NewPlayerPerformancePrediction, NewPrediction, NewStadium, NewTeam,
    PhaseBreakdown, PhaseStats, PitchType, PlayerRole,
};

use crate::store::Store;

/// Loads the fixed IPL sample rows the dashboard ships with: five teams,
/// three stadiums, four marquee players, three fixtures spread over the next
/// two days, a prediction per fixture and per-player predictions for the
/// headline match.
pub fn seed_sample_data(store: &Store) {
    let csk = store.create_team(NewTeam {
        name: "Chennai Super Kings".to_string(),
        short_name: "CSK".to_string(),
        logo_url: Some(
            "https://upload.wikimedia.org/wikipedia/en/thumb/2/2b/Chennai_Super_Kings_Logo.svg/800px-Chennai_Super_Kings_Logo.svg.png"
                .to_string(),
        ),
        home_venue: Some("M. A. Chidambaram Stadium".to_string()),
    });
    let mi = store.create_team(NewTeam {
        name: "Mumbai Indians".to_string(),
        short_name: "MI".to_string(),
        logo_url: Some(
            "https://upload.wikimedia.org/wikipedia/en/thumb/c/cd/Mumbai_Indians_Logo.svg/800px-Mumbai_Indians_Logo.svg.png"
                .to_string(),
        ),
        home_venue: Some("Wankhede Stadium".to_string()),
    });
    let rcb = store.create_team(NewTeam {
        name: "Royal Challengers Bangalore".to_string(),
        short_name: "RCB".to_string(),
        logo_url: Some(
            "https://upload.wikimedia.org/wikipedia/en/thumb/2/2a/Royal_Challengers_Bangalore_2020.svg/800px-Royal_Challengers_Bangalore_2020.svg.png"
                .to_string(),
        ),
        home_venue: Some("M. Chinnaswamy Stadium".to_string()),
    });
    let kkr = store.create_team(NewTeam {
        name: "Kolkata Knight Riders".to_string(),
        short_name: "KKR".to_string(),
        logo_url: Some(
            "https://upload.wikimedia.org/wikipedia/en/thumb/4/4c/Kolkata_Knight_Riders_Logo.svg/800px-Kolkata_Knight_Riders_Logo.svg.png"
                .to_string(),
        ),
        home_venue: Some("Eden Gardens".to_string()),
    });
    let srh = store.create_team(NewTeam {
        name: "Sunrisers Hyderabad".to_string(),
        short_name: "SRH".to_string(),
        logo_url: Some(
            "https://upload.wikimedia.org/wikipedia/en/thumb/8/81/Sunrisers_Hyderabad.svg/800px-Sunrisers_Hyderabad.svg.png"
                .to_string(),
        ),
        home_venue: Some("Rajiv Gandhi International Cricket Stadium".to_string()),
    });

    let chepauk = store.create_stadium(NewStadium {
        name: "M. A. Chidambaram Stadium".to_string(),
        city: "Chennai".to_string(),
        country: "India".to_string(),
        pitch_type: Some(PitchType::SpinFriendly),
    });
    let wankhede = store.create_stadium(NewStadium {
        name: "Wankhede Stadium".to_string(),
        city: "Mumbai".to_string(),
        country: "India".to_string(),
        pitch_type: Some(PitchType::Balanced),
    });
    let chinnaswamy = store.create_stadium(NewStadium {
        name: "M. Chinnaswamy Stadium".to_string(),
        city: "Bengaluru".to_string(),
        country: "India".to_string(),
        pitch_type: Some(PitchType::BattingFriendly),
    });

    let dhoni = store.create_player(NewPlayer {
        name: "MS Dhoni".to_string(),
        team_id: Some(csk.id),
        role: PlayerRole::WicketKeeper,
        batting_style: Some("right-handed".to_string()),
        bowling_style: Some("right-arm medium".to_string()),
        image_url: Some("https://static.iplt20.com/players/210/1.png".to_string()),
        country: Some("India".to_string()),
        is_captain: true,
    });
    let rohit = store.create_player(NewPlayer {
        name: "Rohit Sharma".to_string(),
        team_id: Some(mi.id),
        role: PlayerRole::Batsman,
        batting_style: Some("right-handed".to_string()),
        bowling_style: Some("right-arm off break".to_string()),
        image_url: Some("https://static.iplt20.com/players/210/107.png".to_string()),
        country: Some("India".to_string()),
        is_captain: true,
    });
    let bumrah = store.create_player(NewPlayer {
        name: "Jasprit Bumrah".to_string(),
        team_id: Some(mi.id),
        role: PlayerRole::Bowler,
        batting_style: Some("right-handed".to_string()),
        bowling_style: Some("right-arm fast".to_string()),
        image_url: Some("https://static.iplt20.com/players/210/1124.png".to_string()),
        country: Some("India".to_string()),
        is_captain: false,
    });
    let jadeja = store.create_player(NewPlayer {
        name: "Ravindra Jadeja".to_string(),
        team_id: Some(csk.id),
        role: PlayerRole::AllRounder,
        batting_style: Some("left-handed".to_string()),
        bowling_style: Some("left-arm orthodox".to_string()),
        image_url: Some("https://static.iplt20.com/players/210/9.png".to_string()),
        country: Some("India".to_string()),
        is_captain: false,
    });

    let today = Utc::now();
    let match1 = store.create_match(NewMatch {
        team1_id: csk.id,
        team2_id: mi.id,
        stadium_id: Some(chepauk.id),
        match_date: today,
        match_type: "league".to_string(),
        season: 2023,
        is_completed: false,
    });
    let match2 = store.create_match(NewMatch {
        team1_id: rcb.id,
        team2_id: kkr.id,
        stadium_id: Some(chinnaswamy.id),
        match_date: today + Duration::days(1),
        match_type: "league".to_string(),
        season: 2023,
        is_completed: false,
    });
    let match3 = store.create_match(NewMatch {
        team1_id: srh.id,
        team2_id: rcb.id,
        stadium_id: Some(wankhede.id),
        match_date: today + Duration::days(2),
        match_type: "league".to_string(),
        season: 2023,
        is_completed: false,
    });

    store.create_prediction(NewPrediction {
        match_id: match1.id,
        predicted_winner_id: csk.id,
        win_probability: 0.62,
        team1_predicted_score: Some(187),
        team1_predicted_wickets: Some(6),
        team2_predicted_score: Some(173),
        team2_predicted_wickets: Some(8),
        reasoning: Some(
            "CSK has a strong record at home in Chennai, with the pitch conditions favoring \
             their spin attack. MS Dhoni's form in recent matches gives them an edge."
                .to_string(),
        ),
        confidence: 0.78,
        detailed_stats: Some(PhaseBreakdown {
            powerplay: PhaseStats {
                team1_score: 58,
                team1_wickets: 1,
                team2_score: 51,
                team2_wickets: 2,
            },
            middle: PhaseStats {
                team1_score: 85,
                team1_wickets: 3,
                team2_score: 76,
                team2_wickets: 3,
            },
            death: PhaseStats {
                team1_score: 44,
                team1_wickets: 2,
                team2_score: 46,
                team2_wickets: 3,
            },
        }),
    });
    store.create_prediction(NewPrediction {
        match_id: match2.id,
        predicted_winner_id: rcb.id,
        win_probability: 0.63,
        team1_predicted_score: Some(192),
        team1_predicted_wickets: Some(5),
        team2_predicted_score: Some(180),
        team2_predicted_wickets: Some(7),
        reasoning: Some(
            "RCB has a strong batting lineup and the Chinnaswamy Stadium is known to be a \
             high-scoring venue. KKR's bowling attack might struggle on this batting-friendly \
             pitch."
                .to_string(),
        ),
        confidence: 0.63,
        detailed_stats: None,
    });
    store.create_prediction(NewPrediction {
        match_id: match3.id,
        predicted_winner_id: srh.id,
        win_probability: 0.56,
        team1_predicted_score: Some(168),
        team1_predicted_wickets: Some(7),
        team2_predicted_score: Some(160),
        team2_predicted_wickets: Some(9),
        reasoning: Some(
            "SRH's bowling attack has been performing well in recent matches, and they have a \
             slight edge over RCB in Mumbai conditions."
                .to_string(),
        ),
        confidence: 0.56,
        detailed_stats: None,
    });

    store.create_player_performance_prediction(NewPlayerPerformancePrediction {
        match_id: match1.id,
        player_id: dhoni.id,
        predicted_runs_scored: Some(42),
        predicted_balls_faced: Some(23),
        predicted_fours: Some(3),
        predicted_sixes: Some(3),
        confidence: Some(0.75),
        reasoning: Some(
            "MS Dhoni has been in excellent form in the death overs, with a strike rate of \
             over 180 in the last 3 matches."
                .to_string(),
        ),
        ..NewPlayerPerformancePrediction::default()
    });
    store.create_player_performance_prediction(NewPlayerPerformancePrediction {
        match_id: match1.id,
        player_id: rohit.id,
        predicted_runs_scored: Some(38),
        predicted_balls_faced: Some(31),
        predicted_fours: Some(4),
        predicted_sixes: Some(1),
        confidence: Some(0.68),
        reasoning: Some(
            "Rohit Sharma has been consistent but not explosive in recent matches, with a \
             strike rate around 120-130."
                .to_string(),
        ),
        ..NewPlayerPerformancePrediction::default()
    });
    store.create_player_performance_prediction(NewPlayerPerformancePrediction {
        match_id: match1.id,
        player_id: bumrah.id,
        predicted_overs: Some(4.0),
        predicted_runs_conceded: Some(28),
        predicted_wickets: Some(3),
        predicted_maidens: Some(0),
        confidence: Some(0.82),
        reasoning: Some(
            "Jasprit Bumrah has been MI's best bowler, consistently taking wickets in all \
             phases of the game."
                .to_string(),
        ),
        ..NewPlayerPerformancePrediction::default()
    });
    store.create_player_performance_prediction(NewPlayerPerformancePrediction {
        match_id: match1.id,
        player_id: jadeja.id,
        predicted_runs_scored: Some(26),
        predicted_balls_faced: Some(18),
        predicted_fours: Some(2),
        predicted_sixes: Some(1),
        predicted_overs: Some(4.0),
        predicted_runs_conceded: Some(24),
        predicted_wickets: Some(2),
        predicted_maidens: Some(0),
        confidence: Some(0.71),
        reasoning: Some(
            "Ravindra Jadeja's all-round abilities make him a key player, especially on \
             Chennai's spin-friendly tracks."
                .to_string(),
        ),
    });

    tracing::info!(
        teams = store.get_all_teams().len(),
        stadiums = store.get_all_stadiums().len(),
        players = store.get_all_players().len(),
        matches = store.get_all_matches().len(),
        predictions = store.get_all_predictions().len(),
        "sample data loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_loads_expected_counts() {
        let store = Store::new();
        seed_sample_data(&store);

        assert_eq!(store.get_all_teams().len(), 5);
        assert_eq!(store.get_all_stadiums().len(), 3);
        assert_eq!(store.get_all_players().len(), 4);
        assert_eq!(store.get_all_matches().len(), 3);
        assert_eq!(store.get_all_predictions().len(), 3);
        assert_eq!(
            store.get_player_performance_predictions_by_match(1).len(),
            4
        );
    }

    #[test]
    fn test_seeded_references_resolve() {
        let store = Store::new();
        seed_sample_data(&store);

        for m in store.get_all_matches() {
            assert!(store.get_team(m.team1_id).is_some());
            assert!(store.get_team(m.team2_id).is_some());
            if let Some(stadium_id) = m.stadium_id {
                assert!(store.get_stadium(stadium_id).is_some());
            }
        }
        for p in store.get_all_predictions() {
            let m = store.get_match(p.match_id).unwrap();
            assert!(m.involves(p.predicted_winner_id));
        }
    }

    #[test]
    fn test_headline_prediction_matches_fixture() {
        let store = Store::new();
        seed_sample_data(&store);

        let csk = store.get_team_by_name("CSK").unwrap();
        let prediction = store.get_prediction_by_match(1).unwrap();
        assert_eq!(prediction.predicted_winner_id, csk.id);
        assert_eq!(prediction.win_probability, 0.62);
        let stats = prediction.detailed_stats.unwrap();
        assert_eq!(stats.powerplay.team1_score, 58);
        assert_eq!(stats.death.team2_wickets, 3);
    }
}
