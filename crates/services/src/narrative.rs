use chrono::Utc;
use rand::Rng;

use pitchside_models::{
    NewPlayerPerformancePrediction, NewPrediction, PitchType, Player, PlayerRole, Stadium, Team,
};

use crate::chat::respond_to_message;

/// What the caller wants explained. The tag decides which template set is
/// used; there is no structural sniffing of the payload.
pub enum ExplanationContext<'a> {
    Match {
        prediction: &'a NewPrediction,
        team1: &'a Team,
        team2: &'a Team,
        stadium: Option<&'a Stadium>,
    },
    Player {
        prediction: &'a NewPlayerPerformancePrediction,
        player: &'a Player,
    },
    Chat {
        message: &'a str,
    },
}

/// Turns a prediction (or a chat message) into explanatory prose. The
/// supporting "facts" in the match template are rolled at explanation time
/// and are not reconciled with the prediction's own numbers.
pub fn explain(context: ExplanationContext<'_>, rng: &mut impl Rng) -> String {
    match context {
        ExplanationContext::Match {
            prediction,
            team1,
            team2,
            stadium,
        } => match_explanation(prediction, team1, team2, stadium, rng),
        ExplanationContext::Player { prediction, player } => {
            player_explanation(prediction, player, rng)
        }
        ExplanationContext::Chat { message } => respond_to_message(message),
    }
}

fn match_explanation(
    prediction: &NewPrediction,
    team1: &Team,
    team2: &Team,
    stadium: Option<&Stadium>,
    rng: &mut impl Rng,
) -> String {
    let (winner, loser) = if prediction.predicted_winner_id == team1.id {
        (team1, team2)
    } else {
        (team2, team1)
    };
    let win_prob = (prediction.win_probability * 100.0).round() as i32;

    let home_advantage = match stadium {
        Some(s) if winner.home_venue.as_deref() == Some(s.name.as_str()) => format!(
            "{} has won {}% of their matches at {} in the last 3 seasons, compared to {}'s away win rate of {}%.",
            winner.name,
            60 + rng.gen_range(0..15),
            s.name,
            loser.name,
            35 + rng.gen_range(0..15),
        ),
        _ => String::new(),
    };

    let h2h_wins = 10 + rng.gen_range(0..10);
    let venue_clause = match stadium {
        Some(s) => format!(
            "in {} {} leads {}-{}",
            s.city,
            winner.short_name,
            6 + rng.gen_range(0..5),
            2 + rng.gen_range(0..3),
        ),
        None => format!("the recent form favors {}", winner.short_name),
    };
    let head_to_head = format!(
        "While historically balanced ({} {} - {} {}), {}.",
        loser.short_name,
        h2h_wins,
        winner.short_name,
        20 - h2h_wins,
        venue_clause,
    );

    let pitch_conditions = match stadium {
        Some(s) => match s.pitch_type {
            Some(PitchType::SpinFriendly) => format!(
                "The slower {} pitch favors {}'s spin-heavy bowling attack. {}'s pace-heavy attack may struggle.",
                s.city, winner.short_name, loser.short_name,
            ),
            Some(PitchType::BattingFriendly) => format!(
                "The batting-friendly conditions at {} tend to produce high-scoring games, which suits {}'s strong batting lineup.",
                s.city, winner.short_name,
            ),
            _ => format!(
                "The pitch conditions at {} are expected to be balanced, but {}'s adaptability gives them a slight edge.",
                s.city, winner.short_name,
            ),
        },
        None => String::new(),
    };

    format!(
        "After analyzing the historical performances of both teams, our model predicts a {} victory with {}% confidence. Here's why:\n\n\
         1. Home advantage: {}\n\n\
         2. Current form: {} players have better individual form metrics in the last 3 matches, particularly in batting (avg. team SR: {} vs {}).\n\n\
         3. Head-to-head record: {}\n\n\
         4. Pitch conditions: {}\n\n\
         Note: This prediction accounts for all available data as of {}, including player availability and recent form.",
        winner.name,
        win_prob,
        home_advantage,
        winner.name,
        140 + rng.gen_range(0..20),
        130 + rng.gen_range(0..15),
        head_to_head,
        pitch_conditions,
        Utc::now().format("%Y-%m-%d"),
    )
}

fn player_explanation(
    prediction: &NewPlayerPerformancePrediction,
    player: &Player,
    rng: &mut impl Rng,
) -> String {
    let mut explanation = String::new();

    if prediction.predicted_runs_scored.is_some() {
        let batting_context = if player.name == "MS Dhoni" {
            "MS Dhoni has been in excellent form in the death overs, with a strike rate of over 180 in the last 3 matches. His experience and ability to finish games make him a key player for CSK.".to_string()
        } else if player.name == "Rohit Sharma" {
            "Rohit Sharma has been consistent but not explosive in recent matches, with a strike rate around 125. As the captain, he typically plays the anchor role, which is reflected in our prediction.".to_string()
        } else if player.role == PlayerRole::Batsman {
            format!(
                "As a specialist batsman, {} is expected to contribute significantly to the team's total. Based on recent performances, we predict a steady innings with a strike rate around {}.",
                player.name,
                120 + rng.gen_range(0..30),
            )
        } else if player.role == PlayerRole::AllRounder {
            format!(
                "{}'s all-round abilities make them valuable in the middle order. We expect a quick-fire innings with a focus on rotating the strike and occasional boundaries.",
                player.name,
            )
        } else {
            format!(
                "{} typically bats lower in the order but can contribute valuable runs, especially in the death overs.",
                player.name,
            )
        };

        explanation.push_str(&batting_context);
    }

    if matches!(prediction.predicted_wickets, Some(w) if w > 0) {
        let bowling_context = if player.name == "Jasprit Bumrah" {
            "Jasprit Bumrah has been MI's best bowler, consistently taking wickets in all phases of the game. His yorkers and slower balls make him particularly effective in the death overs.".to_string()
        } else if player.name == "Ravindra Jadeja" {
            "Ravindra Jadeja's left-arm spin is expected to be effective, especially if the pitch offers any assistance. His accuracy and variations make him a constant threat throughout the innings.".to_string()
        } else if player.role == PlayerRole::Bowler {
            format!(
                "As a specialist bowler, {} is likely to complete their full quota of 4 overs. Based on their recent form and the expected pitch conditions, we predict a economical spell with regular wicket-taking opportunities.",
                player.name,
            )
        } else {
            format!(
                "{} provides a useful bowling option for the captain, particularly when matchups favor their bowling style.",
                player.name,
            )
        };

        if !explanation.is_empty() {
            explanation.push(' ');
        }
        explanation.push_str(&bowling_context);
    }

    let confidence = prediction
        .confidence
        .map_or(70, |c| (c * 100.0).round() as i32);
    explanation.push_str(&format!(
        " Our model has {}% confidence in this prediction based on analysis of {}'s performance in similar conditions and against similar opposition.",
        confidence, player.name,
    ));

    explanation
}
