use rand::Rng;

use pitchside_models::{Match, NewPrediction, PhaseBreakdown, PhaseStats, Stadium, Team};

/// Franchises whose name earns a strength bonus in lieu of real ratings.
const STRONG_TEAMS: [&str; 3] = [
    "Mumbai Indians",
    "Chennai Super Kings",
    "Kolkata Knight Riders",
];
const MODERATE_TEAMS: [&str; 3] = [
    "Royal Challengers Bangalore",
    "Delhi Capitals",
    "Sunrisers Hyderabad",
];

/// No side is ever modeled as a certainty.
const MIN_WIN_PROB: f64 = 0.10;
const MAX_WIN_PROB: f64 = 0.90;

/// Swing applied when the venue is one side's home ground.
const HOME_ADVANTAGE: f64 = 0.10;

/// Fraction of a team's runs expected in each phase of the innings.
const PHASE_RUN_SPLIT: [f64; 3] = [0.30, 0.45, 0.25];
/// Wicket split for the predicted winner and loser respectively.
const WINNER_WICKET_SPLIT: [f64; 3] = [0.20, 0.50, 0.30];
const LOSER_WICKET_SPLIT: [f64; 3] = [0.30, 0.40, 0.30];

/// Produces an unsaved match forecast from the two sides and the venue.
/// Pure given the RNG; `reasoning` is left empty for the narrative layer.
/// Callers must have resolved both team references beforehand.
pub fn predict_match(
    m: &Match,
    team1: &Team,
    team2: &Team,
    stadium: Option<&Stadium>,
    rng: &mut impl Rng,
) -> NewPrediction {
    let team1_strength = team_strength(team1, rng);
    let team2_strength = team_strength(team2, rng);

    let home_advantage = match stadium {
        Some(s) if team1.home_venue.as_deref() == Some(s.name.as_str()) => HOME_ADVANTAGE,
        Some(s) if team2.home_venue.as_deref() == Some(s.name.as_str()) => -HOME_ADVANTAGE,
        _ => 0.0,
    };

    let team1_win_prob = (team1_strength / (team1_strength + team2_strength) + home_advantage)
        .clamp(MIN_WIN_PROB, MAX_WIN_PROB);

    let team1_wins = team1_win_prob > 0.5;
    let predicted_winner_id = if team1_wins { team1.id } else { team2.id };
    let win_probability = if team1_wins {
        team1_win_prob
    } else {
        1.0 - team1_win_prob
    };

    let winning_score = rng.gen_range(160..200);
    let losing_score = winning_score - rng.gen_range(5..25);
    let winning_wickets = rng.gen_range(2..7);
    let losing_wickets = rng.gen_range(4..10);

    let confidence_noise = rng.gen_range(-0.1..0.1);
    let confidence =
        ((team1_win_prob - 0.5).abs() * 2.0 + 0.5 + confidence_noise).clamp(0.5, 0.9);

    let (team1_score, team1_wickets, team2_score, team2_wickets) = if team1_wins {
        (winning_score, winning_wickets, losing_score, losing_wickets)
    } else {
        (losing_score, losing_wickets, winning_score, winning_wickets)
    };

    let detailed_stats = phase_breakdown(
        team1_score,
        team1_wickets,
        team2_score,
        team2_wickets,
        team1_wins,
    );

    NewPrediction {
        match_id: m.id,
        predicted_winner_id,
        win_probability,
        team1_predicted_score: Some(team1_score),
        team1_predicted_wickets: Some(team1_wickets),
        team2_predicted_score: Some(team2_score),
        team2_predicted_wickets: Some(team2_wickets),
        reasoning: None,
        confidence,
        detailed_stats: Some(detailed_stats),
    }
}

/// Random base strength in [50, 80) plus a reputation bonus for the
/// historically strong franchises.
fn team_strength(team: &Team, rng: &mut impl Rng) -> f64 {
    let base = rng.gen_range(50.0..80.0);
    if STRONG_TEAMS.contains(&team.name.as_str()) {
        base + 10.0
    } else if MODERATE_TEAMS.contains(&team.name.as_str()) {
        base + 5.0
    } else {
        base
    }
}

/// Splits each side's predicted totals across powerplay, middle and death
/// overs. Every phase value is floored independently, so the three phases
/// may sum to slightly less than the team total.
fn phase_breakdown(
    team1_score: i32,
    team1_wickets: i32,
    team2_score: i32,
    team2_wickets: i32,
    team1_wins: bool,
) -> PhaseBreakdown {
    let (team1_wicket_split, team2_wicket_split) = if team1_wins {
        (WINNER_WICKET_SPLIT, LOSER_WICKET_SPLIT)
    } else {
        (LOSER_WICKET_SPLIT, WINNER_WICKET_SPLIT)
    };

    let phase = |i: usize| PhaseStats {
        team1_score: (f64::from(team1_score) * PHASE_RUN_SPLIT[i]).floor() as i32,
        team1_wickets: (f64::from(team1_wickets) * team1_wicket_split[i]).floor() as i32,
        team2_score: (f64::from(team2_score) * PHASE_RUN_SPLIT[i]).floor() as i32,
        team2_wickets: (f64::from(team2_wickets) * team2_wicket_split[i]).floor() as i32,
    };

    PhaseBreakdown {
        powerplay: phase(0),
        middle: phase(1),
        death: phase(2),
    }
}
