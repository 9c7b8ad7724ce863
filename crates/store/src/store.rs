use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use pitchside_models::{
    ChatMessage, Match, MatchUpdate, NewChatMessage, NewMatch, NewPlayer, NewPlayerPerformance,
    NewPlayerPerformancePrediction, NewPrediction, NewStadium, NewTeam, NewUser, Player,
    PlayerPerformance, PlayerPerformancePrediction, Prediction, PredictionUpdate, Stadium, Team,
    User,
};

/// One locked collection. The id counter lives inside the same lock as the
/// rows, so a create assigns the id, stamps the row and inserts it in a
/// single critical section; concurrent creates can never hand out the same
/// id. Rows iterate in id order, which equals insertion order.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| pred(row)).cloned()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| pred(row)).cloned().collect()
    }
}

fn cap<T>(rows: Vec<T>, limit: Option<usize>) -> Vec<T> {
    match limit {
        Some(n) => rows.into_iter().take(n).collect(),
        None => rows,
    }
}

/// Single source of truth for every entity. Constructed once at startup;
/// lives for the process lifetime. All access goes through these methods,
/// never through the raw maps.
pub struct Store {
    users: RwLock<Table<User>>,
    teams: RwLock<Table<Team>>,
    players: RwLock<Table<Player>>,
    stadiums: RwLock<Table<Stadium>>,
    matches: RwLock<Table<Match>>,
    predictions: RwLock<Table<Prediction>>,
    player_performances: RwLock<Table<PlayerPerformance>>,
    player_performance_predictions: RwLock<Table<PlayerPerformancePrediction>>,
    chat_messages: RwLock<Table<ChatMessage>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Table::new()),
            teams: RwLock::new(Table::new()),
            players: RwLock::new(Table::new()),
            stadiums: RwLock::new(Table::new()),
            matches: RwLock::new(Table::new()),
            predictions: RwLock::new(Table::new()),
            player_performances: RwLock::new(Table::new()),
            player_performance_predictions: RwLock::new(Table::new()),
            chat_messages: RwLock::new(Table::new()),
        }
    }

    // User operations

    pub fn create_user(&self, new: NewUser) -> User {
        self.users.write().insert_with(|id| User {
            id,
            username: new.username.clone(),
            password: new.password.clone(),
            email: new.email.clone(),
            role: new.role.clone(),
            created_at: Utc::now(),
        })
    }

    pub fn get_user(&self, id: i32) -> Option<User> {
        self.users.read().get(id)
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.read().find(|user| user.username == username)
    }

    // Team operations

    pub fn create_team(&self, new: NewTeam) -> Team {
        self.teams.write().insert_with(|id| Team {
            id,
            name: new.name.clone(),
            short_name: new.short_name.clone(),
            logo_url: new.logo_url.clone(),
            home_venue: new.home_venue.clone(),
            created_at: Utc::now(),
        })
    }

    pub fn get_team(&self, id: i32) -> Option<Team> {
        self.teams.read().get(id)
    }

    pub fn get_team_by_name(&self, name: &str) -> Option<Team> {
        self.teams.read().find(|team| team.is_named(name))
    }

    pub fn get_all_teams(&self) -> Vec<Team> {
        self.teams.read().all()
    }

    // Player operations

    pub fn create_player(&self, new: NewPlayer) -> Player {
        self.players.write().insert_with(|id| Player {
            id,
            name: new.name.clone(),
            team_id: new.team_id,
            role: new.role,
            batting_style: new.batting_style.clone(),
            bowling_style: new.bowling_style.clone(),
            image_url: new.image_url.clone(),
            country: new.country.clone(),
            is_captain: new.is_captain,
            created_at: Utc::now(),
        })
    }

    pub fn get_player(&self, id: i32) -> Option<Player> {
        self.players.read().get(id)
    }

    pub fn get_all_players(&self) -> Vec<Player> {
        self.players.read().all()
    }

    pub fn get_players_by_team(&self, team_id: i32) -> Vec<Player> {
        self.players
            .read()
            .filter(|player| player.team_id == Some(team_id))
    }

    // Stadium operations

    pub fn create_stadium(&self, new: NewStadium) -> Stadium {
        self.stadiums.write().insert_with(|id| Stadium {
            id,
            name: new.name.clone(),
            city: new.city.clone(),
            country: new.country.clone(),
            pitch_type: new.pitch_type,
            created_at: Utc::now(),
        })
    }

    pub fn get_stadium(&self, id: i32) -> Option<Stadium> {
        self.stadiums.read().get(id)
    }

    pub fn get_all_stadiums(&self) -> Vec<Stadium> {
        self.stadiums.read().all()
    }

    // Match operations

    pub fn create_match(&self, new: NewMatch) -> Match {
        self.matches.write().insert_with(|id| Match {
            id,
            team1_id: new.team1_id,
            team2_id: new.team2_id,
            stadium_id: new.stadium_id,
            match_date: new.match_date,
            match_type: new.match_type.clone(),
            season: new.season,
            is_completed: new.is_completed,
            toss_winner_id: None,
            toss_decision: None,
            winner_id: None,
            win_margin: None,
            win_margin_type: None,
            team1_score: None,
            team1_wickets: None,
            team1_overs: None,
            team2_score: None,
            team2_wickets: None,
            team2_overs: None,
            created_at: Utc::now(),
        })
    }

    pub fn get_match(&self, id: i32) -> Option<Match> {
        self.matches.read().get(id)
    }

    pub fn get_all_matches(&self) -> Vec<Match> {
        self.matches.read().all()
    }

    /// Matches that are not completed and start at or after `now`, soonest
    /// first. A match dated exactly `now` counts as upcoming.
    pub fn get_upcoming_matches_since(
        &self,
        now: DateTime<Utc>,
        limit: Option<usize>,
    ) -> Vec<Match> {
        let mut upcoming = self
            .matches
            .read()
            .filter(|m| !m.is_completed && m.match_date >= now);
        upcoming.sort_by_key(|m| m.match_date);
        cap(upcoming, limit)
    }

    pub fn get_upcoming_matches(&self, limit: Option<usize>) -> Vec<Match> {
        self.get_upcoming_matches_since(Utc::now(), limit)
    }

    /// Completed matches, most recent first.
    pub fn get_completed_matches(&self, limit: Option<usize>) -> Vec<Match> {
        let mut completed = self.matches.read().filter(|m| m.is_completed);
        completed.sort_by_key(|m| std::cmp::Reverse(m.match_date));
        cap(completed, limit)
    }

    pub fn update_match(&self, id: i32, update: MatchUpdate) -> Option<Match> {
        let mut table = self.matches.write();
        let existing = table.rows.get_mut(&id)?;
        if let Some(is_completed) = update.is_completed {
            existing.is_completed = is_completed;
        }
        if let Some(toss_winner_id) = update.toss_winner_id {
            existing.toss_winner_id = Some(toss_winner_id);
        }
        if let Some(toss_decision) = update.toss_decision {
            existing.toss_decision = Some(toss_decision);
        }
        if let Some(winner_id) = update.winner_id {
            existing.winner_id = Some(winner_id);
        }
        if let Some(win_margin) = update.win_margin {
            existing.win_margin = Some(win_margin);
        }
        if let Some(win_margin_type) = update.win_margin_type {
            existing.win_margin_type = Some(win_margin_type);
        }
        if let Some(score) = update.team1_score {
            existing.team1_score = Some(score);
        }
        if let Some(wickets) = update.team1_wickets {
            existing.team1_wickets = Some(wickets);
        }
        if let Some(overs) = update.team1_overs {
            existing.team1_overs = Some(overs);
        }
        if let Some(score) = update.team2_score {
            existing.team2_score = Some(score);
        }
        if let Some(wickets) = update.team2_wickets {
            existing.team2_wickets = Some(wickets);
        }
        if let Some(overs) = update.team2_overs {
            existing.team2_overs = Some(overs);
        }
        Some(existing.clone())
    }

    // Prediction operations

    pub fn create_prediction(&self, new: NewPrediction) -> Prediction {
        self.predictions
            .write()
            .insert_with(|id| Self::build_prediction(id, &new))
    }

    /// Atomic insert-if-absent keyed by match id. The existence check and
    /// the insert happen under one write lock, so two racing generate calls
    /// for the same match cannot both insert; the loser gets the winner's
    /// row back. Returns the stored prediction and whether it was freshly
    /// created.
    pub fn create_prediction_if_absent(&self, new: NewPrediction) -> (Prediction, bool) {
        let mut table = self.predictions.write();
        if let Some(existing) = table.find(|p| p.match_id == new.match_id) {
            tracing::debug!(
                match_id = new.match_id,
                prediction_id = existing.id,
                "prediction already exists, returning stored row"
            );
            return (existing, false);
        }
        let row = table.insert_with(|id| Self::build_prediction(id, &new));
        (row, true)
    }

    fn build_prediction(id: i32, new: &NewPrediction) -> Prediction {
        Prediction {
            id,
            match_id: new.match_id,
            predicted_winner_id: new.predicted_winner_id,
            win_probability: new.win_probability,
            team1_predicted_score: new.team1_predicted_score,
            team1_predicted_wickets: new.team1_predicted_wickets,
            team2_predicted_score: new.team2_predicted_score,
            team2_predicted_wickets: new.team2_predicted_wickets,
            reasoning: new.reasoning.clone(),
            confidence: new.confidence,
            is_correct: None,
            prediction_date: Utc::now(),
            detailed_stats: new.detailed_stats,
        }
    }

    pub fn get_prediction(&self, id: i32) -> Option<Prediction> {
        self.predictions.read().get(id)
    }

    pub fn get_all_predictions(&self) -> Vec<Prediction> {
        self.predictions.read().all()
    }

    pub fn get_prediction_by_match(&self, match_id: i32) -> Option<Prediction> {
        self.predictions.read().find(|p| p.match_id == match_id)
    }

    pub fn update_prediction(&self, id: i32, update: PredictionUpdate) -> Option<Prediction> {
        let mut table = self.predictions.write();
        let existing = table.rows.get_mut(&id)?;
        if let Some(reasoning) = update.reasoning {
            existing.reasoning = Some(reasoning);
        }
        if let Some(is_correct) = update.is_correct {
            existing.is_correct = Some(is_correct);
        }
        Some(existing.clone())
    }

    // Player performance operations

    pub fn create_player_performance(&self, new: NewPlayerPerformance) -> PlayerPerformance {
        self.player_performances
            .write()
            .insert_with(|id| PlayerPerformance {
                id,
                match_id: new.match_id,
                player_id: new.player_id,
                runs_scored: new.runs_scored,
                balls_faced: new.balls_faced,
                fours: new.fours,
                sixes: new.sixes,
                overs: new.overs,
                runs_conceded: new.runs_conceded,
                wickets: new.wickets,
                maidens: new.maidens,
                catches: new.catches,
                stumpings: new.stumpings,
                run_outs: new.run_outs,
                created_at: Utc::now(),
            })
    }

    pub fn get_player_performance(&self, id: i32) -> Option<PlayerPerformance> {
        self.player_performances.read().get(id)
    }

    pub fn get_player_performances_by_match(&self, match_id: i32) -> Vec<PlayerPerformance> {
        self.player_performances
            .read()
            .filter(|p| p.match_id == match_id)
    }

    pub fn get_player_performances_by_player(&self, player_id: i32) -> Vec<PlayerPerformance> {
        self.player_performances
            .read()
            .filter(|p| p.player_id == player_id)
    }

    // Player performance prediction operations

    pub fn create_player_performance_prediction(
        &self,
        new: NewPlayerPerformancePrediction,
    ) -> PlayerPerformancePrediction {
        self.player_performance_predictions
            .write()
            .insert_with(|id| PlayerPerformancePrediction {
                id,
                match_id: new.match_id,
                player_id: new.player_id,
                predicted_runs_scored: new.predicted_runs_scored,
                predicted_balls_faced: new.predicted_balls_faced,
                predicted_fours: new.predicted_fours,
                predicted_sixes: new.predicted_sixes,
                predicted_overs: new.predicted_overs,
                predicted_runs_conceded: new.predicted_runs_conceded,
                predicted_wickets: new.predicted_wickets,
                predicted_maidens: new.predicted_maidens,
                prediction_date: Utc::now(),
                confidence: new.confidence,
                reasoning: new.reasoning.clone(),
            })
    }

    pub fn get_player_performance_prediction(&self, id: i32) -> Option<PlayerPerformancePrediction> {
        self.player_performance_predictions.read().get(id)
    }

    pub fn get_player_performance_predictions_by_match(
        &self,
        match_id: i32,
    ) -> Vec<PlayerPerformancePrediction> {
        self.player_performance_predictions
            .read()
            .filter(|p| p.match_id == match_id)
    }

    pub fn get_player_performance_predictions_by_player(
        &self,
        player_id: i32,
    ) -> Vec<PlayerPerformancePrediction> {
        self.player_performance_predictions
            .read()
            .filter(|p| p.player_id == player_id)
    }

    // Chat message operations

    pub fn create_chat_message(&self, new: NewChatMessage) -> ChatMessage {
        self.chat_messages.write().insert_with(|id| ChatMessage {
            id,
            user_id: new.user_id,
            message: new.message.clone(),
            is_user_message: new.is_user_message,
            response: new.response.clone(),
            created_at: Utc::now(),
        })
    }

    pub fn get_chat_messages_by_user(&self, user_id: i32) -> Vec<ChatMessage> {
        self.chat_messages
            .read()
            .filter(|m| m.user_id == Some(user_id))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
