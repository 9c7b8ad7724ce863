/// Answers a free-text dashboard question by case-insensitive keyword
/// matching against a fixed, ordered list of intents; the first matching
/// rule wins. Unknown questions fall back to an echo-style nudge that
/// quotes the start of the message.
pub fn respond_to_message(message: &str) -> String {
    let message = message.to_lowercase();

    if contains_any(&message, &["who will win", "match prediction", "predict winner"]) {
        return "Based on our analysis of recent form, head-to-head records, and pitch conditions, CSK has a 62% chance of winning today's match against MI. Their strong home record at Chennai and current team form gives them an advantage.".to_string();
    }

    if contains_any(&message, &["top scorer", "most runs"]) {
        return "Based on our ML model, MS Dhoni is predicted to be the top scorer for CSK with approximately 42 runs off 23 balls. For MI, Rohit Sharma is predicted to score 38 runs. This prediction is based on recent form, match-up analysis against the opposition bowlers, and historical performance at this venue.".to_string();
    }

    if contains_any(&message, &["win probability", "chances of winning"]) {
        return "CSK's 62% win probability is driven by several key factors: home advantage at Chennai Stadium (68% win rate), superior team form based on recent matches, better head-to-head record at this venue, team composition better suited to pitch conditions, and key MI players showing inconsistent recent form.".to_string();
    }

    if contains_any(&message, &["bowling", "wickets", "bowler"]) {
        return "Jasprit Bumrah is predicted to be the most effective bowler in today's match with figures of 3-28 in 4 overs. His ability to bowl yorkers in the death overs and his recent form (7 wickets in last 3 matches) make him MI's biggest bowling threat.".to_string();
    }

    if contains_any(&message, &["pitch", "conditions", "stadium"]) {
        return "The Chennai pitch is expected to be slightly on the slower side, favoring spin bowlers. Teams batting first have won 60% of matches here this season. The average first innings score is around 175, and the team winning the toss is likely to bat first.".to_string();
    }

    if contains_any(&message, &["hello", "hi", "hey"]) {
        return "Hello! I'm your IPL Cricket Analyst. Ask me anything about match predictions, player stats, or team analysis. I can provide insights based on our ML models and historical data.".to_string();
    }

    let preview: String = message.chars().take(30).collect();
    format!(
        "I'm analyzing the data for your question about {preview}... Based on our models, I can tell you that team performance depends on many factors including player form, match conditions, and historical data. Could you ask a more specific question about match predictions, player performance, or team analysis?"
    )
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| message.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_prediction_intent() {
        let reply = respond_to_message("Who will win today?");
        assert!(reply.contains("CSK has a 62% chance of winning today's match against MI"));
    }

    #[test]
    fn test_top_scorer_intent() {
        let reply = respond_to_message("who is the TOP SCORER likely to be");
        assert!(reply.contains("MS Dhoni is predicted to be the top scorer"));
    }

    #[test]
    fn test_win_probability_intent() {
        let reply = respond_to_message("explain the win probability please");
        assert!(reply.contains("62% win probability is driven by"));
    }

    #[test]
    fn test_bowling_intent() {
        let reply = respond_to_message("who takes the most wickets?");
        assert!(reply.contains("Jasprit Bumrah"));
    }

    #[test]
    fn test_pitch_intent() {
        let reply = respond_to_message("how does the pitch play");
        assert!(reply.contains("Chennai pitch"));
    }

    #[test]
    fn test_greeting_intent() {
        let reply = respond_to_message("hello");
        assert!(reply.starts_with("Hello! I'm your IPL Cricket Analyst."));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Matches both the win-prediction and bowling keyword lists; the
        // earlier intent answers.
        let reply = respond_to_message("who will win, and who is the best bowler?");
        assert!(reply.contains("62% chance of winning"));
        assert!(!reply.contains("Jasprit Bumrah"));
    }

    #[test]
    fn test_substring_matching_is_loose() {
        // "think" contains "hi"; loose substring matching means this lands
        // on the greeting intent, matching the original behavior.
        let reply = respond_to_message("what do you think about the auction");
        assert!(reply.starts_with("Hello! I'm your IPL Cricket Analyst."));
    }

    #[test]
    fn test_fallback_echoes_truncated_message() {
        let long_question = "compare the two squads for me over recent seasons";
        let reply = respond_to_message(long_question);
        assert!(reply
            .starts_with("I'm analyzing the data for your question about compare the two squads for me"));
        assert!(reply.contains("Could you ask a more specific question"));
    }
}
