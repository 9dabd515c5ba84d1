//! Heuristic idea scoring.
//!
//! Five independent per-question rules, additive, order-independent. The
//! thresholds and point values are product heuristics and are preserved
//! exactly; do not reweight them. Maximum attainable score is 100.

use crate::questions::{Answers, QuestionId};

/// Highest score the rules can award (all five rules satisfied).
pub const MAX_SCORE: u8 = 100;

/// Compute the validation score for a set of answers.
///
/// Each question contributes its points when its rule matches the stored
/// answer, and 0 when the rule fails or the question is unanswered. Rules do
/// not interact.
pub fn compute(answers: &Answers) -> u8 {
    QuestionId::ALL
        .iter()
        .map(|id| points_for(*id, answers.get(*id)))
        .sum()
}

/// Points a single answer earns for its question.
pub fn points_for(id: QuestionId, answer: Option<&str>) -> u8 {
    let Some(answer) = answer else {
        return 0;
    };
    let awarded = match id {
        QuestionId::MarketSize => answer.trim().chars().count() > 20,
        QuestionId::PaymentWillingness => answer.contains('$'),
        QuestionId::CompetitionGap => answer.trim().chars().count() > 15,
        QuestionId::ExecutionFeasibility => answer.to_lowercase().contains("yes"),
        QuestionId::PersonalAdvantage => answer.trim().chars().count() > 20,
    };
    if awarded {
        max_points(id)
    } else {
        0
    }
}

/// Maximum points a question can contribute.
pub fn max_points(id: QuestionId) -> u8 {
    match id {
        QuestionId::MarketSize => 20,
        QuestionId::PaymentWillingness => 25,
        QuestionId::CompetitionGap => 20,
        QuestionId::ExecutionFeasibility => 20,
        QuestionId::PersonalAdvantage => 15,
    }
}

/// Qualitative band a score falls in.
///
/// Bands are disjoint with inclusive lower bounds at 80 and 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Score >= 80.
    Strong,
    /// 60 <= score < 80.
    Moderate,
    /// Score < 60.
    Weak,
}

impl ScoreBand {
    /// Classify a score.
    pub fn of(score: u8) -> Self {
        if score >= 80 {
            Self::Strong
        } else if score >= 60 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// Stable band name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canned verdict for a score. Same thresholds as [`ScoreBand`].
pub fn score_message(score: u8) -> &'static str {
    match ScoreBand::of(score) {
        ScoreBand::Strong => "🚀 High Potential! This idea shows strong validation signals.",
        ScoreBand::Moderate => "⚡ Moderate Potential. Address the gaps to improve viability.",
        ScoreBand::Weak => "⚠️ Needs Work. Consider pivoting or strengthening weak areas.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_marks() -> Answers {
        let mut answers = Answers::new();
        answers.insert(QuestionId::MarketSize, "a".repeat(21));
        answers.insert(QuestionId::PaymentWillingness, "$5".into());
        answers.insert(QuestionId::CompetitionGap, "b".repeat(16));
        answers.insert(QuestionId::ExecutionFeasibility, "Yes please".into());
        answers.insert(QuestionId::PersonalAdvantage, "c".repeat(21));
        answers
    }

    #[test]
    fn all_rules_satisfied_scores_max() {
        assert_eq!(compute(&full_marks()), MAX_SCORE);
    }

    #[test]
    fn empty_answers_score_zero() {
        assert_eq!(compute(&Answers::new()), 0);
    }

    #[test]
    fn per_question_maxima_sum_to_max_score() {
        let total: u8 = QuestionId::ALL.iter().map(|id| max_points(*id)).sum();
        assert_eq!(total, MAX_SCORE);
    }

    #[test]
    fn market_size_requires_more_than_20_chars() {
        assert_eq!(points_for(QuestionId::MarketSize, Some(&"a".repeat(20))), 0);
        assert_eq!(
            points_for(QuestionId::MarketSize, Some(&"a".repeat(21))),
            20
        );
    }

    #[test]
    fn market_size_length_is_measured_after_trimming() {
        let padded = format!("   {}   ", "a".repeat(20));
        assert_eq!(points_for(QuestionId::MarketSize, Some(&padded)), 0);
    }

    #[test]
    fn payment_willingness_requires_dollar_sign() {
        assert_eq!(
            points_for(QuestionId::PaymentWillingness, Some("no dollar sign here")),
            0
        );
        assert_eq!(
            points_for(QuestionId::PaymentWillingness, Some("$50/month")),
            25
        );
    }

    #[test]
    fn competition_gap_requires_more_than_15_chars() {
        assert_eq!(
            points_for(QuestionId::CompetitionGap, Some("short answer")),
            0
        );
        assert_eq!(
            points_for(QuestionId::CompetitionGap, Some(&"b".repeat(16))),
            20
        );
    }

    #[test]
    fn execution_feasibility_matches_yes_case_insensitively() {
        assert_eq!(
            points_for(QuestionId::ExecutionFeasibility, Some("YES, absolutely")),
            20
        );
        assert_eq!(
            points_for(QuestionId::ExecutionFeasibility, Some("probably not")),
            0
        );
    }

    #[test]
    fn personal_advantage_awards_15_points() {
        assert_eq!(
            points_for(QuestionId::PersonalAdvantage, Some(&"c".repeat(21))),
            15
        );
    }

    #[test]
    fn missing_answer_earns_zero() {
        for id in QuestionId::ALL {
            assert_eq!(points_for(id, None), 0);
        }
    }

    #[test]
    fn single_failing_answer_scores_zero() {
        let mut answers = Answers::new();
        answers.insert(QuestionId::PaymentWillingness, "no dollar sign here".into());
        assert_eq!(compute(&answers), 0);
    }

    #[test]
    fn rules_are_independent() {
        let mut answers = full_marks();
        answers.insert(QuestionId::PaymentWillingness, "nothing".into());
        assert_eq!(compute(&answers), 75);
    }

    #[test]
    fn band_thresholds_are_inclusive() {
        assert_eq!(ScoreBand::of(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(79), ScoreBand::Moderate);
        assert_eq!(ScoreBand::of(60), ScoreBand::Moderate);
        assert_eq!(ScoreBand::of(59), ScoreBand::Weak);
        assert_eq!(ScoreBand::of(0), ScoreBand::Weak);
    }

    #[test]
    fn band_names_are_stable() {
        assert_eq!(ScoreBand::Strong.as_str(), "strong");
        assert_eq!(ScoreBand::Moderate.to_string(), "moderate");
        assert_eq!(ScoreBand::Weak.as_str(), "weak");
    }

    #[test]
    fn message_bands_follow_the_same_thresholds() {
        assert!(score_message(85).contains("High Potential"));
        assert!(score_message(60).contains("Moderate Potential"));
        assert!(score_message(40).contains("Needs Work"));
    }
}
