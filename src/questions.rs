//! The fixed validation questionnaire.
//!
//! Five questions, defined once for the process lifetime. Each targets a
//! different axis of idea viability (market, revenue, competition, execution,
//! personal fit). The wizard walks them strictly in definition order.

use serde::Serialize;

/// Unique key for a validation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    MarketSize,
    PaymentWillingness,
    CompetitionGap,
    ExecutionFeasibility,
    PersonalAdvantage,
}

impl QuestionId {
    /// All question ids, in questionnaire order.
    pub const ALL: [QuestionId; 5] = [
        QuestionId::MarketSize,
        QuestionId::PaymentWillingness,
        QuestionId::CompetitionGap,
        QuestionId::ExecutionFeasibility,
        QuestionId::PersonalAdvantage,
    ];

    /// Stable string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarketSize => "market_size",
            Self::PaymentWillingness => "payment_willingness",
            Self::CompetitionGap => "competition_gap",
            Self::ExecutionFeasibility => "execution_feasibility",
            Self::PersonalAdvantage => "personal_advantage",
        }
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation question as shown to the user.
///
/// `prompt`, `placeholder`, and `category` are presentation pass-throughs;
/// the scoring rules key off [`Question::id`] alone.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    /// Unique symbolic key.
    pub id: QuestionId,
    /// Text shown to the user.
    pub prompt: &'static str,
    /// Example answer, shown as a hint.
    pub placeholder: &'static str,
    /// Display label grouping the question.
    pub category: &'static str,
}

static QUESTIONS: [Question; 5] = [
    Question {
        id: QuestionId::MarketSize,
        prompt: "How many people in your area have this exact problem daily?",
        placeholder: "e.g., 1000+ dog owners in my city struggle with...",
        category: "Market Demand",
    },
    Question {
        id: QuestionId::PaymentWillingness,
        prompt: "What do people currently pay to solve this problem?",
        placeholder: "e.g., $50/month for gym membership, $200 for consultant...",
        category: "Revenue Potential",
    },
    Question {
        id: QuestionId::CompetitionGap,
        prompt: "What's missing from existing solutions?",
        placeholder: "e.g., too expensive, poor customer service, outdated...",
        category: "Competitive Advantage",
    },
    Question {
        id: QuestionId::ExecutionFeasibility,
        prompt: "Can you create a basic version in 30 days with your current skills?",
        placeholder: "e.g., Yes - I can build a simple website and...",
        category: "Execution Risk",
    },
    Question {
        id: QuestionId::PersonalAdvantage,
        prompt: "What unique advantage do you have for this idea?",
        placeholder: "e.g., 10 years experience in this industry, network of...",
        category: "Personal Fit",
    },
];

/// The full questionnaire, in order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Look up a question by id.
pub fn question(id: QuestionId) -> &'static Question {
    // QUESTIONS covers every QuestionId variant.
    QUESTIONS
        .iter()
        .find(|q| q.id == id)
        .unwrap_or(&QUESTIONS[0])
}

/// Collected answers, keyed by question id.
///
/// Insertion order is preserved and matches questionnaire order when
/// populated by the wizard. Holds at most one entry per id.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    entries: Vec<(QuestionId, String)>,
}

impl Answers {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any existing entry for the same id.
    pub fn insert(&mut self, id: QuestionId, answer: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == id) {
            entry.1 = answer;
        } else {
            self.entries.push((id, answer));
        }
    }

    /// Get the stored answer for a question, if any.
    pub fn get(&self, id: QuestionId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == id)
            .map(|(_, v)| v.as_str())
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no questions have been answered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over answers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
