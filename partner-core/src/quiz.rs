//! Quiz catalogue and a step-through session over a fixed question list.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{PartnerError, PartnerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizCategory {
    Personality,
    Relationship,
    Fun,
    Growth,
}

impl QuizCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizCategory::Personality => "personality",
            QuizCategory::Relationship => "relationship",
            QuizCategory::Fun => "fun",
            QuizCategory::Growth => "growth",
        }
    }
}

impl fmt::Display for QuizCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuizCategory {
    type Err = PartnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personality" => Ok(QuizCategory::Personality),
            "relationship" => Ok(QuizCategory::Relationship),
            "fun" => Ok(QuizCategory::Fun),
            "growth" => Ok(QuizCategory::Growth),
            other => Err(PartnerError::Parse(format!("Unknown quiz category '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: QuizCategory,
    pub question_count: usize,
    pub time_estimate: String,
    pub completed: bool,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
}

/// Quizzes in `category`, or all of them when `None`.
pub fn by_category(category: Option<QuizCategory>, quizzes: &[Quiz]) -> Vec<&Quiz> {
    quizzes
        .iter()
        .filter(|q| category.is_none_or(|c| q.category == c))
        .collect()
}

pub fn featured(quizzes: &[Quiz]) -> Option<&Quiz> {
    quizzes.iter().find(|q| q.featured)
}

/// One run through a quiz. Answering moves forward until the last question,
/// which stays current so its answer can still be changed.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz_id: String,
    questions: Vec<QuizQuestion>,
    current: usize,
    answers: BTreeMap<String, usize>,
}

impl QuizSession {
    pub fn start(quiz: &Quiz, questions: Vec<QuizQuestion>) -> PartnerResult<Self> {
        if questions.is_empty() {
            return Err(PartnerError::Quiz(format!("Quiz '{}' has no questions", quiz.id)));
        }
        tracing::debug!(quiz = %quiz.id, questions = questions.len(), "starting quiz");
        Ok(QuizSession {
            quiz_id: quiz.id.clone(),
            questions,
            current: 0,
            answers: BTreeMap::new(),
        })
    }

    pub fn quiz_id(&self) -> &str {
        &self.quiz_id
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Selected option for the current question, if any.
    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(&self.current().id).copied()
    }

    pub fn answer(&mut self, option: usize) -> PartnerResult<()> {
        let question = self.current();
        if option >= question.options.len() {
            return Err(PartnerError::Quiz(format!(
                "Option {} out of range for question '{}' ({} options)",
                option,
                question.id,
                question.options.len()
            )));
        }

        self.answers.insert(question.id.clone(), option);
        if !self.is_last() {
            self.current += 1;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Fraction of the way through, counting the current question.
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.questions.len() as f64
    }

    pub fn is_complete(&self) -> bool {
        self.questions.iter().all(|q| self.answers.contains_key(&q.id))
    }

    /// Answers keyed by question id. Fails if any question is unanswered.
    pub fn finish(self) -> PartnerResult<BTreeMap<String, usize>> {
        if let Some(missing) = self.questions.iter().find(|q| !self.answers.contains_key(&q.id)) {
            return Err(PartnerError::Quiz(format!(
                "Question '{}' has not been answered",
                missing.id
            )));
        }
        tracing::debug!(quiz = %self.quiz_id, "quiz completed");
        Ok(self.answers)
    }
}
