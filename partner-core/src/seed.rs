//! Built-in sample data shown when nothing else is configured.

use chrono::NaiveDate;

use crate::event::{CalendarEvent, EventCategory};
use crate::memories::Memory;
use crate::quiz::{Quiz, QuizCategory, QuizQuestion};

fn june_2025(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::new("Weekly Check-in", june_2025(15), EventCategory::Reminder)
            .with_id("1")
            .with_time("10:00 AM")
            .with_description("Regular check-in to discuss goals and progress"),
        CalendarEvent::new("Movie Night Suggestion", june_2025(18), EventCategory::Activity)
            .with_id("2")
            .with_time("7:00 PM")
            .with_description("Watch the new sci-fi movie you've been excited about"),
        CalendarEvent::new("3 Month Anniversary", june_2025(20), EventCategory::Milestone)
            .with_id("3")
            .with_description("Celebrate 3 months of using PartnerGPT!"),
        CalendarEvent::new("Complete Journal Prompts", june_2025(12), EventCategory::Task)
            .with_id("4")
            .with_description("Finish reflecting on this week's journal prompts"),
        CalendarEvent::new("Virtual Coffee Chat", june_2025(16), EventCategory::Activity)
            .with_id("5")
            .with_time("3:30 PM")
            .with_description("Casual conversation about your recent trip"),
    ]
}

pub fn sample_memories() -> Vec<Memory> {
    vec![
        Memory {
            id: "1".into(),
            title: "Our First Conversation".into(),
            content: "Today I had my first meaningful conversation with PartnerGPT. We talked about my goals for the upcoming year and it gave me some great insights on how to approach them.".into(),
            date: june_2025(10),
            tags: strings(&["conversation", "goals", "reflection"]),
            image_url: Some("https://images.unsplash.com/photo-1517842645767-c639042777db?w=600&auto=format&fit=crop&q=60&ixlib=rb-4.0.3".into()),
            likes: 5,
            comments: 2,
            favorite: true,
        },
        Memory {
            id: "2".into(),
            title: "Morning Journaling Session".into(),
            content: "Started my day with a quick journaling session guided by PartnerGPT. It asked all the right questions to get me thinking about what I want to accomplish today.".into(),
            date: june_2025(12),
            tags: strings(&["journaling", "morning", "routine"]),
            image_url: None,
            likes: 3,
            comments: 1,
            favorite: false,
        },
        Memory {
            id: "3".into(),
            title: "Weekend Trip Planning".into(),
            content: "PartnerGPT helped me plan a surprise weekend getaway. It remembered all my partner's preferences and suggested some amazing restaurants and activities!".into(),
            date: june_2025(13),
            tags: strings(&["planning", "travel", "surprise"]),
            image_url: Some("https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?w=600&auto=format&fit=crop&q=60&ixlib=rb-4.0.3".into()),
            likes: 8,
            comments: 4,
            favorite: true,
        },
        Memory {
            id: "4".into(),
            title: "Book Recommendation Discussion".into(),
            content: "Had a deep conversation about the last book I read. PartnerGPT shared some fascinating perspectives I hadn't considered and recommended similar books I might enjoy.".into(),
            date: june_2025(14),
            tags: strings(&["books", "recommendations", "discussion"]),
            image_url: None,
            likes: 6,
            comments: 3,
            favorite: false,
        },
    ]
}

fn quiz(
    id: &str,
    title: &str,
    description: &str,
    category: QuizCategory,
    question_count: usize,
    time_estimate: &str,
) -> Quiz {
    Quiz {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category,
        question_count,
        time_estimate: time_estimate.into(),
        completed: false,
        featured: false,
    }
}

pub fn sample_quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            featured: true,
            ..quiz(
                "love-language",
                "Love Language Quiz",
                "Discover how you prefer to give and receive love with this insightful assessment.",
                QuizCategory::Relationship,
                15,
                "5 min",
            )
        },
        quiz(
            "personality-type",
            "Personality Type Indicator",
            "Learn about your personality traits and how they influence your relationships.",
            QuizCategory::Personality,
            20,
            "8 min",
        ),
        quiz(
            "relationship-strengths",
            "Relationship Strengths",
            "Identify the strongest aspects of your relationship and areas for growth.",
            QuizCategory::Relationship,
            12,
            "4 min",
        ),
        quiz(
            "emotional-intelligence",
            "Emotional Intelligence Assessment",
            "Measure your ability to recognize and manage emotions in yourself and others.",
            QuizCategory::Growth,
            18,
            "7 min",
        ),
        Quiz {
            completed: true,
            ..quiz(
                "movie-match",
                "Movie Taste Matcher",
                "Fun quiz to discover movies you might enjoy based on your preferences.",
                QuizCategory::Fun,
                10,
                "3 min",
            )
        },
        quiz(
            "communication-style",
            "Communication Style Analysis",
            "Understand how you communicate and how to connect better with others.",
            QuizCategory::Growth,
            15,
            "6 min",
        ),
    ]
}

/// Every quiz currently shares this question set.
pub fn sample_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: "q1".into(),
            question: "What makes you feel most appreciated?".into(),
            options: strings(&[
                "Receiving a thoughtful gift",
                "Spending quality time together",
                "Hearing words of affirmation",
                "Physical touch like hugs or hand-holding",
            ]),
        },
        QuizQuestion {
            id: "q2".into(),
            question: "When someone is upset, you typically:".into(),
            options: strings(&[
                "Give them space to process their feelings",
                "Offer practical solutions to their problem",
                "Listen attentively and validate their feelings",
                "Try to cheer them up with humor or activities",
            ]),
        },
        QuizQuestion {
            id: "q3".into(),
            question: "You feel most connected to others when:".into(),
            options: strings(&[
                "Having deep conversations about meaningful topics",
                "Engaging in shared activities or experiences",
                "Supporting each other through challenges",
                "Celebrating achievements together",
            ]),
        },
    ]
}
