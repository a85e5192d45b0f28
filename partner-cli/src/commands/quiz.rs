use anyhow::{Result, bail};
use dialoguer::Select;
use owo_colors::OwoColorize;
use partner_core::quiz::{QuizCategory, QuizSession, by_category, featured};
use partner_core::seed::{sample_questions, sample_quizzes};

use crate::render::Render;

pub fn run(id: Option<&str>, category: Option<&str>) -> Result<()> {
    let quizzes = sample_quizzes();

    let Some(id) = id else {
        let category = category.map(str::parse::<QuizCategory>).transpose()?;
        if let (None, Some(quiz)) = (category, featured(&quizzes)) {
            println!("{} {}", "Featured:".yellow().bold(), quiz.title.bold());
            println!();
        }
        for quiz in by_category(category, &quizzes) {
            println!("{}", quiz.render());
            println!();
        }
        return Ok(());
    };

    let Some(quiz) = quizzes.iter().find(|q| q.id == id) else {
        let available: Vec<_> = quizzes.iter().map(|q| q.id.as_str()).collect();
        bail!("Quiz '{}' not found. Available: {}", id, available.join(", "));
    };

    let mut session = QuizSession::start(quiz, sample_questions())?;
    println!("{}", quiz.title.bold());

    loop {
        let question = session.current().clone();
        let prompt = format!(
            "  Question {} of {}: {}",
            session.current_index() + 1,
            session.len(),
            question.question
        );

        let mut items = question.options.clone();
        if session.current_index() > 0 {
            items.push("← Back".to_string());
        }

        let choice = Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(session.current_answer().unwrap_or(0))
            .interact()?;

        if choice >= question.options.len() {
            session.back();
            continue;
        }

        let was_last = session.is_last();
        session.answer(choice)?;
        if was_last {
            break;
        }
    }

    let answers = session.finish()?;
    println!();
    println!("{}", "Quiz complete!".green().bold());
    for question in sample_questions() {
        if let Some(choice) = answers.get(&question.id) {
            println!("  {}", question.question.dimmed());
            println!("    {}", question.options[*choice]);
        }
    }

    Ok(())
}
