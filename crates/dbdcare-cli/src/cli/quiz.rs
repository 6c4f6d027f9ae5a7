use crate::cli::Context;
use crate::cli::opt;
use anyhow::Result;
use dbdcare_core::quiz::{QuizAttempt, QuizPolicy, State, default_questions};
use dbdcare_model::activity::{Action, NewActivity};
use dbdcare_model::quiz::{QuizQuestion, QuizSubmission};
use std::error::Error;

const HELP: &str = "Ketik nomor jawaban, n (berikutnya), p (sebelumnya), s (selesai) atau q (keluar)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// 0-based option index
    Select(usize),
    Next,
    Previous,
    Finish,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_lowercase().as_str() {
        "n" => Some(Input::Next),
        "p" => Some(Input::Previous),
        "s" => Some(Input::Finish),
        "q" => Some(Input::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .map(Input::Select),
    }
}

async fn load_questions(context: &Context) -> Vec<QuizQuestion> {
    match context.client.quiz().await {
        Ok(quiz) if !quiz.questions.is_empty() => quiz.questions,
        Ok(_) => default_questions(),
        Err(error) => {
            tracing::warn!(error = &error as &dyn Error, "failed to fetch quiz, using the built-in questions");
            default_questions()
        }
    }
}

async fn log_start(context: &Context) {
    if context.session.is_none() {
        return;
    }
    let activity = NewActivity {
        action: Action::QuizStart,
        target: "quiz".to_owned(),
        target_id: None,
        metadata: None,
    };
    if let Err(error) = context.client.log_activity(&activity).await {
        tracing::warn!(error = &error as &dyn Error, "failed to log quiz start");
    }
}

/// Stores a finished attempt. Failures never hide the result from the user.
async fn submit(context: &Context, attempt: &mut QuizAttempt) {
    if context.session.is_none() {
        println!("Belum masuk, hasil tidak disimpan.");
        return;
    }
    let submission = QuizSubmission {
        answers: attempt.selected_answers().to_vec(),
    };
    match context.client.submit_quiz(&submission).await {
        Ok(result) => {
            if let Some(id) = result.response_id {
                attempt.set_response_id(id);
            }
        }
        Err(error) => tracing::warn!(error = &error as &dyn Error, "failed to submit quiz response"),
    }
}

fn print_question(attempt: &QuizAttempt) {
    let question = attempt.current_question();
    println!();
    println!(
        "Pertanyaan {}/{}: {}",
        attempt.current_index() + 1,
        attempt.questions().len(),
        question.question
    );
    for (index, option) in question.options.iter().enumerate() {
        let mark = if attempt.selected_answer() == Some(index) { "*" } else { " " };
        println!(" {mark} {}) {option}", index + 1);
    }
}

fn print_result(attempt: &QuizAttempt) {
    let Some(result) = attempt.result() else {
        return;
    };
    println!();
    println!("{}", result.feedback.text);
    println!("Skor {}/{} ({:.0}%)", result.score, result.total, result.percentage);
    if let Some(badge) = &result.feedback.badge {
        println!("Lencana: {badge}");
    }
    for (index, (question, answer)) in attempt.questions().iter().zip(attempt.selected_answers()).enumerate() {
        let verdict = if *answer == question.correct_answer { "benar" } else { "salah" };
        println!("{}. {} ({verdict})", index + 1, question.question);
        if !question.explanation.is_empty() {
            println!("   {}", question.explanation);
        }
    }
}

pub(crate) async fn run(mut context: Context, opt: opt::Quiz) -> Result<()> {
    let questions = load_questions(&context).await;
    let policy = QuizPolicy {
        require_all_answered: opt.require_all,
    };
    let mut attempt = QuizAttempt::new(questions, policy)?;

    loop {
        match attempt.state() {
            State::Intro => {
                println!("Kuis DBD, {} pertanyaan.", attempt.questions().len());
                if !context.prompter.confirm("Mulai kuis?")? {
                    return Ok(());
                }
                attempt.start()?;
                log_start(&context).await;
                println!("{HELP}");
            }
            State::Quiz => {
                print_question(&attempt);
                let Some(line) = context.prompter.ask("Jawaban ")? else {
                    return Ok(());
                };
                match parse_input(&line) {
                    Some(Input::Select(answer)) => {
                        if let Err(error) = attempt.select(answer) {
                            println!("{error}");
                        } else if !attempt.is_last() {
                            attempt.next()?;
                        }
                    }
                    Some(Input::Next) => match attempt.next() {
                        Ok(true) => {}
                        Ok(false) => println!("Ini pertanyaan terakhir, ketik s untuk selesai."),
                        Err(error) => println!("{error}"),
                    },
                    Some(Input::Previous) => {
                        attempt.previous()?;
                    }
                    Some(Input::Finish) => match attempt.finish().map(|_| ()) {
                        Ok(()) => submit(&context, &mut attempt).await,
                        Err(error) => println!("{error}"),
                    },
                    Some(Input::Quit) => return Ok(()),
                    None => println!("{HELP}"),
                }
            }
            State::Result => {
                print_result(&attempt);
                if context.prompter.confirm("Ulangi kuis?")? {
                    attempt.redo();
                } else {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("1"), Some(Input::Select(0)));
        assert_eq!(parse_input(" 2 "), Some(Input::Select(1)));
        assert_eq!(parse_input("N"), Some(Input::Next));
        assert_eq!(parse_input("p"), Some(Input::Previous));
        assert_eq!(parse_input("s"), Some(Input::Finish));
        assert_eq!(parse_input("q"), Some(Input::Quit));
        assert_eq!(parse_input("0"), None);
        assert_eq!(parse_input("jawab"), None);
    }
}
