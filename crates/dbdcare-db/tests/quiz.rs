mod common;

use crate::common::memory_db;
use dbdcare_db::{quiz, quiz_response};
use dbdcare_entity::quiz_question::ActiveModel;
use sea_orm::ActiveValue::Set;
use serde_json::json;
use test_log::test;

fn question(text: &str, correct_answer: i32) -> ActiveModel {
    ActiveModel {
        question: Set(text.to_owned()),
        options: Set(json!(["Benar", "Salah"])),
        correct_answer: Set(correct_answer),
        explanation: Set(String::new()),
        ..Default::default()
    }
}

#[test(tokio::test)]
async fn test_replace_questions() {
    let db = &memory_db().await;

    let first = quiz::Mutation::replace_questions(db, vec![question("A", 0), question("B", 1), question("C", 0)])
        .await
        .unwrap();
    assert_eq!(first.len(), 3);

    let second = quiz::Mutation::replace_questions(db, vec![question("D", 1), question("E", 0)])
        .await
        .unwrap();
    let texts: Vec<_> = second.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(texts, ["D", "E"]);
    assert_eq!(second[0].position, 0);
    assert_eq!(second[1].position, 1);

    assert_eq!(quiz::Query::questions(db).await.unwrap(), second);
}

#[test(tokio::test)]
async fn test_responses_are_append_only() {
    let db = &memory_db().await;

    let first = quiz_response::Mutation::create(db, "budi".to_owned(), 7, &[0, 1, -1])
        .await
        .unwrap();
    quiz_response::Mutation::create(db, "budi".to_owned(), 9, &[0, 1, 1])
        .await
        .unwrap();

    assert_eq!(first.answers, json!([0, 1, -1]));
    assert_eq!(quiz_response::Query::count(db).await.unwrap(), 2);

    assert!(quiz_response::Mutation::delete(db, first.id).await.unwrap());
    let remaining = quiz_response::Query::all(db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].score, 9);
}
