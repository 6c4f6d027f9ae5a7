use crate::util::TransactionResultExt;
use dbdcare_entity::quiz_question::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::{DbErr, EntityTrait, QueryOrder, TransactionTrait};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Replaces the whole quiz. Positions follow the order of `questions`.
    pub async fn replace_questions<C: TransactionTrait>(
        conn: &C,
        questions: Vec<ActiveModel>,
    ) -> Result<Vec<Model>, DbErr> {
        let questions: Vec<ActiveModel> = questions
            .into_iter()
            .zip(0..)
            .map(|(mut question, position)| {
                question.id = Set(Uuid::new_v4());
                question.position = Set(position);
                question
            })
            .collect();

        conn.transaction(|txn| {
            Box::pin(async move {
                Entity::delete_many().exec(txn).await?;
                if !questions.is_empty() {
                    Entity::insert_many(questions).exec(txn).await?;
                }
                Entity::find().order_by_asc(Column::Position).all(txn).await
            })
        })
        .await
        .log_transaction_err("failed to replace quiz questions")
        .flatten_res()
    }
}
