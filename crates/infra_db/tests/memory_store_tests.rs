//! Behaviour of the shared in-memory store through both ports

use std::sync::Arc;

use core_kernel::{AnswerId, QuestionId};
use domain_answer::{AnswerPort, AnswerService};
use domain_question::{QuestionPort, QuestionService};
use infra_db::InMemoryStore;
use test_utils::{
    assert_port_not_found, assert_strictly_increasing, IdFixtures, NewAnswerBuilder,
    NewQuestionBuilder, TextFixtures,
};

#[tokio::test]
async fn question_ids_increase_and_are_not_reused() {
    let store = InMemoryStore::new();

    let first = QuestionPort::save(&store, NewQuestionBuilder::new().build()).await.unwrap();
    let second = QuestionPort::save(&store, NewQuestionBuilder::new().build()).await.unwrap();
    QuestionPort::delete(&store, second.id).await.unwrap();
    let third = QuestionPort::save(&store, NewQuestionBuilder::new().build()).await.unwrap();

    assert_strictly_increasing(&[first.id, second.id, third.id]);
}

#[tokio::test]
async fn get_by_id_returns_saved_fields() {
    let store = InMemoryStore::new();
    let user_id = IdFixtures::fixed_user_id();
    let new = NewQuestionBuilder::new()
        .with_user_id(user_id)
        .with_text(TextFixtures::question())
        .build();
    let created_at = new.created_at;

    let saved = QuestionPort::save(&store, new).await.unwrap();
    let fetched = QuestionPort::get_by_id(&store, saved.id).await.unwrap();

    assert_eq!(fetched.user_id, user_id);
    assert_eq!(fetched.text, TextFixtures::question());
    assert_eq!(fetched.created_at, created_at);
}

#[tokio::test]
async fn delete_question_cascades_to_its_answers_only() {
    let store = InMemoryStore::new();
    let doomed = QuestionPort::save(&store, NewQuestionBuilder::new().build()).await.unwrap();
    let kept = QuestionPort::save(&store, NewQuestionBuilder::new().build()).await.unwrap();

    let a1 = AnswerPort::save(&store, NewAnswerBuilder::new(doomed.id).build()).await.unwrap();
    let a2 = AnswerPort::save(&store, NewAnswerBuilder::new(doomed.id).build()).await.unwrap();
    let other = AnswerPort::save(&store, NewAnswerBuilder::new(kept.id).build()).await.unwrap();

    QuestionPort::delete(&store, doomed.id).await.unwrap();

    assert_port_not_found(&AnswerPort::get_by_id(&store, a1.id).await, "Answer");
    assert_port_not_found(&AnswerPort::get_by_id(&store, a2.id).await, "Answer");
    assert_eq!(AnswerPort::get_by_id(&store, other.id).await.unwrap(), other);
    assert!(store.answers_for(doomed.id).await.is_empty());
    assert_eq!(store.answer_count().await, 1);
}

#[tokio::test]
async fn deleting_missing_rows_reports_not_found() {
    let store = InMemoryStore::new();

    assert_port_not_found(&QuestionPort::delete(&store, QuestionId::new(1)).await, "Question");
    assert_port_not_found(&AnswerPort::delete(&store, AnswerId::new(1)).await, "Answer");
}

#[tokio::test]
async fn answer_to_missing_question_is_rejected() {
    let store = InMemoryStore::new();

    let result = AnswerPort::save(
        &store,
        NewAnswerBuilder::new(IdFixtures::missing_question_id()).build(),
    )
    .await;

    assert_port_not_found(&result, "Question");
    assert_eq!(store.answer_count().await, 0);
}

#[tokio::test]
async fn services_share_one_store() {
    let store = Arc::new(InMemoryStore::new());
    let questions = QuestionService::new(store.clone());
    let answers = AnswerService::new(store.clone(), store.clone());

    let question = questions
        .save(IdFixtures::fixed_user_id(), TextFixtures::question())
        .await
        .unwrap();
    let answer = answers
        .save(question.id, IdFixtures::fixed_user_id(), TextFixtures::answer())
        .await
        .unwrap();

    questions.delete(question.id).await.unwrap();

    assert!(answers.get_by_id(answer.id).await.unwrap_err().is_not_found());
    assert!(answers.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_saves_get_distinct_ids() {
    let store = InMemoryStore::new();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                QuestionPort::save(&store, NewQuestionBuilder::new().build())
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 20);
    assert_eq!(store.question_count().await, 20);
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{question_id_strategy, user_id_strategy};

    proptest! {
        /// Any interleaving of saves and deletes hands out increasing ids
        #[test]
        fn ids_increase_across_deletes(ops in proptest::collection::vec(any::<bool>(), 1..40)) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let store = InMemoryStore::new();
                let mut issued = Vec::new();

                for delete_last in ops {
                    let saved = QuestionPort::save(&store, NewQuestionBuilder::new().build()).await.unwrap();
                    issued.push(saved.id);
                    if delete_last {
                        QuestionPort::delete(&store, saved.id).await.unwrap();
                    }
                }

                assert_strictly_increasing(&issued);
            });
        }

        #[test]
        fn saved_question_keeps_its_author(user_id in user_id_strategy()) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let store = InMemoryStore::new();
                let new = NewQuestionBuilder::new()
                    .with_user_id(user_id)
                    .with_text(TextFixtures::random())
                    .build();
                let text = new.text.clone();

                let saved = QuestionPort::save(&store, new).await.unwrap();
                let fetched = QuestionPort::get_by_id(&store, saved.id).await.unwrap();

                assert_eq!(fetched.user_id, user_id);
                assert_eq!(fetched.text, text);
            });
        }

        #[test]
        fn answers_to_unknown_questions_are_never_stored(question_id in question_id_strategy()) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let store = InMemoryStore::new();

                let result = AnswerPort::save(&store, NewAnswerBuilder::new(question_id).build()).await;

                assert_port_not_found(&result, "Question");
                assert_eq!(store.answer_count().await, 0);
            });
        }
    }
}
