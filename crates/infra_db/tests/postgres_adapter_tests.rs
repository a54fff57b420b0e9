//! PostgreSQL adapter tests
//!
//! Each test starts its own container, so they are ignored by default.
//! Run with `cargo test -p infra_db -- --ignored` on a machine with Docker.

use chrono::{Duration, Utc};
use core_kernel::{AnswerId, HealthCheckable, QuestionId};
use domain_answer::AnswerPort;
use domain_question::QuestionPort;
use infra_db::{PostgresAnswerAdapter, PostgresQuestionAdapter};
use test_utils::{
    assert_port_not_found, assert_strictly_increasing, assert_timestamp_close, db_test,
    IdFixtures, NewAnswerBuilder, NewQuestionBuilder, TextFixtures,
};

db_test!(save_and_get_question, |pool| {
    let adapter = PostgresQuestionAdapter::new(pool);
    let new = NewQuestionBuilder::new()
        .with_user_id(IdFixtures::fixed_user_id())
        .with_text("Привет, как дела?")
        .build();
    let created_at = new.created_at;

    let saved = adapter.save(new).await.unwrap();
    let fetched = adapter.get_by_id(saved.id).await.unwrap();

    assert!(saved.id.value() > 0);
    assert_eq!(fetched.user_id, IdFixtures::fixed_user_id());
    assert_eq!(fetched.text, "Привет, как дела?");
    assert_timestamp_close(fetched.created_at, created_at, Duration::milliseconds(1));
});

db_test!(get_all_is_ordered_by_id, |pool| {
    let adapter = PostgresQuestionAdapter::new(pool);
    for _ in 0..3 {
        adapter.save(NewQuestionBuilder::new().build()).await.unwrap();
    }

    let ids: Vec<_> = adapter.get_all().await.unwrap().into_iter().map(|q| q.id).collect();

    assert_eq!(ids.len(), 3);
    assert_strictly_increasing(&ids);
});

db_test!(question_ids_not_reused_after_delete, |pool| {
    let adapter = PostgresQuestionAdapter::new(pool);
    let first = adapter.save(NewQuestionBuilder::new().build()).await.unwrap();
    adapter.delete(first.id).await.unwrap();

    let second = adapter.save(NewQuestionBuilder::new().build()).await.unwrap();

    assert!(second.id > first.id);
});

db_test!(missing_rows_report_not_found, |pool| {
    let questions = PostgresQuestionAdapter::new(pool.clone());
    let answers = PostgresAnswerAdapter::new(pool);

    assert_port_not_found(&questions.get_by_id(QuestionId::new(999)).await, "Question");
    assert_port_not_found(&questions.delete(QuestionId::new(999)).await, "Question");
    assert_port_not_found(&answers.get_by_id(AnswerId::new(999)).await, "Answer");
    assert_port_not_found(&answers.delete(AnswerId::new(999)).await, "Answer");
});

db_test!(answer_to_missing_question_is_not_found, |pool| {
    let answers = PostgresAnswerAdapter::new(pool);

    let result = answers
        .save(NewAnswerBuilder::new(IdFixtures::missing_question_id()).build())
        .await;

    assert_port_not_found(&result, "Question");
    assert!(answers.get_all().await.unwrap().is_empty());
});

db_test!(delete_question_cascades_to_answers, |pool| {
    let questions = PostgresQuestionAdapter::new(pool.clone());
    let answers = PostgresAnswerAdapter::new(pool);

    let doomed = questions.save(NewQuestionBuilder::new().build()).await.unwrap();
    let kept = questions.save(NewQuestionBuilder::new().build()).await.unwrap();
    let a1 = answers.save(NewAnswerBuilder::new(doomed.id).build()).await.unwrap();
    let a2 = answers.save(NewAnswerBuilder::new(doomed.id).build()).await.unwrap();
    let other = answers
        .save(NewAnswerBuilder::new(kept.id).with_text(TextFixtures::max_length()).build())
        .await
        .unwrap();

    questions.delete(doomed.id).await.unwrap();

    assert_port_not_found(&answers.get_by_id(a1.id).await, "Answer");
    assert_port_not_found(&answers.get_by_id(a2.id).await, "Answer");
    assert!(answers.find_by_question(doomed.id).await.unwrap().is_empty());
    assert_eq!(answers.get_by_id(other.id).await.unwrap().text, TextFixtures::max_length());
});

db_test!(schema_rejects_out_of_range_text, |pool| {
    let adapter = PostgresQuestionAdapter::new(pool);

    let result = adapter
        .save(NewQuestionBuilder::new().with_text(TextFixtures::too_short()).build())
        .await;

    assert!(result.is_err());
    assert!(!result.unwrap_err().is_not_found());
});

db_test!(health_check_reports_healthy, |pool| {
    let adapter = PostgresQuestionAdapter::new(pool);
    let started = Utc::now();

    let health = adapter.health_check().await;

    assert!(health.is_healthy());
    assert!(health.checked_at >= started);
});

#[tokio::test]
#[ignore = "requires Docker"]
async fn question_ids_survive_truncation() {
    let db = test_utils::create_isolated_test_database().await.unwrap();
    let adapter = PostgresQuestionAdapter::new(db.pool().clone());

    let before = adapter.save(NewQuestionBuilder::new().build()).await.unwrap();
    db.clear_data().await.unwrap();
    let after = adapter.save(NewQuestionBuilder::new().build()).await.unwrap();

    assert!(adapter.get_by_id(before.id).await.is_err());
    assert_strictly_increasing(&[before.id, after.id]);
}

db_test!(schema_can_be_reverted_and_reapplied, |pool| {
    let applied = infra_db::migration_status(&pool).await.unwrap();
    assert!(!applied.is_empty());
    assert!(applied.iter().all(|m| m.applied));

    let latest = applied.last().map(|m| m.version);
    assert_eq!(infra_db::revert_last_migration(&pool).await.unwrap(), latest);

    let status = infra_db::migration_status(&pool).await.unwrap();
    assert_eq!(status.last().map(|m| m.applied), Some(false));

    infra_db::run_migrations(&pool).await.unwrap();
    let adapter = PostgresQuestionAdapter::new(pool.clone());
    assert!(adapter.save(NewQuestionBuilder::new().build()).await.is_ok());
});
