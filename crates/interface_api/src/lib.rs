//! HTTP API Layer
//!
//! REST API for questions and answers using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers per resource plus health checks
//! - **Middleware**: Request ids, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: `{message, time}` error bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let store = Arc::new(InMemoryStore::new());
//! let app = create_router(store.clone(), store, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod telemetry;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_answer::{AnswerPort, AnswerService};
use domain_question::{QuestionPort, QuestionService};

use crate::config::ApiConfig;
use crate::handlers::{answer, health, missing_id, question};
use crate::middleware::request_logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub questions: QuestionService,
    pub answers: AnswerService,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the services to their ports
    ///
    /// The answer service checks parents through the same question port the
    /// question service writes to.
    pub fn new(
        questions: Arc<dyn QuestionPort>,
        answers: Arc<dyn AnswerPort>,
        config: ApiConfig,
    ) -> Self {
        let question_service = QuestionService::new(questions);
        let answer_service = AnswerService::new(answers, question_service.port());
        Self {
            questions: question_service,
            answers: answer_service,
            config,
        }
    }
}

/// Creates the API router with all routes and middleware
pub fn create_router(
    questions: Arc<dyn QuestionPort>,
    answers: Arc<dyn AnswerPort>,
    config: ApiConfig,
) -> Router {
    let state = AppState::new(questions, answers, config);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let question_routes = Router::new()
        .route(
            "/question",
            get(question::list_questions).post(question::create_question),
        )
        .route("/question/", get(missing_id).delete(missing_id))
        .route(
            "/question/:id",
            get(question::get_question).delete(question::delete_question),
        )
        .route("/question/:id/answer", post(answer::create_answer));

    let answer_routes = Router::new()
        .route("/answer", get(answer::list_answers))
        .route("/answer/", get(missing_id).delete(missing_id))
        .route(
            "/answer/:id",
            get(answer::get_answer).delete(answer::delete_answer),
        );

    Router::new()
        .merge(health_routes)
        .merge(question_routes)
        .merge(answer_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(request_logging))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
