//! Request/Response data transfer objects

pub mod question;
pub mod answer;
