//! Outbound API clients

pub mod openai;
