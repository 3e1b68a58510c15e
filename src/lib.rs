//! Prompt AI 解析APIサーバ
//!
//! `POST /api/analyze` を提供し、ビルド済みフロントエンドの静的配信を行う。

pub mod cli;
pub mod config;
pub mod error;
pub mod recognizer;
pub mod routes;
