//! A small task CRUD service: axum routes over a SQLite table, with
//! schema-checked request bodies and a generated OpenAPI document.

pub mod adapters;
pub mod config;
pub mod core;
pub mod storage;
pub mod telemetry;

#[cfg(test)]
mod tests;
