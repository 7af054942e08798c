pub mod app;
pub mod extract;
pub mod index;
pub mod openapi;
pub mod server;
pub mod tasks;

pub use app::{AppState, create_app};
pub use openapi::ApiDoc;
pub use server::HttpServer;
