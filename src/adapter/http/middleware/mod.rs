pub mod auth;
pub mod extractor;
