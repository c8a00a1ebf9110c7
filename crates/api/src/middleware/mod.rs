//! Request-level middleware: the authentication extractor.

pub mod auth;
