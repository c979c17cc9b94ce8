//! HTTP surface: request handlers mounted by `WebServer::build_router`

pub mod handlers;
