/*
 * Responsibility
 * - module tree の公開 (integration tests からも使えるように lib に出す)
 */
pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
