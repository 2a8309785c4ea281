/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - pub fn http::apply(...), session_gate::apply(...) など
 */
pub mod http;
pub mod session_gate;
