pub mod client;
pub mod http;
pub mod store;

pub use client::{SessionClient, SessionClientError};
pub use http::HttpSessionClient;
pub use store::SessionStore;
