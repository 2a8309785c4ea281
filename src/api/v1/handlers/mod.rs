pub mod admin;
pub mod courses;
pub mod health;
pub mod hirer;
pub mod me;
