pub mod handlers;
pub mod sessions;
pub mod validation;

pub use sessions::{ActiveSession, InMemorySessionStore, ProfileRepository};
