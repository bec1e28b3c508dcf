pub mod client;

pub use client::{Endpoints, JlcClient, USER_AGENT};
