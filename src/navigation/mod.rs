//! Menu navigation: action decoding and the per-conversation controller.

pub mod action;
pub mod controller;

pub use action::Action;
pub use controller::{Button, ConversationId, Navigator, Reply, SessionState};
