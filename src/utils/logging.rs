use tracing::{info, warn};

/// Logs a received command with consistent format
pub fn log_command(command: &str, user: &str, user_id: u64, chat_id: i64) {
    info!(
        "CMD: {} by {}({}) in chat {}",
        command, user, user_id, chat_id
    );
}

/// Logs a decoded callback action with consistent format
pub fn log_action(token: &str, user: &str, user_id: u64, chat_id: i64) {
    info!(
        "ACTION: '{}' by {}({}) in chat {}",
        token, user, user_id, chat_id
    );
}

/// Logs an unrecognized callback token with consistent format
pub fn log_ignored_action(token: &str, chat_id: i64) {
    warn!("ACTION_IGNORED: '{}' in chat {}", token, chat_id);
}
