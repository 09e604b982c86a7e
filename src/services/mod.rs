/// Injectable wall-clock used to resolve "today"
pub mod clock;
/// HTTP health-check endpoints
pub mod health;
