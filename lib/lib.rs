/// Checkers domain types and move generation.
pub mod checkers;
/// Two player game sessions.
pub mod session;
