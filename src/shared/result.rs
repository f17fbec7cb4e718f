/// Type alias for Result with anyhow::Error as the error type.
/// Application and adapter code uses this alias; the descriptor parser
/// itself never returns errors across its public boundary.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
