/// Application layer - Use cases and DTOs
///
/// This layer orchestrates descriptor discovery, parsing and filtering,
/// and coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
