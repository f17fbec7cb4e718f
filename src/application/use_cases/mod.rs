/// Use cases module containing application business logic orchestration
mod read_components;

pub use read_components::ReadComponentsUseCase;
