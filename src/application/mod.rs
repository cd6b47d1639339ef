//! Application layer - Use cases and orchestration

pub mod build;
pub mod check;
pub mod generate;
pub mod init;
pub mod load;

pub use build::{BuildOptions, BuildService};
pub use check::{CheckReport, CheckService};
pub use generate::{GenerateOptions, GenerateService, GenerationReport};
pub use init::InitService;
pub use load::load_dictionaries;
