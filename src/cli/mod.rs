pub mod ast;
pub mod build;
pub mod init;
pub mod inputs;
pub mod validate;

pub use build::BuildOptions;
pub use inputs::collect_inputs;
pub use validate::{ValidateOptions, ValidationSummary};
