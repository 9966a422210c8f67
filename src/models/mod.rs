pub mod config;
pub mod marker;
pub mod node;
pub mod question;
pub mod report;

pub use config::{ParserConfig, CONFIG_FILE};
pub use marker::{is_region_heading, MarkerKind, MarkerSet};
pub use node::Node;
pub use question::{Answer, ChallengeMeta, DocumentMetadata, ProcessedDocument, Question};
pub use report::{BuildManifest, DocumentFailure};
