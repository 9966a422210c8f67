pub mod document;
pub mod frontmatter;
pub mod markdown;
pub mod render;
pub mod select;
pub mod video_question;

pub use document::{process_file, process_source};
pub use frontmatter::{
    calculate_checksum, normalize_content, parse_document, split_frontmatter,
    ParsedDocument,
};
pub use markdown::parse_markdown;
pub use render::render;
pub use select::{before, between, find, split_on_thematic_break};
pub use video_question::{parse_solution, QuestionExtractor};
