pub mod html_parser;
pub mod text_processor;

pub use html_parser::NoteHtmlParser;
pub use html_parser::NoteParseError;
pub use html_parser::ParseOutput;
pub use text_processor::{flatten_element_text, grapheme_count};
