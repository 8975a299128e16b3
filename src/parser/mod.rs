pub mod classifier;
pub mod scan_state;
pub mod plain_text;
pub mod markup;
pub mod script_format;

pub use classifier::{
    LineKind,
    SceneHeading,
    classify_line,
    classify_paragraph,
    parse_scene_heading,
    is_character_cue,
    extract_character_name,
    is_excluded_term,
};
pub use scan_state::ScanState;
pub use plain_text::parse_script;
pub use markup::{parse_fdx, read_paragraphs, FdxParagraph};
pub use script_format::{ScriptFormat, parse_document, parse_named_document};
