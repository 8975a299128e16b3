pub mod screenplay_constants;

pub use screenplay_constants::{
    EXCLUDED_TERMS,
    EXCLUDED_TERM_SET,
    SCENE_HEADING_REGEX,
    CHARACTER_CUE_REGEX,
    TRAILING_PARENTHETICAL_REGEX,
    CAPITAL_LETTER_REGEX,
};

/// 检查一行是否带缩进（四个及以上空格或制表符开头）
///
/// 纯文本剧本里缩进的行通常是对白，不计入场景描述
pub fn is_indented_line(line: &str) -> bool {
    line.starts_with("    ") || line.starts_with('\t')
}

/// 按字符（而非字节）截断，返回不超过 `limit` 个字符的前缀
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
