use crate::utils::{
    is_indented_line,
    EXCLUDED_TERM_SET,
    SCENE_HEADING_REGEX,
    CHARACTER_CUE_REGEX,
    TRAILING_PARENTHETICAL_REGEX,
    CAPITAL_LETTER_REGEX,
};
use crate::utils::screenplay_constants::{CHARACTER_CUE_MIN_LEN, CHARACTER_CUE_MAX_LEN};

/// FDX 段落类型
pub const PARAGRAPH_SCENE_HEADING: &str = "Scene Heading";
pub const PARAGRAPH_CHARACTER: &str = "Character";
pub const PARAGRAPH_ACTION: &str = "Action";

/// 场景标题拆出的各个字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneHeading {
    /// 标题里显式给出的场号，没有时由扫描器自动编号
    pub number: Option<String>,
    pub int_ext: String,
    pub location: String,
    pub time_of_day: String,
}

impl SceneHeading {
    /// 无法识别的 FDX 场景标题：整段文字作为地点
    pub fn fallback(text: &str) -> Self {
        SceneHeading {
            number: None,
            int_ext: String::new(),
            location: text.to_string(),
            time_of_day: String::new(),
        }
    }
}

/// 一行（或一个段落）的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Heading(SceneHeading),
    CharacterCue(String),
    Action(String),
    Noise,
}

// 去掉一个末尾句点，如 "12A." -> "12A"
fn strip_trailing_period(text: &str) -> &str {
    let text = text.trim();
    text.strip_suffix('.').unwrap_or(text)
}

/// 按场景标题规则解析，不匹配返回 None
pub fn parse_scene_heading(line: &str) -> Option<SceneHeading> {
    let trimmed = line.trim();
    let caps = SCENE_HEADING_REGEX.captures(trimmed)?;

    let number = caps
        .get(1)
        .map(|m| strip_trailing_period(m.as_str()).to_string())
        .filter(|n| !n.is_empty());
    let int_ext = strip_trailing_period(caps.get(2)?.as_str()).to_string();
    let location = caps.get(3)?.as_str().trim().to_string();
    let time_of_day = caps
        .get(4)
        .map(|m| m.as_str().trim().to_uppercase())
        .unwrap_or_default();

    Some(SceneHeading { number, int_ext, location, time_of_day })
}

pub fn is_scene_heading(line: &str) -> bool {
    SCENE_HEADING_REGEX.is_match(line.trim())
}

/// 去掉末尾的括注，如 "JOHN (V.O.)" -> "JOHN"
pub fn extract_character_name(line: &str) -> String {
    TRAILING_PARENTHETICAL_REGEX
        .replace(line.trim(), "")
        .trim()
        .to_string()
}

pub fn is_excluded_term(name: &str) -> bool {
    EXCLUDED_TERM_SET.contains(name)
}

/// 判断一行是否为角色名（纯文本规则）
pub fn is_character_cue(line: &str) -> bool {
    let trimmed = line.trim();
    let len = trimmed.chars().count();
    if len < CHARACTER_CUE_MIN_LEN || len > CHARACTER_CUE_MAX_LEN {
        return false;
    }
    if !CHARACTER_CUE_REGEX.is_match(trimmed) {
        return false;
    }

    let name = extract_character_name(trimmed);
    if is_excluded_term(&name) || !CAPITAL_LETTER_REGEX.is_match(&name) {
        return false;
    }
    // 标题优先
    !is_scene_heading(trimmed)
}

/// 纯文本剧本的行分类
///
/// 优先级: 场景标题 > 角色名 > 动作行 > 其它。
/// 缩进（四个空格或制表符）的非角色行视为对白，归为 `Noise`。
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();

    if let Some(heading) = parse_scene_heading(trimmed) {
        return LineKind::Heading(heading);
    }
    if is_character_cue(trimmed) {
        return LineKind::CharacterCue(extract_character_name(trimmed));
    }
    if !trimmed.is_empty() && !is_indented_line(line) {
        return LineKind::Action(trimmed.to_string());
    }
    LineKind::Noise
}

/// FDX 段落分类
///
/// 类型由文档自身标注，角色名只做排除词过滤，不检查大小写。
pub fn classify_paragraph(paragraph_type: &str, text: &str) -> LineKind {
    let text = text.trim();
    if text.is_empty() {
        return LineKind::Noise;
    }

    match paragraph_type {
        PARAGRAPH_SCENE_HEADING => {
            let heading = parse_scene_heading(text).unwrap_or_else(|| {
                log::warn!("无法识别的场景标题，按原文作为地点: {}", text);
                SceneHeading::fallback(text)
            });
            LineKind::Heading(heading)
        }
        PARAGRAPH_CHARACTER => {
            let name = extract_character_name(text);
            if name.is_empty() || is_excluded_term(&name) {
                LineKind::Noise
            } else {
                LineKind::CharacterCue(name)
            }
        }
        PARAGRAPH_ACTION => LineKind::Action(text.to_string()),
        _ => LineKind::Noise,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(line: &str) -> SceneHeading {
        parse_scene_heading(line).expect("应该识别为场景标题")
    }

    #[test]
    fn test_basic_heading() {
        let h = heading("INT. COFFEE SHOP - DAY");
        assert_eq!(h.number, None);
        assert_eq!(h.int_ext, "INT");
        assert_eq!(h.location, "COFFEE SHOP");
        assert_eq!(h.time_of_day, "DAY");
    }

    #[test]
    fn test_numbered_heading() {
        let h = heading("12A. INT. WAREHOUSE - NIGHT");
        assert_eq!(h.number.as_deref(), Some("12A"));
        assert_eq!(h.int_ext, "INT");
        assert_eq!(h.location, "WAREHOUSE");
        assert_eq!(h.time_of_day, "NIGHT");

        let h = heading("7 EXT. FIELD");
        assert_eq!(h.number.as_deref(), Some("7"));
        assert_eq!(h.time_of_day, "");
    }

    #[test]
    fn test_heading_dash_variants() {
        for line in ["EXT. ROOFTOP - NIGHT", "EXT. ROOFTOP \u{2013} NIGHT", "EXT. ROOFTOP\u{2014}NIGHT"] {
            let h = heading(line);
            assert_eq!(h.location, "ROOFTOP", "{}", line);
            assert_eq!(h.time_of_day, "NIGHT", "{}", line);
        }
    }

    #[test]
    fn test_heading_marker_case_insensitive_time_uppercased() {
        let h = heading("int. Kitchen - morning");
        assert_eq!(h.int_ext, "int");
        assert_eq!(h.location, "Kitchen");
        assert_eq!(h.time_of_day, "MORNING");
    }

    #[test]
    fn test_int_ext_combination() {
        let h = heading("INT./EXT. CAR - DAY");
        assert_eq!(h.int_ext, "INT./EXT");
        assert_eq!(h.location, "CAR");

        let h = heading("INT/EXT CAR - DAY");
        assert_eq!(h.int_ext, "INT/EXT");
    }

    #[test]
    fn test_strip_trailing_period_removes_one() {
        assert_eq!(strip_trailing_period(" 12A. "), "12A");
        assert_eq!(strip_trailing_period("INT.."), "INT.");
        assert_eq!(strip_trailing_period("EXT"), "EXT");
    }

    #[test]
    fn test_not_a_heading() {
        assert!(parse_scene_heading("INTERIOR DESIGN").is_none());
        assert!(parse_scene_heading("JOHN").is_none());
        assert!(parse_scene_heading("INT.").is_none());
    }

    #[test]
    fn test_character_cue() {
        assert!(is_character_cue("JOHN"));
        assert!(is_character_cue("  MRS. O'NEIL  "));
        assert!(is_character_cue("JEAN-LUC (V.O.)"));
        assert!(is_character_cue("SARAH (CONT'D)"));
        assert!(!is_character_cue("J"));
        assert!(!is_character_cue("John"));
        assert!(!is_character_cue("CUT TO:"));
        assert!(!is_character_cue(&"A".repeat(41)));
    }

    #[test]
    fn test_excluded_terms_are_not_cues() {
        assert!(!is_character_cue("CUT TO"));
        assert!(!is_character_cue("CONTINUOUS"));
        assert!(!is_character_cue("MORE (CONT'D)"));
        assert!(!is_character_cue("FADE IN"));
    }

    #[test]
    fn test_extract_character_name() {
        assert_eq!(extract_character_name("JOHN (V.O.)"), "JOHN");
        assert_eq!(extract_character_name("  SARAH  "), "SARAH");
        assert_eq!(extract_character_name("BOB (O.S.) (CONT'D)"), "BOB");
    }

    #[test]
    fn test_heading_wins_over_cue() {
        let line = "EXT. PARK";
        assert!(CHARACTER_CUE_REGEX.is_match(line));
        assert!(!is_character_cue(line));
        assert!(matches!(classify_line(line), LineKind::Heading(_)));
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("JOHN"), LineKind::CharacterCue("JOHN".to_string()));
        assert_eq!(classify_line("    JOHN (V.O.)"), LineKind::CharacterCue("JOHN".to_string()));
        assert_eq!(
            classify_line("John enters.  "),
            LineKind::Action("John enters.".to_string())
        );
        assert_eq!(classify_line("    Hello there."), LineKind::Noise);
        assert_eq!(classify_line("\tHello there."), LineKind::Noise);
        assert_eq!(classify_line("   "), LineKind::Noise);
    }

    #[test]
    fn test_classify_paragraph() {
        assert_eq!(
            classify_paragraph(PARAGRAPH_CHARACTER, "Sarah (V.O.)"),
            LineKind::CharacterCue("Sarah".to_string())
        );
        assert_eq!(classify_paragraph(PARAGRAPH_CHARACTER, "CUT TO"), LineKind::Noise);
        assert_eq!(classify_paragraph(PARAGRAPH_ACTION, "  "), LineKind::Noise);
        assert_eq!(classify_paragraph("Dialogue", "Hello."), LineKind::Noise);
        assert_eq!(
            classify_paragraph(PARAGRAPH_SCENE_HEADING, "A DARK PLACE"),
            LineKind::Heading(SceneHeading::fallback("A DARK PLACE"))
        );
    }
}
