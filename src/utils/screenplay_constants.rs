use std::collections::HashSet;
use lazy_static::lazy_static;
use regex::Regex;

/// 转场、结构类关键字，与角色名同样是全大写独占一行，需要排除
pub const EXCLUDED_TERMS: [&str; 30] = [
    "FADE IN", "FADE OUT", "FADE TO BLACK", "CUT TO", "SMASH CUT TO",
    "DISSOLVE TO", "CONTINUED", "THE END", "TITLE CARD", "SUPER",
    "INTERCUT", "FLASHBACK", "END FLASHBACK", "MONTAGE", "END MONTAGE",
    "SERIES OF SHOTS", "BACK TO SCENE", "CONTINUOUS", "LATER", "MOMENTS LATER",
    "MORE", "CONT'D", "PRE-LAP", "PRELAP", "MATCH CUT TO", "JUMP CUT TO",
    "TIME CUT", "FREEZE FRAME", "TITLE SEQUENCE", "END TITLE SEQUENCE",
];

/// 角色名允许的最短/最长长度（去除首尾空白后，按字符计）
pub const CHARACTER_CUE_MIN_LEN: usize = 2;
pub const CHARACTER_CUE_MAX_LEN: usize = 40;

/// 解析结果中场景描述的默认上限
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 500;
/// 导入数据中场景描述的默认上限
pub const DEFAULT_IMPORT_DESCRIPTION_LIMIT: usize = 200;

lazy_static! {
    pub static ref EXCLUDED_TERM_SET: HashSet<&'static str> = EXCLUDED_TERMS.iter().copied().collect();

    // 场景标题: [场号] INT/EXT[.] 地点 [- 时间]
    // 只有 INT/EXT 标记不区分大小写
    pub static ref SCENE_HEADING_REGEX: Regex = Regex::new(
        r"^(\d+[A-Za-z]?\.?\s+)?((?i:INT|EXT|INT\.?\s*/\s*EXT)\.?\s+)(.+?)(?:\s*[-\x{2013}\x{2014}]\s*(.+))?$"
    ).unwrap();

    // 角色名: 全大写，可带 (V.O.)、(CONT'D) 之类的括注
    pub static ref CHARACTER_CUE_REGEX: Regex = Regex::new(
        r"^([A-Z][A-Z\s.'\-]+?)(?:\s*\(.*?\))?\s*$"
    ).unwrap();

    pub static ref TRAILING_PARENTHETICAL_REGEX: Regex = Regex::new(r"\s*\(.*?\)\s*$").unwrap();

    pub static ref CAPITAL_LETTER_REGEX: Regex = Regex::new(r"[A-Z]").unwrap();
}
