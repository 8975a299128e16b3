use log::info;
use crate::models::{Conf, ParsedScript};
use crate::parser::classifier::classify_line;
use crate::parser::scan_state::ScanState;

/// 解析纯文本 / Fountain 剧本
///
/// 逐行分类后折叠进 [`ScanState`]。纯函数，不会失败；
/// 识别不到任何内容时返回空结果。
pub fn parse_script(text: &str, config: &Conf) -> ParsedScript {
    // 带 BOM 的 UTF-8 文件，去掉开头的 U+FEFF，否则第一行标题识别不到
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let result = text
        .lines()
        .map(classify_line)
        .fold(ScanState::new(config), ScanState::step)
        .finish();

    info!(
        "纯文本解析完成: {} 个场景, {} 个角色",
        result.scenes.len(),
        result.characters.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "INT. COFFEE SHOP - DAY
John enters, scanning the room.
JOHN
Has anyone seen Sarah?
CUT TO:
EXT. ROOFTOP - NIGHT
SARAH
I'm right here.
";

    #[test]
    fn test_coffee_shop_example() {
        let result = parse_script(SAMPLE, &Conf::default());
        assert_eq!(result.scenes.len(), 2);

        let first = &result.scenes[0];
        assert_eq!(first.scene_number, "1");
        assert_eq!(first.int_ext, "INT");
        assert_eq!(first.location, "COFFEE SHOP");
        assert_eq!(first.time_of_day, "DAY");
        assert!(first.description.starts_with("John enters, scanning the room."));
        assert_eq!(first.character_names, vec!["JOHN"]);

        let second = &result.scenes[1];
        assert_eq!(second.scene_number, "2");
        assert_eq!(second.int_ext, "EXT");
        assert_eq!(second.location, "ROOFTOP");
        assert_eq!(second.time_of_day, "NIGHT");
        assert_eq!(second.character_names, vec!["SARAH"]);

        assert_eq!(result.characters, vec!["JOHN", "SARAH"]);
    }

    #[test]
    fn test_indented_dialogue_is_not_description() {
        let script = "INT. HALL - DAY\nRain hammers the windows.\n\n    MARY\n    Close them.\n\tNow.\n";
        let result = parse_script(script, &Conf::default());
        assert_eq!(result.scenes[0].description, "Rain hammers the windows.");
        assert_eq!(result.scenes[0].character_names, vec!["MARY"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let script = "INT. HALL - DAY\r\nMARY\r\nShe sits.\r\n";
        let result = parse_script(script, &Conf::default());
        assert_eq!(result.scenes[0].time_of_day, "DAY");
        assert_eq!(result.scenes[0].character_names, vec!["MARY"]);
        assert_eq!(result.scenes[0].description, "She sits.");
    }

    #[test]
    fn test_leading_byte_order_mark() {
        let result = parse_script("\u{FEFF}INT. ROOM - DAY\nBOB\n", &Conf::default());
        assert_eq!(result.scenes.len(), 1);
        assert_eq!(result.scenes[0].location, "ROOM");
        assert_eq!(result.characters, vec!["BOB"]);
    }

    #[test]
    fn test_description_cap() {
        let mut script = String::from("INT. HALL - DAY\n");
        for _ in 0..100 {
            script.push_str("The clock ticks loudly in the empty hall.\n");
        }
        let result = parse_script(&script, &Conf::default());
        assert_eq!(result.scenes[0].description.chars().count(), 500);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let config = Conf::default();
        assert_eq!(parse_script(SAMPLE, &config), parse_script(SAMPLE, &config));
    }
}
