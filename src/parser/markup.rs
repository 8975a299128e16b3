use log::{info, warn};
use xml::reader::{EventReader, ParserConfig, XmlEvent};
use crate::error::ScriptImportResult;
use crate::models::{Conf, ParsedScript};
use crate::parser::classifier::classify_paragraph;
use crate::parser::scan_state::ScanState;

const PARAGRAPH_TAG: &str = "Paragraph";
const TEXT_TAG: &str = "Text";
const TYPE_ATTR: &str = "Type";

/// FDX 中的一个段落：类型 + 拼接后的文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FdxParagraph {
    pub paragraph_type: String,
    pub text: String,
}

// 纯空白的文本也要保留，Final Draft 换样式时会把空格单独放进一个 <Text>
fn create_reader(xml: &str) -> EventReader<&[u8]> {
    ParserConfig::new()
        .trim_whitespace(false)
        .whitespace_to_characters(true)
        .cdata_to_characters(true)
        .create_reader(xml.as_bytes())
}

/// 读取 FDX 文档中的全部段落
///
/// 段落按起始标签的顺序（先序）排列，嵌套段落也会单独列出；
/// 段落文本为其内部所有 `<Text>` 内容按文档顺序拼接后去除首尾空白。
pub fn read_paragraphs(xml: &str) -> ScriptImportResult<Vec<FdxParagraph>> {
    let mut paragraphs: Vec<FdxParagraph> = Vec::new();
    // 当前打开的段落在 paragraphs 中的下标
    let mut open_paragraphs: Vec<usize> = Vec::new();
    let mut text_depth = 0usize;

    for event in create_reader(xml) {
        let event = event.map_err(|e| {
            warn!("FDX文档无法解析: {}", e);
            e
        })?;

        match event {
            XmlEvent::StartElement { name, attributes, .. } => {
                if name.local_name == PARAGRAPH_TAG {
                    let paragraph_type = attributes
                        .iter()
                        .find(|a| a.name.local_name == TYPE_ATTR)
                        .map(|a| a.value.clone())
                        .unwrap_or_default();
                    open_paragraphs.push(paragraphs.len());
                    paragraphs.push(FdxParagraph { paragraph_type, text: String::new() });
                } else if name.local_name == TEXT_TAG {
                    text_depth += 1;
                }
            }
            XmlEvent::EndElement { name } => {
                if name.local_name == PARAGRAPH_TAG {
                    open_paragraphs.pop();
                } else if name.local_name == TEXT_TAG {
                    text_depth = text_depth.saturating_sub(1);
                }
            }
            XmlEvent::Characters(text) | XmlEvent::Whitespace(text) | XmlEvent::CData(text) => {
                // 外层段落同样包含嵌套段落里的文本
                if text_depth > 0 {
                    for &index in &open_paragraphs {
                        paragraphs[index].text.push_str(&text);
                    }
                }
            }
            _ => {}
        }
    }

    for paragraph in &mut paragraphs {
        paragraph.text = paragraph.text.trim().to_string();
    }
    Ok(paragraphs)
}

/// 解析 Final Draft (.fdx) 剧本
///
/// 段落类型由文档给出，"Scene Heading" 无法识别时降级为整段文字作地点，
/// 保证每个非空的场景标题段落都产生一个场景。
/// XML 本身不合法时返回 [`ScriptImportError::Markup`](crate::error::ScriptImportError::Markup)。
pub fn parse_fdx(xml: &str, config: &Conf) -> ScriptImportResult<ParsedScript> {
    let paragraphs = read_paragraphs(xml)?;

    let result = paragraphs
        .iter()
        .filter(|p| !p.text.is_empty())
        .map(|p| classify_paragraph(&p.paragraph_type, &p.text))
        .fold(ScanState::new(config), ScanState::step)
        .finish();

    info!(
        "FDX解析完成: {} 个段落, {} 个场景, {} 个角色",
        paragraphs.len(),
        result.scenes.len(),
        result.characters.len()
    );
    Ok(result)
}
