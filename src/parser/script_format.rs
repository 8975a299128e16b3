use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{ScriptImportError, ScriptImportResult};
use crate::models::{Conf, ParsedScript};
use crate::parser::markup::parse_fdx;
use crate::parser::plain_text::parse_script;

/// 支持导入的剧本格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptFormat {
    PlainText,
    Fountain,
    FinalDraft,
}

impl ScriptFormat {
    /// 根据扩展名判断格式（不区分大小写）
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "txt" => Some(ScriptFormat::PlainText),
            "fountain" => Some(ScriptFormat::Fountain),
            "fdx" => Some(ScriptFormat::FinalDraft),
            _ => None,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// 是否按 XML 结构解析
    pub fn is_markup(&self) -> bool {
        matches!(self, ScriptFormat::FinalDraft)
    }
}

/// 按格式分派到对应的扫描器
pub fn parse_document(text: &str, format: ScriptFormat, config: &Conf) -> ScriptImportResult<ParsedScript> {
    if format.is_markup() {
        parse_fdx(text, config)
    } else {
        Ok(parse_script(text, config))
    }
}

/// 根据文件名选择格式并解析
pub fn parse_named_document(file_name: &str, text: &str, config: &Conf) -> ScriptImportResult<ParsedScript> {
    let format = ScriptFormat::from_path(file_name)
        .ok_or_else(|| ScriptImportError::UnsupportedFormat(file_name.to_string()))?;
    parse_document(text, format, config)
}
