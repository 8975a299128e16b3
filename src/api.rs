//! 对外 API
//!
//! 解析本身是同步纯函数；这里只有读文件是异步的（一次性读入，不做流式处理）。

use std::path::Path;
use log::{info, warn};
use crate::error::{ScriptImportError, ScriptImportResult};
use crate::import::{import_selected, ImportSelection};
use crate::models::{CastTier, Conf, Gender, ImportData, ParsedScript};
use crate::parser::{parse_document, parse_named_document, ScriptFormat};

/// 简化的配置结构，供上层调用
#[derive(Debug, Clone)]
pub struct SimpleConf {
    pub description_limit: usize,
    pub import_description_limit: usize,
    /// "Male" / "Female" / "Non-binary" / "Other"
    pub default_gender: String,
    /// "A" / "B" / "C"
    pub default_cast_tier: String,
}

impl Default for SimpleConf {
    fn default() -> Self {
        let conf = Conf::default();
        Self {
            description_limit: conf.description_limit,
            import_description_limit: conf.import_description_limit,
            default_gender: "Other".to_string(),
            default_cast_tier: "C".to_string(),
        }
    }
}

impl From<SimpleConf> for Conf {
    fn from(simple: SimpleConf) -> Self {
        let mut conf = Conf::default();
        conf.description_limit = simple.description_limit;
        conf.import_description_limit = simple.import_description_limit;

        // 无法识别的取值保持默认
        conf.default_gender = match simple.default_gender.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            "Non-binary" => Gender::NonBinary,
            _ => Gender::Other,
        };
        conf.default_cast_tier = match simple.default_cast_tier.as_str() {
            "A" => CastTier::Lead,
            "B" => CastTier::Supporting,
            _ => CastTier::Background,
        };
        conf
    }
}

/// 导入结果
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub success: bool,
    pub message: String,
    pub data: Option<ImportData>,
}

/// 解析剧本文本，返回 JSON
///
/// `file_name` 只用来按扩展名选择格式
pub async fn parse_script_text(
    text: String,
    file_name: String,
    config: Option<SimpleConf>,
) -> ScriptImportResult<String> {
    let conf: Conf = config.unwrap_or_default().into();
    let parsed = parse_named_document(&file_name, &text, &conf)?;
    Ok(serde_json::to_string(&parsed)?)
}

/// 读取并解析剧本文件
pub async fn parse_script_file(path: impl AsRef<Path>, conf: &Conf) -> ScriptImportResult<ParsedScript> {
    let path = path.as_ref();
    let format = ScriptFormat::from_path(path)
        .ok_or_else(|| ScriptImportError::UnsupportedFormat(path.display().to_string()))?;

    let text = tokio::fs::read_to_string(path).await?;
    info!("读取剧本 {} ({:?}, {} 字节)", path.display(), format, text.len());

    parse_document(&text, format, conf)
}

/// 读取剧本文件并生成导入数据
///
/// `selection` 为 None 时全选。解析不到任何场景和角色时视为失败。
pub async fn import_script_file(
    path: impl AsRef<Path>,
    selection: Option<ImportSelection>,
    config: Option<SimpleConf>,
) -> ImportResult {
    let conf: Conf = config.unwrap_or_default().into();

    let parsed = match parse_script_file(path, &conf).await {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("剧本导入失败: {}", e);
            return ImportResult {
                success: false,
                message: format!("导入失败: {}", e),
                data: None,
            };
        }
    };

    if parsed.is_empty() {
        return ImportResult {
            success: false,
            message: "剧本中没有找到场景或角色".to_string(),
            data: None,
        };
    }

    let selection = selection.unwrap_or_else(|| ImportSelection::all(&parsed));
    let data = import_selected(&parsed, &selection, &conf);
    ImportResult {
        success: true,
        message: format!("找到 {} 个场景, {} 个角色", data.scenes.len(), data.characters.len()),
        data: Some(data),
    }
}

/// 按选择转换并输出 JSON
pub fn convert_to_json(
    parsed: &ParsedScript,
    selection: &ImportSelection,
    conf: &Conf,
) -> ScriptImportResult<String> {
    let data = import_selected(parsed, selection, conf);
    Ok(serde_json::to_string(&data)?)
}
