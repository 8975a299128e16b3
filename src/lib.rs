pub mod models;
pub mod utils;
pub mod parser;
pub mod import;
pub mod error;
pub mod api;

pub use models::{
    ParsedScene,
    ParsedScript,
    CharacterDraft,
    SceneDraft,
    ImportData,
    Gender,
    CastTier,
    Conf
};

pub use parser::{
    LineKind,
    SceneHeading,
    ScriptFormat,
    classify_line,
    classify_paragraph,
    parse_script,
    parse_fdx,
    parse_document
};

pub use import::{
    ImportSelection,
    convert_to_import_data,
    import_selected
};

pub use error::{ScriptImportError, ScriptImportResult};

pub use api::{
    SimpleConf,
    ImportResult,
    parse_script_text,
    parse_script_file,
    import_script_file,
    convert_to_json
};

/// 解析剧本文本
///
/// # Arguments
///
/// * `script` - 剧本文本（纯文本/Fountain 或 FDX）
/// * `format` - 剧本格式
/// * `config` - 配置对象
///
/// # Returns
///
/// 解析结果；只有 FDX 不是合法 XML 时返回错误
pub fn parse(script: &str, format: ScriptFormat, config: &Conf) -> ScriptImportResult<ParsedScript> {
    parse_document(script, format, config)
}
