use thiserror::Error;

/// 剧本导入错误
#[derive(Error, Debug)]
pub enum ScriptImportError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// FDX 文档不是合法的 XML，换一个文件才能重试
    #[error("FDX解析错误: {0}")]
    Markup(#[from] xml::reader::Error),

    #[error("不支持的剧本格式: {0}")]
    UnsupportedFormat(String),

    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ScriptImportResult<T> = Result<T, ScriptImportError>;
