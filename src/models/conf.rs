use serde::{Deserialize, Serialize};
use crate::models::import_data::{CastTier, Gender};
use crate::utils::screenplay_constants::{DEFAULT_DESCRIPTION_LIMIT, DEFAULT_IMPORT_DESCRIPTION_LIMIT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 解析结果中场景描述的最大字符数
    pub description_limit: usize,
    /// 导入数据中场景描述的最大字符数（仅截断显示）
    pub import_description_limit: usize,
    /// 新建角色的默认性别
    pub default_gender: Gender,
    /// 新建角色的默认分级
    pub default_cast_tier: CastTier,
}

impl Conf {
    /// 从 JSON 读取配置，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
            import_description_limit: DEFAULT_IMPORT_DESCRIPTION_LIMIT,
            default_gender: Gender::Other,
            default_cast_tier: CastTier::Background,
        }
    }
}
