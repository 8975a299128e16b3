use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-binary")]
    NonBinary,
    #[default]
    Other,
}

/// 角色分级：A 主演 / B 配角 / C 群演
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CastTier {
    #[serde(rename = "A")]
    Lead,
    #[serde(rename = "B")]
    Supporting,
    #[default]
    #[serde(rename = "C")]
    Background,
}

/// 待创建的角色（无 id，无造型）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDraft {
    pub name: String,
    pub gender: Gender,
    pub cast_type: CastTier,
}

/// 待创建的场景（无 id，无角色）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDraft {
    pub scene_number: String,
    /// 形如 "INT. COFFEE SHOP"
    pub script_location: String,
    pub time_day: String,
    pub shoot_day: Option<u32>,
    pub description: String,
}

/// 交给项目存储的导入数据
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportData {
    pub characters: Vec<CharacterDraft>,
    pub scenes: Vec<SceneDraft>,
    /// 场号 -> 该场角色名，创建场景后用来挂接角色
    pub character_scene_map: BTreeMap<String, Vec<String>>,
}
