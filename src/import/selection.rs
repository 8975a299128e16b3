use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::models::{Conf, ImportData, ParsedScript};
use crate::import::converter::convert_to_import_data;

/// 用户在导入前勾选的场景（按下标）和角色（按名字）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSelection {
    pub scene_indices: BTreeSet<usize>,
    pub character_names: BTreeSet<String>,
}

impl ImportSelection {
    /// 全选
    pub fn all(parsed: &ParsedScript) -> Self {
        ImportSelection {
            scene_indices: (0..parsed.scenes.len()).collect(),
            character_names: parsed.characters.iter().cloned().collect(),
        }
    }

    /// 按选择过滤解析结果
    ///
    /// 保留场景的原有顺序；每个场景的角色列表只保留被选中的角色
    pub fn apply(&self, parsed: &ParsedScript) -> ParsedScript {
        let scenes = parsed
            .scenes
            .iter()
            .enumerate()
            .filter(|(index, _)| self.scene_indices.contains(index))
            .map(|(_, scene)| {
                let mut scene = scene.clone();
                scene.character_names.retain(|name| self.character_names.contains(name));
                scene
            })
            .collect();

        let characters = parsed
            .characters
            .iter()
            .filter(|name| self.character_names.contains(*name))
            .cloned()
            .collect();

        ParsedScript { scenes, characters }
    }
}

/// 过滤后转换为导入数据
pub fn import_selected(parsed: &ParsedScript, selection: &ImportSelection, config: &Conf) -> ImportData {
    convert_to_import_data(&selection.apply(parsed), config)
}
