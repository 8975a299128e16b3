use std::collections::BTreeMap;
use crate::models::{CharacterDraft, Conf, ImportData, ParsedScene, ParsedScript, SceneDraft};
use crate::utils::truncate_chars;

/// 拼接剧本地点，如 "INT. COFFEE SHOP"；没有内外景标记时只保留地点
pub fn script_location(scene: &ParsedScene) -> String {
    if scene.int_ext.is_empty() {
        scene.location.clone()
    } else {
        format!("{}. {}", scene.int_ext, scene.location)
    }
}

/// 将解析结果转换为导入数据
///
/// 调用方应先按用户选择过滤（见 [`ImportSelection`](crate::import::ImportSelection)）。
/// 纯数据转换，不做校验，不会失败。与项目已有角色的合并（名字不区分大小写）由调用方负责。
pub fn convert_to_import_data(parsed: &ParsedScript, config: &Conf) -> ImportData {
    let characters = parsed
        .characters
        .iter()
        .map(|name| CharacterDraft {
            name: name.clone(),
            gender: config.default_gender,
            cast_type: config.default_cast_tier,
        })
        .collect();

    let scenes = parsed
        .scenes
        .iter()
        .map(|scene| SceneDraft {
            scene_number: scene.scene_number.clone(),
            script_location: script_location(scene),
            time_day: scene.time_of_day.clone(),
            shoot_day: None,
            description: truncate_chars(&scene.description, config.import_description_limit).to_string(),
        })
        .collect();

    // 场号重复时后出现的覆盖先出现的
    let mut character_scene_map = BTreeMap::new();
    for scene in &parsed.scenes {
        character_scene_map.insert(scene.scene_number.clone(), scene.character_names.clone());
    }

    ImportData { characters, scenes, character_scene_map }
}
