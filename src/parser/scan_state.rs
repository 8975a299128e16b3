use std::collections::BTreeSet;
use log::debug;
use crate::models::{Conf, ParsedScene, ParsedScript};
use crate::parser::classifier::{LineKind, SceneHeading};

/// 扫描累加器，两种扫描器共用
///
/// 以 `fold` 的方式逐行（逐段落）推进：遇到场景标题时收起当前场景，
/// 结束时再收起最后一个场景。
#[derive(Debug)]
pub struct ScanState {
    scenes: Vec<ParsedScene>,
    current_scene: Option<ParsedScene>,
    auto_scene_number: usize,
    characters: BTreeSet<String>,
    description_limit: usize,
}

impl ScanState {
    pub fn new(config: &Conf) -> Self {
        ScanState {
            scenes: Vec::new(),
            current_scene: None,
            auto_scene_number: 0,
            characters: BTreeSet::new(),
            description_limit: config.description_limit,
        }
    }

    /// 处理一条分类结果，用于 `Iterator::fold`
    pub fn step(mut self, kind: LineKind) -> Self {
        match kind {
            LineKind::Heading(heading) => self.open_scene(heading),
            // 第一个场景标题之前的内容全部忽略
            _ if self.current_scene.is_none() => {}
            LineKind::CharacterCue(name) => self.add_character(name),
            LineKind::Action(text) => {
                let limit = self.description_limit;
                if let Some(scene) = self.current_scene.as_mut() {
                    scene.append_description(&text, limit);
                }
            }
            LineKind::Noise => {}
        }
        self
    }

    /// 收起最后一个场景，生成解析结果
    pub fn finish(mut self) -> ParsedScript {
        self.flush();
        ParsedScript {
            scenes: self.scenes,
            characters: self.characters.into_iter().collect(),
        }
    }

    fn open_scene(&mut self, heading: SceneHeading) {
        self.flush();
        // 每个标题都会自增，不论是否显式带场号
        self.auto_scene_number += 1;
        let scene_number = heading
            .number
            .unwrap_or_else(|| self.auto_scene_number.to_string());
        self.current_scene = Some(ParsedScene::new(
            scene_number,
            heading.int_ext,
            heading.location,
            heading.time_of_day,
        ));
    }

    fn add_character(&mut self, name: String) {
        if let Some(scene) = self.current_scene.as_mut() {
            debug!("场景 {} 角色: {}", scene.scene_number, name);
            scene.add_character(&name);
            self.characters.insert(name);
        }
    }

    fn flush(&mut self) {
        if let Some(scene) = self.current_scene.take() {
            debug!(
                "场景 {} 结束: {} {} - {}, 角色 {} 个",
                scene.scene_number,
                scene.int_ext,
                scene.location,
                scene.time_of_day,
                scene.character_names.len()
            );
            self.scenes.push(scene);
        }
    }
}
