use serde::{Deserialize, Serialize};

/// 从剧本中还原出的一个场景
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedScene {
    /// 场号：标题里显式给出的编号（如 "12A"），否则为自增计数
    pub scene_number: String,
    /// 内外景标记，如 "INT"、"EXT"、"INT./EXT"，已去掉末尾句点
    pub int_ext: String,
    pub location: String,
    /// 时间（大写），没有则为空
    pub time_of_day: String,
    /// 动作描述，以单个空格拼接，有长度上限
    pub description: String,
    /// 本场出现的角色，按出现顺序，场内去重
    pub character_names: Vec<String>,
}

impl ParsedScene {
    pub fn new(
        scene_number: String,
        int_ext: String,
        location: String,
        time_of_day: String,
    ) -> Self {
        ParsedScene {
            scene_number,
            int_ext,
            location,
            time_of_day,
            description: String::new(),
            character_names: Vec::new(),
        }
    }

    /// 添加角色，已存在（大小写敏感）则忽略
    pub fn add_character(&mut self, name: &str) {
        if !self.character_names.iter().any(|n| n == name) {
            self.character_names.push(name.to_string());
        }
    }

    /// 追加一段描述文本
    ///
    /// 描述已达到 `limit` 个字符时不再追加；追加后超出部分直接丢弃
    pub fn append_description(&mut self, text: &str, limit: usize) {
        let current_len = self.description.chars().count();
        if current_len >= limit {
            return;
        }
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(text);

        let truncated_len = crate::utils::truncate_chars(&self.description, limit).len();
        self.description.truncate(truncated_len);
    }
}

/// 解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedScript {
    /// 按文档顺序排列的场景
    pub scenes: Vec<ParsedScene>,
    /// 全文出现过的角色名，去重并升序排列
    pub characters: Vec<String>,
}

impl ParsedScript {
    /// 没有任何场景和角色，即没有可导入的内容
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty() && self.characters.is_empty()
    }
}
