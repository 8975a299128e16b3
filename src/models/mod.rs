pub mod parsed_script;
pub mod import_data;
pub mod conf;

pub use parsed_script::{ParsedScene, ParsedScript};
pub use import_data::{CharacterDraft, SceneDraft, ImportData, Gender, CastTier};
pub use conf::Conf;
