use crate::application::port::IdGenerator;
use crate::domain::model::ProjectGuid;

/// ランダムな v4 UUID を生成する。既存プロジェクトとの重複は確認しない。
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> ProjectGuid {
        ProjectGuid::new_v4()
    }
}
