use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Описание того, как было запущено приложение (action исходного intent и т.п.).
/// Порт не интерпретирует содержимое, только передаёт его дальше.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

impl LaunchSource {
    pub fn from_action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            extras: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// Ссылка на строковый ресурс с подписью действия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLabelRef(pub u32);

/// Статистика очереди отправки событий
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchStats {
    pub enqueued: u64,
    pub delivered: u64,
    pub dropped: u64,
    pub is_running: bool,
}
