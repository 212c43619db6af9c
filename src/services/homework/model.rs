use serde::Deserialize;
use serde_json::Value;

/// Review states reported by the API
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HomeworkStatus {
    Reviewing,
    Approved,
    Rejected,
}

impl HomeworkStatus {
    /// Verdict text shown to the student
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HomeworkError {
    #[error("homework has no '{0}' field")]
    MissingField(&'static str),
    #[error("unknown homework status '{0}'")]
    UnknownStatus(String),
}

/// One entry of the `homeworks` list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

impl TryFrom<&Value> for HomeworkRecord {
    type Error = HomeworkError;

    fn try_from(homework: &Value) -> Result<Self, Self::Error> {
        let name = homework
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(HomeworkError::MissingField("homework_name"))?;

        let raw_status = homework
            .get("status")
            .and_then(Value::as_str)
            .ok_or(HomeworkError::MissingField("status"))?;

        let status = HomeworkStatus::deserialize(Value::from(raw_status))
            .map_err(|_| HomeworkError::UnknownStatus(raw_status.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }
}

/// Build the notification text for a single homework entry
pub fn parse_status(homework: &Value) -> Result<String, HomeworkError> {
    HomeworkRecord::try_from(homework).map(|record| record.message())
}
