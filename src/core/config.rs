use std::env;
use std::path::PathBuf;

use super::models::EntityKind;
use crate::errors::BoardError;

/// Table name per entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub questions: String,
    pub answers: String,
    pub queries: String,
    pub emails: String,
}

impl TableNames {
    #[must_use]
    pub fn for_kind(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Question => &self.questions,
            EntityKind::Answer => &self.answers,
            EntityKind::Query => &self.queries,
            EntityKind::Email => &self.emails,
        }
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            questions: EntityKind::Question.default_table().to_string(),
            answers: EntityKind::Answer.default_table().to_string(),
            queries: EntityKind::Query.default_table().to_string(),
            emails: EntityKind::Email.default_table().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sns_topic_arn: Option<String>,
    pub pages_dir: PathBuf,
    pub public_dir: PathBuf,
    pub tables: TableNames,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns [`BoardError::ConfigError`] if a table override is set to an
    /// empty value.
    pub fn from_env() -> Result<Self, BoardError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ConfigError`] if a table override is set to an
    /// empty value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table = |name: &str, kind: EntityKind| -> Result<String, BoardError> {
            match lookup(name) {
                Some(value) if value.trim().is_empty() => Err(BoardError::ConfigError(format!(
                    "{name}: must not be empty when set"
                ))),
                Some(value) => Ok(value.trim().to_string()),
                None => Ok(kind.default_table().to_string()),
            }
        };

        Ok(Self {
            sns_topic_arn: lookup("SNS_TOPIC_ARN").filter(|arn| !arn.trim().is_empty()),
            pages_dir: lookup("PAGES_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from),
            public_dir: lookup("PUBLIC_DIR").map_or_else(|| PathBuf::from("public"), PathBuf::from),
            tables: TableNames {
                questions: table("QUESTIONS_TABLE", EntityKind::Question)?,
                answers: table("ANSWERS_TABLE", EntityKind::Answer)?,
                queries: table("QUERIES_TABLE", EntityKind::Query)?,
                emails: table("EMAILS_TABLE", EntityKind::Email)?,
            },
        })
    }
}
