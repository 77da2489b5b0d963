use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A stored item: flat attribute name to string value.
pub type Item = BTreeMap<String, String>;

/// Decoded form body of a submission request.
pub type FormFields = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Question,
    Answer,
    Query,
    Email,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Question,
        EntityKind::Answer,
        EntityKind::Query,
        EntityKind::Email,
    ];

    #[must_use]
    pub fn default_table(self) -> &'static str {
        match self {
            EntityKind::Question => "Questions",
            EntityKind::Answer => "Answers",
            EntityKind::Query => "Queries",
            EntityKind::Email => "Emails",
        }
    }

    /// Name of the primary key attribute holding the generated id.
    #[must_use]
    pub fn key_attribute(self) -> &'static str {
        match self {
            EntityKind::Question => "questionid",
            EntityKind::Answer => "answerid",
            EntityKind::Query => "queryid",
            EntityKind::Email => "emailid",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Question => "question",
            EntityKind::Answer => "answer",
            EntityKind::Query => "query",
            EntityKind::Email => "email",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Submissions (incoming form data)
// ============================================================================

/// A form submission that becomes one new record of `KIND`.
pub trait Submission: Sized {
    const KIND: EntityKind;

    /// Picks the expected fields out of the form; absent fields stay `None`.
    fn from_form(form: &FormFields) -> Self;

    /// Attributes to persist, without the generated id.
    fn attributes(&self) -> Item;

    /// Human-readable notification text.
    fn summary(&self) -> String;
}

fn field(form: &FormFields, name: &str) -> Option<String> {
    form.get(name).cloned()
}

fn put_opt(item: &mut Item, name: &str, value: Option<&String>) {
    if let Some(value) = value {
        item.insert(name.to_string(), value.clone());
    }
}

fn text(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
}

impl Submission for NewQuestion {
    const KIND: EntityKind = EntityKind::Question;

    fn from_form(form: &FormFields) -> Self {
        Self {
            question: field(form, "question"),
        }
    }

    fn attributes(&self) -> Item {
        let mut item = Item::new();
        put_opt(&mut item, "question", self.question.as_ref());
        item
    }

    fn summary(&self) -> String {
        format!("New question submitted: {}", text(self.question.as_ref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAnswer {
    pub answer: Option<String>,
}

impl Submission for NewAnswer {
    const KIND: EntityKind = EntityKind::Answer;

    fn from_form(form: &FormFields) -> Self {
        Self {
            answer: field(form, "answer"),
        }
    }

    fn attributes(&self) -> Item {
        let mut item = Item::new();
        put_opt(&mut item, "answer", self.answer.as_ref());
        item
    }

    fn summary(&self) -> String {
        format!("New answer submitted: {}", text(self.answer.as_ref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub query: Option<String>,
}

impl Submission for NewQuery {
    const KIND: EntityKind = EntityKind::Query;

    fn from_form(form: &FormFields) -> Self {
        Self {
            name: field(form, "name"),
            email: field(form, "email"),
            query: field(form, "query"),
        }
    }

    fn attributes(&self) -> Item {
        let mut item = Item::new();
        put_opt(&mut item, "name", self.name.as_ref());
        put_opt(&mut item, "email", self.email.as_ref());
        put_opt(&mut item, "query", self.query.as_ref());
        item
    }

    fn summary(&self) -> String {
        format!(
            "New query submitted by {}: {}",
            text(self.name.as_ref()),
            text(self.query.as_ref())
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEmail {
    pub email: Option<String>,
}

impl Submission for NewEmail {
    const KIND: EntityKind = EntityKind::Email;

    fn from_form(form: &FormFields) -> Self {
        Self {
            email: field(form, "email"),
        }
    }

    fn attributes(&self) -> Item {
        let mut item = Item::new();
        put_opt(&mut item, "email", self.email.as_ref());
        item
    }

    fn summary(&self) -> String {
        format!("New email submitted: {}", text(self.email.as_ref()))
    }
}

// ============================================================================
// Stored records
// ============================================================================

/// A record read back from the table of `KIND`.
pub trait Record: Sized {
    const KIND: EntityKind;

    fn from_item(item: Item) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub questionid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl Record for Question {
    const KIND: EntityKind = EntityKind::Question;

    fn from_item(mut item: Item) -> Self {
        Self {
            questionid: item.remove("questionid").unwrap_or_default(),
            question: item.remove("question"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answerid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Record for Answer {
    const KIND: EntityKind = EntityKind::Answer;

    fn from_item(mut item: Item) -> Self {
        Self {
            answerid: item.remove("answerid").unwrap_or_default(),
            answer: item.remove("answer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub queryid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl Record for Query {
    const KIND: EntityKind = EntityKind::Query;

    fn from_item(mut item: Item) -> Self {
        Self {
            queryid: item.remove("queryid").unwrap_or_default(),
            name: item.remove("name"),
            email: item.remove("email"),
            query: item.remove("query"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub emailid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Record for Email {
    const KIND: EntityKind = EntityKind::Email;

    fn from_item(mut item: Item) -> Self {
        Self {
            emailid: item.remove("emailid").unwrap_or_default(),
            email: item.remove("email"),
        }
    }
}
