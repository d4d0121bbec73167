pub type MemoId = i64;

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Memo {
    pub id: MemoId,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("memo title must not be empty")]
    EmptyTitle,
}

/// An omitted `content` key and an explicit `null` both mean "no content"
/// to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MemoContent {
    #[default]
    Missing,
    Null,
    Text(String),
}

impl MemoContent {
    pub fn from_input(input: &str) -> Self {
        match input.trim() {
            "" => Self::Null,
            text => Self::Text(text.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Missing | Self::Null => None,
        }
    }
}

impl serde::Serialize for MemoContent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_some(text),
            Self::Missing | Self::Null => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MemoCreate {
    title: String,
    #[serde(skip_serializing_if = "MemoContent::is_missing")]
    content: MemoContent,
}

impl MemoCreate {
    pub fn new(title: &str, content: MemoContent) -> Result<Self, ModelError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ModelError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            content,
        })
    }

    pub fn from_form(title: &str, content: &str) -> Option<Self> {
        Self::new(title, MemoContent::from_input(content)).ok()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &MemoContent {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(
            MemoCreate::new("   ", MemoContent::Missing),
            Err(ModelError::EmptyTitle)
        );
        assert_eq!(MemoCreate::from_form("\t\n", "body"), None);
    }

    #[test]
    fn form_input_is_trimmed() {
        let payload = MemoCreate::from_form("  Groceries ", "  milk, eggs \n").unwrap();
        assert_eq!(payload.title(), "Groceries");
        assert_eq!(payload.content(), &MemoContent::Text("milk, eggs".into()));
    }

    #[test]
    fn blank_content_becomes_null() {
        assert_eq!(MemoContent::from_input(""), MemoContent::Null);
        assert_eq!(MemoContent::from_input("   "), MemoContent::Null);
        let payload = MemoCreate::from_form("B", " ").unwrap();
        assert_eq!(payload.content(), &MemoContent::Null);
        assert_eq!(payload.content().as_text(), None);
    }
}
