use std::fmt;

/// Stable per-session identifier for a transcript entry. Ids are never
/// reused, so a settling operation can address its placeholder even when
/// other flows appended messages in the meantime.
pub type MessageId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::System => write!(f, "system"),
        }
    }
}

/// Cited evidence attached to a successful assistant answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRef {
    pub filename: String,
    /// Relevance in [0, 1].
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    /// Non-empty only on assistant answers with retrieved evidence.
    pub sources: Vec<SourceRef>,
}

/// Ordered message log. Append-only, except that a pending operation may
/// replace the content of the entry it created, and the clear flow may
/// reset the whole log to a single fresh entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    entries: Vec<Message>,
    next_id: MessageId,
}

impl Transcript {
    pub fn push(&mut self, role: Role, content: impl Into<String>) -> MessageId {
        self.push_with_sources(role, content, Vec::new())
    }

    pub fn push_with_sources(
        &mut self,
        role: Role,
        content: impl Into<String>,
        sources: Vec<SourceRef>,
    ) -> MessageId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Message {
            id,
            role,
            content: content.into(),
            sources,
        });
        id
    }

    /// Replace the content of the entry with the given id, keeping its
    /// position and role. Returns false when the id is no longer present
    /// (the entry was discarded by a clear that settled first).
    pub fn replace(&mut self, id: MessageId, content: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.content = content.into();
                entry.sources.clear();
                true
            }
            None => false,
        }
    }

    /// Discard all entries and start over with a single fresh one.
    /// Ids keep incrementing so stale ids never alias new entries.
    pub fn reset_with(&mut self, role: Role, content: impl Into<String>) -> MessageId {
        self.entries.clear();
        self.push(role, content)
    }

    pub fn messages(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
