use std::collections::HashMap;

use filefox_core::{AppViewModel, Message, MessageId, Role};

/// Incremental transcript renderer. Emits a line for each entry it has not
/// shown yet, and again for an entry whose content was replaced in place
/// (the upload placeholder). User entries are skipped: the prompt line the
/// user just typed is their echo.
pub struct TranscriptPrinter {
    printed: HashMap<MessageId, String>,
}

impl TranscriptPrinter {
    pub fn new() -> Self {
        Self {
            printed: HashMap::new(),
        }
    }

    pub fn render(&mut self, view: &AppViewModel) -> Vec<String> {
        let mut lines = Vec::new();
        for message in &view.messages {
            let unchanged = self
                .printed
                .get(&message.id)
                .is_some_and(|previous| previous == &message.content);
            if unchanged {
                continue;
            }
            self.printed.insert(message.id, message.content.clone());
            if message.role == Role::User {
                continue;
            }
            append_message(&mut lines, message);
        }
        lines
    }
}

fn append_message(lines: &mut Vec<String>, message: &Message) {
    let tag = match message.role {
        Role::User => "you",
        Role::Assistant => "filefox",
        Role::System => "system",
    };
    lines.push(format!("[{tag}] {}", message.content));
    if !message.sources.is_empty() {
        lines.push("  sources:".to_string());
        for source in &message.sources {
            lines.push(format!(
                "    {} ({:.0}% match)",
                source.filename,
                source.score * 100.0
            ));
        }
    }
}
