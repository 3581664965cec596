//! Each stage of an import lives in its own module and takes a [`Reporter`]
//! for progress. Stages never print; what happens to their messages is up to
//! the reporter the caller hands in.

pub mod convert;
pub mod output;
pub mod read;
pub mod write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Receives progress messages from the import stages.
pub trait Reporter {
    fn report(&mut self, message: CmdMessage);
}

/// Drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {
    fn report(&mut self, _message: CmdMessage) {}
}

/// Keeps messages in order, for callers that render them later.
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    pub messages: Vec<CmdMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}

impl Reporter for MessageLog {
    fn report(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
