use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogOutcome {
    Ok,
    Yes,
    No,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseButton {
    Ok,
    Yes,
    No,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKey {
    Enter,
    Escape,
    Char(char),
}

/// What the presentation layer observed while the dialog was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Button(ResponseButton),
    Key(DialogKey),
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogRequest {
    Message {
        title: String,
        message: String,
    },
    YesNoCancel {
        title: String,
        message: String,
        yes_label: String,
        no_label: String,
    },
    Html {
        title: String,
        body: String,
    },
}

impl DialogRequest {
    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Message {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn yes_no_cancel(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::YesNoCancel {
            title: title.into(),
            message: message.into(),
            yes_label: "Yes".to_string(),
            no_label: "No".to_string(),
        }
    }

    pub fn html(title: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        let body = if body.trim_start().to_ascii_lowercase().starts_with("<html>") {
            body
        } else {
            format!("<html>{body}</html>")
        };
        Self::Html {
            title: title.into(),
            body,
        }
    }

    pub fn with_labels(self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        match self {
            Self::YesNoCancel { title, message, .. } => Self::YesNoCancel {
                title,
                message,
                yes_label: yes.into(),
                no_label: no.into(),
            },
            other => other,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Message { title, .. } | Self::YesNoCancel { title, .. } | Self::Html { title, .. } => {
                title
            }
        }
    }

    /// Message text split into display lines; HTML bodies are a single line.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Message { message, .. } | Self::YesNoCancel { message, .. } => {
                message.lines().collect()
            }
            Self::Html { body, .. } => vec![body.as_str()],
        }
    }

    pub fn resolve(&self, event: DialogEvent) -> DialogOutcome {
        match self {
            Self::Message { .. } | Self::Html { .. } => DialogOutcome::Ok,
            Self::YesNoCancel { .. } => match event {
                DialogEvent::Button(ResponseButton::Yes | ResponseButton::Ok)
                | DialogEvent::Key(DialogKey::Enter) => DialogOutcome::Yes,
                DialogEvent::Button(ResponseButton::No) => DialogOutcome::No,
                DialogEvent::Key(DialogKey::Char(key)) => match key.to_ascii_lowercase() {
                    'y' => DialogOutcome::Yes,
                    'n' => DialogOutcome::No,
                    _ => DialogOutcome::Cancel,
                },
                DialogEvent::Button(ResponseButton::Cancel)
                | DialogEvent::Key(DialogKey::Escape)
                | DialogEvent::Closed => DialogOutcome::Cancel,
            },
        }
    }
}
