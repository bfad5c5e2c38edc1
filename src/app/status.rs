#[derive(Debug, Clone)]
pub(crate) struct StatusLine {
    message: String,
}

pub(crate) const READY_STATUS: &str = "Ready. Press Ctrl+S to save, Ctrl+Q to leave.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn value_updated(&mut self) {
        self.message = "Value updated".to_string();
    }

    pub fn saved(&mut self, name: &str) {
        self.message = format!("Saved \"{name}\"");
    }

    pub fn pending_cancel(&mut self) {
        self.message = "Unsaved changes. Press Ctrl+Q again to discard the draft.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
