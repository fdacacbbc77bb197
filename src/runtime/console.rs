use super::outbox::Outbox;
use crate::core::prelude::*;

/// The server console. Holds every permission and has no location.
#[derive(Debug, Clone)]
pub struct ConsoleSender {
    locale: String,
    outbox: Outbox,
}

impl ConsoleSender {
    pub fn new(locale: impl Into<String>, outbox: Outbox) -> Self {
        Self {
            locale: locale.into(),
            outbox,
        }
    }

    pub fn outbox(&self) -> &Outbox {
        &self.outbox
    }
}

impl Caller for ConsoleSender {
    fn name(&self) -> &str {
        "CONSOLE"
    }

    fn kind(&self) -> SenderKind {
        SenderKind::Console
    }

    fn locale(&self) -> &str {
        &self.locale
    }

    fn has_permission(&self, _node: &str) -> bool {
        true
    }

    fn send_message(&self, message: &str) {
        self.outbox.push(message);
    }
}
