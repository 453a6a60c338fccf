use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Message, Output};

#[derive(Clone, Default)]
pub struct MockOutput {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MockOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::replace(&mut *self.messages.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages.read().iter().any(|m| m == message)
    }

    pub fn count_matching<F: Fn(&Message) -> bool>(&self, predicate: F) -> usize {
        self.messages.read().iter().filter(|m| predicate(m)).count()
    }
}

impl Output for MockOutput {
    fn say(&self, message: &Message) {
        self.messages.write().push(message.clone());
    }
}
