//! FIFO of messages awaiting queued delivery.

use std::collections::VecDeque;

use crate::message::{AnyMessage, MessageKind};

#[derive(Default)]
pub(crate) struct PendingQueue {
    messages: VecDeque<Box<dyn AnyMessage>>,
}

impl PendingQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, message: Box<dyn AnyMessage>) {
        self.messages.push_back(message);
    }

    pub(crate) fn pop(&mut self) -> Option<Box<dyn AnyMessage>> {
        self.messages.pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.messages.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Kinds of the pending messages, oldest first.
    pub(crate) fn kinds(&self) -> Vec<MessageKind> {
        self.messages.iter().map(|message| message.kind()).collect()
    }
}
