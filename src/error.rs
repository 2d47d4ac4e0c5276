use std::fmt;

use crate::message::MessageKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    /// `deliver_next` was called with nothing pending.
    EmptyQueue,
    /// An args-based send could not build the target message.
    Construction {
        kind: MessageKind,
        reason: String,
    },
    /// Bus configuration text could not be parsed.
    Config(String),
}

impl BusError {
    pub(crate) fn construction(kind: MessageKind, reason: impl fmt::Display) -> Self {
        BusError::Construction {
            kind,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::EmptyQueue => write!(f, "no pending messages to deliver"),
            BusError::Construction { kind, reason } => {
                write!(f, "failed to construct message {}: {}", kind, reason)
            }
            BusError::Config(msg) => write!(f, "invalid bus configuration: {}", msg),
        }
    }
}

impl std::error::Error for BusError {}
