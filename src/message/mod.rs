//! Message types and kind identifiers.
//!
//! Every value sent through a [`MessageBus`](crate::bus::MessageBus) implements
//! [`Message`]. The bus routes on [`MessageKind`], which is derived from the
//! message's Rust type, so there is exactly one kind per message type.
//!
//! ```
//! use courier::{Message, MessageKind};
//!
//! struct Ping;
//! impl Message for Ping {}
//!
//! let kind = MessageKind::of::<Ping>();
//! assert_eq!(kind, MessageKind::of::<Ping>());
//! ```

mod kind;

pub use kind::MessageKind;

use std::any::Any;

/// A value that can be sent through the bus.
///
/// Implement it by hand (the body can be empty) or with `#[derive(Message)]`
/// when the `derive` feature is enabled.
pub trait Message: Any {
    /// Human readable name of this message kind, used in diagnostics.
    ///
    /// Defaults to the full Rust type name.
    fn kind_name() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}

/// Object-safe view of a message whose concrete type has been erased.
///
/// The pending queue stores messages in this form; dispatch wrappers narrow
/// back to the concrete type through [`AnyMessage::as_any`].
pub trait AnyMessage: Any {
    /// The kind this message is routed by.
    fn kind(&self) -> MessageKind;

    /// The message as `&dyn Any`, for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Message> AnyMessage for T {
    #[inline]
    fn kind(&self) -> MessageKind {
        MessageKind::of::<T>()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl std::fmt::Debug for dyn AnyMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyMessage")
            .field("kind", &self.kind())
            .finish_non_exhaustive()
    }
}
