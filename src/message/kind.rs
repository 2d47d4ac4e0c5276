use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Message;

/// Identifier of a message type, used as the routing key of the bus.
///
/// Equality and hashing use the [`TypeId`] only. The name is carried along
/// for log lines and `Display`.
#[derive(Clone, Copy)]
pub struct MessageKind {
    id: TypeId,
    name: &'static str,
}

impl MessageKind {
    /// The kind of message type `T`.
    pub fn of<T: Message>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::kind_name(),
        }
    }

    /// The underlying type identifier.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The diagnostic name of this kind.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for MessageKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MessageKind {}

impl Hash for MessageKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageKind({})", self.name)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
