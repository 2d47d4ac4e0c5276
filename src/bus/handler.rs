//! Handler values and their identity.

use std::fmt;
use std::rc::Rc;

use crate::message::Message;

/// Identity of a registered handler.
///
/// Two [`Handler`]s have the same id exactly when one is a clone of the
/// other. The id stays unique while any clone is alive, and the registry
/// keeps a clone for as long as the handler is subscribed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(usize);

/// A callable invoked with messages of kind `T`.
///
/// Handlers are reference counted: cloning one yields the same handler, which
/// is how a caller removes or checks a subscription later.
///
/// ```
/// use courier::{Handler, Message};
///
/// struct Ping;
/// impl Message for Ping {}
///
/// let handler = Handler::new(|_: &Ping| {});
/// let same = handler.clone();
/// let other = Handler::new(|_: &Ping| {});
///
/// assert_eq!(handler.id(), same.id());
/// assert_ne!(handler.id(), other.id());
/// ```
pub struct Handler<T: Message> {
    callback: Rc<dyn Fn(&T)>,
}

impl<T: Message> Handler<T> {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    pub fn id(&self) -> HandlerId {
        HandlerId(Rc::as_ptr(&self.callback) as *const () as usize)
    }

    pub fn call(&self, message: &T) {
        (self.callback)(message)
    }
}

impl<T: Message> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<T: Message> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl<T: Message> Eq for Handler<T> {}

impl<T: Message> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("kind", &T::kind_name())
            .field("id", &self.id())
            .finish()
    }
}
