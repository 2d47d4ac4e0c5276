//! Subscriber registry: kind → ordered dispatch wrappers, plus the
//! handler → wrapper side table used for duplicate detection and removal.

use std::collections::HashMap;
use std::rc::Rc;

use super::handler::{Handler, HandlerId};
use crate::message::{AnyMessage, Message, MessageKind};

/// Type-erased wrapper that narrows a message to its concrete kind and calls
/// the handler.
pub(crate) type Dispatch = Rc<dyn Fn(&dyn AnyMessage)>;

struct Registration {
    handler: HandlerId,
    dispatch: Dispatch,
}

#[derive(Default)]
pub(crate) struct Registry {
    routes: HashMap<MessageKind, Vec<Registration>>,
    handlers: HashMap<HandlerId, (MessageKind, Dispatch)>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn contains(&self, handler: HandlerId) -> bool {
        self.handlers.contains_key(&handler)
    }

    /// Register `handler` for its kind. Returns `false`, leaving the
    /// registry untouched, if it is already registered.
    pub(crate) fn insert<T: Message>(&mut self, handler: &Handler<T>) -> bool {
        let id = handler.id();
        if self.contains(id) {
            return false;
        }

        let kind = MessageKind::of::<T>();
        let target = handler.clone();
        let dispatch: Dispatch = Rc::new(move |message: &dyn AnyMessage| {
            if let Some(message) = message.as_any().downcast_ref::<T>() {
                target.call(message);
            }
        });

        self.handlers.insert(id, (kind, Rc::clone(&dispatch)));
        self.routes.entry(kind).or_default().push(Registration {
            handler: id,
            dispatch,
        });
        true
    }

    /// Unregister `handler`, dropping the kind's entry once it is empty.
    /// Returns the kind it was registered for, or `None` if it never was.
    pub(crate) fn remove(&mut self, handler: HandlerId) -> Option<MessageKind> {
        let (kind, _) = self.handlers.remove(&handler)?;

        if let Some(registrations) = self.routes.get_mut(&kind) {
            registrations.retain(|registration| registration.handler != handler);
            if registrations.is_empty() {
                self.routes.remove(&kind);
            }
        }

        Some(kind)
    }

    pub(crate) fn has_route(&self, kind: &MessageKind) -> bool {
        self.routes.contains_key(kind)
    }

    pub(crate) fn count(&self, kind: &MessageKind) -> usize {
        self.routes.get(kind).map_or(0, Vec::len)
    }

    /// Dispatch wrappers for `kind` in registration order, copied out so the
    /// registry can change while they run.
    pub(crate) fn snapshot(&self, kind: &MessageKind) -> Vec<Dispatch> {
        self.routes
            .get(kind)
            .map(|registrations| {
                registrations
                    .iter()
                    .map(|registration| Rc::clone(&registration.dispatch))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn kinds(&self) -> Vec<MessageKind> {
        self.routes.keys().copied().collect()
    }
}
