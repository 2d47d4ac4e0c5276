
use std::cell::RefCell;
use std::rc::Rc;

use courier::{Handler, MessageBus};

use messages::{Scored, Tick, Unheard};

type Calls = Rc<RefCell<Vec<&'static str>>>;

fn tagged(calls: &Calls, tag: &'static str) -> Handler<Tick> {
    let calls = calls.clone();
    Handler::new(move |_: &Tick| calls.borrow_mut().push(tag))
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn handlers_run_in_registration_order() {
    let bus = MessageBus::new(true, false);
    let calls: Calls = Rc::default();

    bus.add_listener(&tagged(&calls, "A"));
    bus.add_listener(&tagged(&calls, "B"));

    bus.send(Tick);

    assert_eq!(*calls.borrow(), vec!["A", "B"]);
}

#[test]
fn every_handler_runs_exactly_once_before_send_returns() {
    let bus = MessageBus::new(true, false);
    let calls: Calls = Rc::default();

    for tag in ["first", "second", "third"] {
        bus.add_listener(&tagged(&calls, tag));
    }

    bus.send(Tick);
    assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);

    bus.send(Tick);
    assert_eq!(calls.borrow().len(), 6);
}

#[test]
fn re_added_handler_moves_to_the_back() {
    let bus = MessageBus::new(true, false);
    let calls: Calls = Rc::default();
    let a = tagged(&calls, "A");
    let b = tagged(&calls, "B");

    bus.add_listener(&a);
    bus.add_listener(&b);
    assert!(bus.remove_listener(&a));
    bus.add_listener(&a);

    bus.send(Tick);

    assert_eq!(*calls.borrow(), vec!["B", "A"]);
}

// =============================================================================
// Routing
// =============================================================================

#[test]
fn messages_reach_only_their_kind() {
    let bus = MessageBus::new(true, false);
    let calls: Calls = Rc::default();
    let scores = Rc::new(RefCell::new(Vec::new()));

    bus.add_listener(&tagged(&calls, "tick"));
    let sink = scores.clone();
    bus.add_listener(&Handler::new(move |s: &Scored| {
        sink.borrow_mut().push((s.player, s.points))
    }));

    bus.send(Scored {
        player: "ana",
        points: 10,
    });

    assert!(calls.borrow().is_empty());
    assert_eq!(*scores.borrow(), vec![("ana", 10)]);
}

#[test]
fn send_to_kind_without_listeners_does_nothing() {
    let bus = MessageBus::new(true, false);
    let calls: Calls = Rc::default();
    bus.add_listener(&tagged(&calls, "tick"));

    bus.send(Unheard);

    assert!(!bus.has_listeners::<Unheard>());
    assert!(calls.borrow().is_empty());
    assert_eq!(bus.pending_len(), 0);
}

// =============================================================================
// Registration semantics
// =============================================================================

#[test]
fn duplicate_registration_keeps_a_single_subscription() {
    let bus = MessageBus::new(true, false);
    let calls: Calls = Rc::default();
    let handler = tagged(&calls, "once");

    bus.add_listener(&handler);
    bus.add_listener(&handler);
    bus.add_listener(&handler.clone());

    assert_eq!(bus.listener_count::<Tick>(), 1);
    bus.send(Tick);
    assert_eq!(*calls.borrow(), vec!["once"]);
}

#[test]
fn removed_handler_stops_receiving() {
    let bus = MessageBus::new(true, false);
    let calls: Calls = Rc::default();
    let a = tagged(&calls, "A");
    let b = tagged(&calls, "B");
    bus.add_listener(&a);
    bus.add_listener(&b);

    assert!(bus.remove_listener(&a));
    assert!(!bus.remove_listener(&a));
    bus.send(Tick);

    assert_eq!(*calls.borrow(), vec!["B"]);
    assert!(bus.has_listeners::<Tick>());

    assert!(bus.remove_listener(&b));
    assert!(!bus.has_listeners::<Tick>());
}

#[test]
fn subscription_guard_scopes_a_handler() {
    let bus = MessageBus::new(true, false);
    let calls: Calls = Rc::default();
    let handler = tagged(&calls, "scoped");

    {
        let _subscription = bus.subscribe(&handler);
        bus.send(Tick);
    }
    bus.send(Tick);

    assert_eq!(*calls.borrow(), vec!["scoped"]);
    assert!(!bus.is_listener(&handler));
}
