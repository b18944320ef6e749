// Host-side tests for the observable cell.

use portfolio_core::Signal;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn set_notifies_subscribers_with_new_value() {
    let s = Signal::new(1);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let _sub = s.subscribe(move |v| log.borrow_mut().push(*v));

    assert!(s.set(2));
    assert!(s.set(3));
    assert_eq!(*seen.borrow(), vec![2, 3]);
    assert_eq!(s.get(), 3);
}

#[test]
fn unchanged_value_does_not_notify() {
    let s = Signal::new("a".to_string());
    let hits = Rc::new(RefCell::new(0));
    let h = hits.clone();
    let _sub = s.subscribe(move |_| *h.borrow_mut() += 1);

    assert!(!s.set("a".to_string()));
    assert_eq!(*hits.borrow(), 0);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let s = Signal::new(0);
    let hits = Rc::new(RefCell::new(0));
    let h = hits.clone();
    let sub = s.subscribe(move |_| *h.borrow_mut() += 1);
    assert_eq!(s.subscriber_count(), 1);

    s.set(1);
    drop(sub);
    assert_eq!(s.subscriber_count(), 0);
    s.set(2);
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn cancel_matches_drop() {
    let s = Signal::new(0);
    let sub = s.subscribe(|_| {});
    sub.cancel();
    assert_eq!(s.subscriber_count(), 0);
}

#[test]
fn subscription_outliving_signal_is_harmless() {
    let sub = {
        let s = Signal::new(0);
        s.subscribe(|_| {})
    };
    drop(sub);
}

#[test]
fn callback_may_read_the_signal() {
    let s = Signal::new(0);
    let reader = s.clone();
    let seen = Rc::new(RefCell::new(None));
    let out = seen.clone();
    let _sub = s.subscribe(move |_| *out.borrow_mut() = Some(reader.get()));
    s.set(7);
    assert_eq!(*seen.borrow(), Some(7));
}
