use std::cell::RefCell;
use std::rc::Rc;

use dragdom::Viewport;
use handlekit::observer::channel;
use handlekit::{Handle, HandleOptions, ModuleContext, ProgressObservers};

fn context() -> ModuleContext {
    ModuleContext::new(dragdom::Element::div(), Viewport::new(200.0, 100.0))
}

#[test]
fn test_observers_notified_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut observers = ProgressObservers::new();

    let a = Rc::clone(&log);
    observers.subscribe(move |p: f64| a.borrow_mut().push(("a", p)));
    let b = Rc::clone(&log);
    observers.subscribe(move |p: f64| b.borrow_mut().push(("b", p)));

    observers.notify(0.5);

    assert_eq!(*log.borrow(), vec![("a", 0.5), ("b", 0.5)]);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut handle = Handle::new(HandleOptions::new(), &context()).expect("handle builds");
    let sink = Rc::clone(&calls);
    let id = handle.subscribe(move |p: f64| sink.borrow_mut().push(p));

    handle.set_progress(0.25, true);
    assert!(handle.unsubscribe(id));
    assert!(!handle.unsubscribe(id));
    handle.set_progress(0.5, true);

    assert_eq!(*calls.borrow(), vec![0.25]);
}

#[test]
fn test_channel_observer_receives_changes() {
    let (observer, mut rx) = channel();
    let mut handle =
        Handle::new(HandleOptions::new().on_progress(observer), &context()).expect("handle builds");

    handle.on_pan(50.0, 0.0);
    handle.on_pan(50.0, 0.0);
    handle.on_pan(100.0, 0.0);

    assert_eq!(rx.try_recv().ok(), Some(0.25));
    assert_eq!(rx.try_recv().ok(), Some(0.5));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_dropped_receiver_is_ignored() {
    let (observer, rx) = channel();
    drop(rx);
    let mut handle =
        Handle::new(HandleOptions::new().on_progress(observer), &context()).expect("handle builds");

    handle.set_progress(0.5, true);

    assert_eq!(handle.progress(), 0.5);
}

#[tokio::test]
async fn test_channel_observer_across_tasks() {
    let (observer, mut rx) = channel();
    let reader = tokio::spawn(async move {
        let mut seen = Vec::new();
        while let Some(p) = rx.recv().await {
            seen.push(p);
        }
        seen
    });

    {
        let mut handle = Handle::new(HandleOptions::new().on_progress(observer), &context())
            .expect("handle builds");
        handle.set_progress(0.1, true).set_progress(0.9, true);
        // Dropping the handle closes the channel
    }

    let seen = reader.await.expect("reader task");
    assert_eq!(seen, vec![0.1, 0.9]);
}
