// ============================================================================
// REACTIVITY - value cell with change subscribers
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Value that calls its subscribers after every `update`.
/// Owners share it through an `Rc`.
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Callback>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Read through a closure without handing out the `RefCell`
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// The write borrow ends before any subscriber runs
    pub fn update(&self, updater: impl FnOnce(&mut T)) {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // snapshot, so a callback may subscribe or update again
        let subscribers = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribers_see_the_updated_value() {
        let state = Rc::new(ReactiveState::new(0));
        let seen = Rc::new(Cell::new(-1));

        let (reader, sink) = (state.clone(), seen.clone());
        state.subscribe(move || sink.set(reader.with(|v| *v)));

        state.update(|v| *v = 3);
        assert_eq!(seen.get(), 3);
        state.update(|v| *v += 4);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn a_subscriber_may_subscribe_while_being_notified() {
        let state = Rc::new(ReactiveState::new(String::from("a")));
        let calls = Rc::new(Cell::new(0));

        let (inner, counter) = (state.clone(), calls.clone());
        state.subscribe(move || {
            let counter = counter.clone();
            inner.subscribe(move || counter.set(counter.get() + 1));
        });

        state.update(|v| v.push('b'));
        assert_eq!(calls.get(), 0);
        state.update(|v| v.push('c'));

        assert_eq!(state.with(|v| v.clone()), "abc");
        assert_eq!(calls.get(), 1);
    }
}
