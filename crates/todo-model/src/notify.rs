//! Change Notification Primitives
//!
//! Two subscribe/notify containers with deliberately different policies:
//! `Notifier` fans out on every `set`, `ObservableField` only when the value
//! actually changed. Listeners fire synchronously, in subscription order,
//! within the triggering call.

type Listener<T> = Box<dyn FnMut(&T)>;

/// Single-value container that notifies on every `set`, including when the
/// new value equals the old one.
pub struct Notifier<T> {
    value: T,
    listeners: Vec<Listener<T>>,
}

impl<T> Notifier<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    /// Borrow the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register a listener. Listeners are never removed; they run in
    /// registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the value and fan out to every listener.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Re-announce the current value without replacing it.
    pub fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.value);
        }
    }
}

/// Single-value container that skips notification when `set` is called with
/// a value equal to the current one.
pub struct ObservableField<T: PartialEq> {
    value: T,
    listeners: Vec<Listener<T>>,
}

impl<T: PartialEq> ObservableField<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the value; listeners fire only when it changed.
    pub fn set(&mut self, value: T) {
        if self.value == value {
            return;
        }
        self.value = value;
        for listener in &mut self.listeners {
            listener(&self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifier_fires_on_every_set_even_when_equal() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new(0u32);
        let sink = seen.clone();
        notifier.subscribe(move |v| sink.borrow_mut().push(*v));

        notifier.set(1);
        notifier.set(1);
        assert_eq!(*seen.borrow(), vec![1, 1]);
    }

    #[test]
    fn notifier_listeners_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new(());
        for tag in ["first", "second", "third"] {
            let sink = order.clone();
            notifier.subscribe(move |_| sink.borrow_mut().push(tag));
        }
        notifier.set(());
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn notifier_get_returns_latest_value() {
        let mut notifier = Notifier::new("a".to_string());
        notifier.set("b".to_string());
        assert_eq!(notifier.get(), "b");
    }

    #[test]
    fn observable_field_skips_equal_values() {
        let count = Rc::new(RefCell::new(0));
        let mut field = ObservableField::new(5u32);
        let sink = count.clone();
        field.subscribe(move |_| *sink.borrow_mut() += 1);

        field.set(6);
        field.set(6);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(*field.get(), 6);
    }

    #[test]
    fn observable_field_fires_on_each_distinct_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut field = ObservableField::new(0u32);
        let sink = seen.clone();
        field.subscribe(move |v| sink.borrow_mut().push(*v));

        field.set(1);
        field.set(2);
        field.set(1);
        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }
}
