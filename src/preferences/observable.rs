/// Handle returned by [`Observable::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A value with change notification
pub struct Observable<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify every subscriber
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.value);
        }
    }

    pub fn update<F: FnOnce(&T) -> T>(&mut self, f: F) {
        let value = f(&self.value);
        self.set(value);
    }

    /// Register a callback run after each `set`
    pub fn subscribe<F: FnMut(&T) + 'static>(&mut self, subscriber: F) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscribers_see_new_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut value = Observable::new(1);

        let sink = Rc::clone(&seen);
        value.subscribe(move |v| sink.borrow_mut().push(*v));

        value.set(2);
        value.update(|v| v * 10);
        assert_eq!(*value.get(), 20);
        assert_eq!(*seen.borrow(), vec![2, 20]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut value = Observable::new("About".to_string());

        let counter = Rc::clone(&count);
        let id = value.subscribe(move |_| *counter.borrow_mut() += 1);
        value.set("Projects".to_string());
        assert!(value.unsubscribe(id));
        assert!(!value.unsubscribe(id));
        value.set("Contact".to_string());

        assert_eq!(*count.borrow(), 1);
        assert_eq!(value.get(), "Contact");
    }
}
