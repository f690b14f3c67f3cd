use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use yew::Callback;

pub const GUEST_LABEL: &str = "Invitado";

/// The signed-in principal as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    pub fn anonymous(uid: impl Into<String>) -> Self {
        Identity {
            uid: uid.into(),
            email: None,
        }
    }

    /// Text shown in the header badge: email, else uid, else the guest label.
    pub fn display_label(&self) -> &str {
        self.email
            .as_deref()
            .filter(|email| !email.is_empty())
            .or_else(|| Some(self.uid.as_str()).filter(|uid| !uid.is_empty()))
            .unwrap_or(GUEST_LABEL)
    }
}

type Listener = Callback<Option<Identity>>;

/// Current identity plus everyone who wants to hear about changes to it.
#[derive(Default)]
pub struct IdentityStore {
    current: RefCell<Option<Identity>>,
    listeners: RefCell<Vec<(usize, Listener)>>,
    next_id: Cell<usize>,
}

impl IdentityStore {
    pub fn new(initial: Option<Identity>) -> Rc<Self> {
        Rc::new(IdentityStore {
            current: RefCell::new(initial),
            ..Default::default()
        })
    }

    pub fn current(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    /// Registers `listener` and hands it the current value right away.
    /// The listener stays registered until the returned handle is dropped.
    pub fn subscribe(self: &Rc<Self>, listener: Listener) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, listener.clone()));

        listener.emit(self.current());

        Subscription {
            store: Rc::downgrade(self),
            id,
        }
    }

    /// Stores `value` and notifies listeners, unless nothing changed.
    pub fn replace(&self, value: Option<Identity>) {
        if *self.current.borrow() == value {
            return;
        }
        *self.current.borrow_mut() = value.clone();

        // Snapshot so listeners can (un)subscribe while being notified.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener.emit(value.clone());
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn unsubscribe(&self, id: usize) {
        self.listeners.borrow_mut().retain(|(other, _)| *other != id);
    }
}

/// Handle for a registered listener. Dropping it deregisters the listener.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<IdentityStore>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.unsubscribe(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<Option<Identity>>>>, Listener) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Callback::from(move |value| sink.borrow_mut().push(value)))
    }

    #[test]
    fn test_label_prefers_email() {
        let identity = Identity {
            uid: "abc123".to_string(),
            email: Some("a@b.com".to_string()),
        };
        assert_eq!(identity.display_label(), "a@b.com");
    }

    #[test]
    fn test_label_falls_back_to_uid_then_guest() {
        assert_eq!(Identity::anonymous("abc123").display_label(), "abc123");

        let blank = Identity {
            uid: String::new(),
            email: Some(String::new()),
        };
        assert_eq!(blank.display_label(), GUEST_LABEL);
    }

    #[test]
    fn test_subscribe_delivers_current_value() {
        let store = IdentityStore::new(Some(Identity::anonymous("abc123")));
        let (seen, listener) = recorder();

        let _sub = store.subscribe(listener);
        assert_eq!(*seen.borrow(), vec![Some(Identity::anonymous("abc123"))]);
    }

    #[test]
    fn test_replace_notifies_in_order_and_skips_duplicates() {
        let store = IdentityStore::new(None);
        let (seen, listener) = recorder();
        let _sub = store.subscribe(listener);

        store.replace(Some(Identity::anonymous("u1")));
        store.replace(Some(Identity::anonymous("u1")));
        store.replace(None);

        assert_eq!(
            *seen.borrow(),
            vec![None, Some(Identity::anonymous("u1")), None]
        );
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_dropping_subscription_releases_listener() {
        let store = IdentityStore::new(None);
        let (seen, listener) = recorder();

        let sub = store.subscribe(listener);
        assert_eq!(store.listener_count(), 1);
        drop(sub);
        assert_eq!(store.listener_count(), 0);

        store.replace(Some(Identity::anonymous("late")));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_subscription_outliving_store_is_harmless() {
        let store = IdentityStore::new(None);
        let (_seen, listener) = recorder();
        let sub = store.subscribe(listener);
        drop(store);
        drop(sub);
    }

    #[test]
    fn test_listener_may_unsubscribe_while_notified() {
        let store = IdentityStore::new(None);
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let calls = Rc::new(Cell::new(0));
        let listener = {
            let slot = slot.clone();
            let calls = calls.clone();
            Callback::from(move |value: Option<Identity>| {
                calls.set(calls.get() + 1);
                if value.is_some() {
                    slot.borrow_mut().take();
                }
            })
        };
        *slot.borrow_mut() = Some(store.subscribe(listener));

        store.replace(Some(Identity::anonymous("u1")));
        store.replace(None);

        assert_eq!(calls.get(), 2);
        assert_eq!(store.listener_count(), 0);
    }
}
