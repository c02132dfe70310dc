//! Localization service shared by everything rendered on the start screen.
//!
//! The service holds the active locale code and notifies subscribers when it
//! changes. It is shared by reference counting on the UI thread; nothing here
//! is `Send`.

pub mod strings;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

pub use strings::{has_locale, translate, Text, FALLBACK_LANGUAGE};

/// Handle returned by [`LocaleService::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&str)>;

/// Process-wide active locale with change notification.
pub struct LocaleService {
    current: RefCell<String>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

/// Shared handle to the locale service.
pub type SharedLocale = Rc<LocaleService>;

impl LocaleService {
    /// Creates a service with `code` active.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            current: RefCell::new(code.into()),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Creates a shared service with `code` active.
    pub fn shared(code: impl Into<String>) -> SharedLocale {
        Rc::new(Self::new(code))
    }

    /// Active locale code.
    pub fn get(&self) -> String {
        self.current.borrow().clone()
    }

    /// Switches the active locale and notifies subscribers.
    ///
    /// Any code is accepted; codes without strings resolve to the fallback
    /// language. Setting the already active code notifies nobody.
    pub fn set(&self, code: &str) {
        if *self.current.borrow() == code {
            return;
        }
        *self.current.borrow_mut() = code.to_string();

        if !has_locale(code) {
            tracing::debug!("No strings for locale {code}, falling back to {FALLBACK_LANGUAGE}");
        }

        // Snapshot so listeners may (un)subscribe while being notified
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(code);
        }
    }

    /// Registers a callback invoked with the new code after every change.
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Removes a callback. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    /// Resolves `text` in the active locale.
    pub fn text(&self, text: Text) -> &'static str {
        translate(&self.current.borrow(), text)
    }
}

impl fmt::Debug for LocaleService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleService")
            .field("current", &self.current.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl Default for LocaleService {
    fn default() -> Self {
        Self::new(FALLBACK_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let service = LocaleService::new("en");
        assert_eq!(service.get(), "en");
        service.set("fr");
        assert_eq!(service.get(), "fr");
        assert_eq!(service.text(Text::Help), "Aide");
    }

    #[test]
    fn test_subscribers_notified_on_change() {
        let service = LocaleService::new("en");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        service.subscribe(move |code| sink.borrow_mut().push(code.to_string()));

        service.set("nl");
        service.set("nl");
        service.set("pt");

        assert_eq!(*seen.borrow(), vec!["nl".to_string(), "pt".to_string()]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let service = LocaleService::new("en");
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let id = service.subscribe(move |_| counter.set(counter.get() + 1));

        service.set("fr");
        service.unsubscribe(id);
        service.set("cn");

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_unknown_code_is_accepted() {
        let service = LocaleService::new("en");
        service.set("xx");
        assert_eq!(service.get(), "xx");
        assert_eq!(service.text(Text::NewFile), "New File");
    }
}
