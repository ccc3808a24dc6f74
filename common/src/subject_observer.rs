use std::rc::Rc;

/// Receives events published by a [`Subject`].
pub trait Observer<S: Subject<E>, E: Clone> {
    fn update(&self, source: &S, event: E);
}

/// Publishes events of type `E` to registered observers.
pub trait Subject<E: Clone> {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);
    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);
    fn notify_observers(&self, event: E);
}

pub type SharedObservers<S, E> = Vec<Rc<dyn Observer<S, E>>>;
