use foundation::extent::Viewport;

pub type ResizeHandler = Box<dyn FnMut(Viewport)>;

/// Explicit, ordered list of resize handlers.
///
/// Handlers run in registration order, every time. This replaces the
/// wrap-the-previous-function chains where each chart redefined a global
/// resize hook around the last one.
#[derive(Default)]
pub struct ResizeHandlers {
    handlers: Vec<(String, ResizeHandler)>,
}

impl ResizeHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, handler: ResizeHandler) {
        self.handlers.push((name.into(), handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered handler names, in invocation order.
    pub fn names(&self) -> Vec<&str> {
        self.handlers.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn dispatch(&mut self, viewport: Viewport) {
        for (_, handler) in &mut self.handlers {
            handler(viewport);
        }
    }
}

impl std::fmt::Debug for ResizeHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeHandlers")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ResizeHandlers;
    use foundation::extent::Viewport;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn dispatches_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut handlers = ResizeHandlers::new();

        for name in ["charts", "hexgrid", "bee-model"] {
            let order = Rc::clone(&order);
            handlers.register(name, Box::new(move |_| order.borrow_mut().push(name)));
        }

        handlers.dispatch(Viewport::new(0.0, 600.0));
        assert_eq!(*order.borrow(), vec!["charts", "hexgrid", "bee-model"]);
        assert_eq!(handlers.names(), vec!["charts", "hexgrid", "bee-model"]);
    }

    #[test]
    fn handlers_receive_the_viewport() {
        let seen = Rc::new(RefCell::new(None));
        let mut handlers = ResizeHandlers::new();
        {
            let seen = Rc::clone(&seen);
            handlers.register(
                "probe",
                Box::new(move |vp: Viewport| *seen.borrow_mut() = Some(vp.height)),
            );
        }
        handlers.dispatch(Viewport::new(0.0, 1024.0));
        assert_eq!(*seen.borrow(), Some(1024.0));
    }
}
