use std::cell::RefCell;
use std::rc::Rc;

/// Owns release callbacks for host resources and runs each exactly once,
/// either on `dispose` or when the last handle is dropped.
pub struct ResourceScope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    disposers: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl ResourceScope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                disposers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        self.inner.disposers.borrow_mut().push(Box::new(disposer));
    }

    pub fn is_empty(&self) -> bool {
        self.inner.disposers.borrow().is_empty()
    }

    /// Runs pending disposers in reverse registration order.
    pub fn dispose(&self) {
        self.inner.run();
    }
}

impl Default for ResourceScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ResourceScope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl ScopeInner {
    fn run(&self) {
        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        for disposer in disposers.into_iter().rev() {
            disposer();
        }
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        self.run();
    }
}
