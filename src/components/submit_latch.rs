use std::cell::Cell;
use std::rc::Rc;

/// Set while a submission is in flight, across renders.
///
/// The reducer only sees `BeginSubmit` after the submit handler has already
/// read its state, so a second submit event can race the first dispatch.
/// Held from the first accepted submit until the form is reset.
#[derive(Debug, Clone, Default)]
pub struct SubmitLatch(Rc<Cell<bool>>);

impl SubmitLatch {
    /// Returns `false` when a submission already holds the latch.
    pub fn try_acquire(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn release(&self) {
        self.0.set(false);
    }

    pub fn is_held(&self) -> bool {
        self.0.get()
    }
}

impl PartialEq for SubmitLatch {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submit_is_refused() {
        let latch = SubmitLatch::default();
        assert!(latch.try_acquire());
        assert!(latch.is_held());
        assert!(!latch.try_acquire());
        assert!(!latch.clone().try_acquire());
    }

    #[test]
    fn release_allows_next_submit() {
        let latch = SubmitLatch::default();
        assert!(latch.try_acquire());
        latch.release();
        assert!(!latch.is_held());
        assert!(latch.try_acquire());
    }
}
