//! Read-only view of the mask stroke history.
//!
//! The drawing subsystem owns the past/future stroke stacks and the undo/redo
//! operations over them. This crate only needs to know how deep each stack is,
//! so the view borrows the stacks and never hands out mutable access.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

/// Borrowed past/future stroke stacks. `S` is whatever the drawing subsystem
/// uses for a stroke.
#[derive(Debug)]
pub struct StrokeHistory<'a, S> {
    past: &'a [S],
    future: &'a [S],
}

impl<S> Clone for StrokeHistory<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StrokeHistory<'_, S> {}

impl<'a, S> StrokeHistory<'a, S> {
    #[must_use]
    pub fn new(past: &'a [S], future: &'a [S]) -> Self {
        Self { past, future }
    }

    /// A history with no strokes on either stack.
    #[must_use]
    pub fn empty() -> Self {
        Self { past: &[], future: &[] }
    }

    /// Strokes currently applied to the mask, oldest first.
    #[must_use]
    pub fn past(&self) -> &'a [S] {
        self.past
    }

    /// Strokes undone and available for redo, oldest first.
    #[must_use]
    pub fn future(&self) -> &'a [S] {
        self.future
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Whether any stroke is painted on the mask.
    #[must_use]
    pub fn has_mask(&self) -> bool {
        self.can_undo()
    }

    /// The most recent applied stroke.
    #[must_use]
    pub fn last_stroke(&self) -> Option<&'a S> {
        self.past.last()
    }
}
