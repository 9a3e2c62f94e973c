#![forbid(unsafe_code)]

//! Linear focus over a vertical list of form fields.
//!
//! Forms driven by a remote (sign-up, feedback) stack their fields in one
//! column. Up and Down step through the list and clamp at both ends; Left
//! and Right do nothing. Submitting a field moves on to the next one.
//!
//! [`FieldChain`] is generic over the field identifier so each screen can
//! use its own enum.

#[cfg(feature = "tracing")]
use crate::logging::NAV_TARGET;
use crate::navigation::Direction;

/// One focus change within a [`FieldChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMove<F> {
    /// Field focused before the change; `None` for the first assignment.
    pub previous: Option<F>,
    pub next: F,
}

impl<F: PartialEq> FieldMove<F> {
    /// Whether focus actually moved.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous.as_ref() != Some(&self.next)
    }
}

/// Ordered fields with at most one focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChain<F> {
    fields: Vec<F>,
    focus: Option<usize>,
}

impl<F: Copy + PartialEq> FieldChain<F> {
    /// Chain over `fields`, top to bottom. Nothing is focused yet.
    #[must_use]
    pub fn new(fields: Vec<F>) -> Self {
        Self {
            fields,
            focus: None,
        }
    }

    pub fn fields(&self) -> &[F] {
        &self.fields
    }

    pub fn focus(&self) -> Option<F> {
        self.focus.map(|i| self.fields[i])
    }

    /// Focus the first field, as a form does when it appears.
    ///
    /// Returns `None` for an empty chain.
    pub fn focus_first(&mut self) -> Option<FieldMove<F>> {
        if self.fields.is_empty() {
            return None;
        }
        Some(self.move_to(0))
    }

    /// Focus `field` directly (pointer or programmatic focus). Fields not in
    /// the chain are ignored.
    pub fn focus_field(&mut self, field: F) -> Option<FieldMove<F>> {
        let index = self.fields.iter().position(|f| *f == field)?;
        Some(self.move_to(index))
    }

    /// Apply a remote direction. Returns `None` while nothing is focused.
    pub fn handle_direction(&mut self, direction: Direction) -> Option<FieldMove<F>> {
        let current = self.focus?;
        let last = self.fields.len().saturating_sub(1);
        let next = match direction {
            Direction::Down => (current + 1).min(last),
            Direction::Up => current.saturating_sub(1),
            Direction::Left | Direction::Right => current,
        };
        crate::trace!(target: NAV_TARGET, %direction, from = current, to = next, "field move");
        Some(self.move_to(next))
    }

    /// The focused field was submitted: move on to the next one, staying on
    /// the last field.
    pub fn advance(&mut self) -> Option<FieldMove<F>> {
        self.handle_direction(Direction::Down)
    }

    /// Whether the focused field is the last one.
    pub fn at_end(&self) -> bool {
        self.focus.is_some_and(|i| i + 1 == self.fields.len())
    }

    fn move_to(&mut self, index: usize) -> FieldMove<F> {
        let step = FieldMove {
            previous: self.focus(),
            next: self.fields[index],
        };
        self.focus = Some(index);
        step
    }
}
