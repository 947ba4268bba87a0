//! Subword boundary search across a nested span hierarchy
//!
//! The search unit starts as the word under the point plus its previous and
//! next siblings. When no boundary exists inside that window, the search
//! widens to the enclosing span and continues from the edge it reached, until
//! the navigator stops producing larger spans.

use crate::boundary::is_boundary;
use crate::navigator::{Span, TextStructureNavigator};

/// Find the next subword boundary from `point` in the given direction.
///
/// Returns `None` when the word window is empty or the span hierarchy is
/// exhausted without a boundary.
pub fn find_boundary<N>(navigator: &N, point: usize, forward: bool) -> Option<usize>
where
    N: TextStructureNavigator + ?Sized,
{
    let word = navigator.extent_of_word(point).span;
    let mut span = Span::new(
        navigator.span_of_previous_sibling(word).start,
        navigator.span_of_next_sibling(word).end,
    );
    if span.is_empty() {
        tracing::trace!(point, "Empty word window");
        return None;
    }

    let mut point = point;

    for escalation in 0..=navigator.max_escalations() {
        let text = navigator.text(span);
        let mut i = point.saturating_sub(span.start);

        while 0 < i && i < text.len() {
            if is_boundary(&text, i, forward) {
                let found = span.start + i;
                tracing::trace!(found, escalation, forward, "Subword boundary found");
                return Some(found);
            }
            if forward {
                i += 1;
            } else {
                i -= 1;
            }
        }

        point = span.start + i;

        let enclosing = navigator.span_of_enclosing(span);
        if enclosing == span {
            tracing::trace!(point, escalation, forward, "Span hierarchy exhausted");
            return None;
        }
        tracing::trace!(
            from = ?span.range(),
            to = ?enclosing.range(),
            "Escalating to enclosing span"
        );
        span = enclosing;
    }

    tracing::warn!(
        point,
        limit = navigator.max_escalations(),
        "Subword search exceeded escalation limit"
    );
    None
}

/// Subword boundary lookup for any text structure navigator
pub trait SubwordNavigation {
    /// Position of the subword boundary reached from `point`, if any
    fn subword_boundary(&self, point: usize, forward: bool) -> Option<usize>;
}

impl<N: TextStructureNavigator + ?Sized> SubwordNavigation for N {
    fn subword_boundary(&self, point: usize, forward: bool) -> Option<usize> {
        find_boundary(self, point, forward)
    }
}
