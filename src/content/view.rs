//! Page-consumer state machine with a recency guard.
//!
//! A page observes the active language, kicks off a resolution whenever
//! it changes, and displays the result. Resolution itself is
//! synchronous, but a consumer may interleave requests (e.g. the
//! language switches again before a render settles), so completions
//! apply last-write-wins keyed by request recency: a completion for a
//! superseded request is discarded, regardless of arrival order.

use crate::content::resolver::Resolution;

/// Observable state of one page consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// A resolution has been requested and has not settled yet.
    Loading,
    /// The latest resolution produced a bundle.
    Ready(T),
    /// The latest resolution reported total unavailability; the page
    /// shows a neutral placeholder instead of crashing.
    Unavailable,
}

/// Ticket identifying one resolution request. Only the most recently
/// issued ticket may settle the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    id: u64,
}

/// State holder for a single page consumer.
#[derive(Debug)]
pub struct ContentView<T> {
    state: ViewState<T>,
    latest_request: u64,
}

impl<T> ContentView<T> {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            latest_request: 0,
        }
    }

    /// Begin a new resolution. Moves the view to `Loading` and returns
    /// the token that is now the only one allowed to complete it.
    pub fn begin(&mut self) -> RequestToken {
        self.latest_request += 1;
        self.state = ViewState::Loading;
        RequestToken {
            id: self.latest_request,
        }
    }

    /// Apply a finished resolution. Returns whether it was applied;
    /// completions carrying a stale token are discarded.
    pub fn complete(&mut self, token: RequestToken, resolution: Resolution<T>) -> bool {
        if token.id != self.latest_request {
            return false;
        }
        self.state = match resolution {
            Resolution::Ready(bundle) => ViewState::Ready(bundle),
            Resolution::Unavailable => ViewState::Unavailable,
        };
        true
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }
}

impl<T> Default for ContentView<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_starts_loading() {
        let view: ContentView<&str> = ContentView::new();
        assert_eq!(view.state(), &ViewState::Loading);
    }

    #[test]
    fn test_begin_then_complete_ready() {
        let mut view = ContentView::new();
        let token = view.begin();
        assert_eq!(view.state(), &ViewState::Loading);

        assert!(view.complete(token, Resolution::Ready("bundle")));
        assert_eq!(view.state(), &ViewState::Ready("bundle"));
    }

    #[test]
    fn test_complete_unavailable() {
        let mut view: ContentView<&str> = ContentView::new();
        let token = view.begin();

        assert!(view.complete(token, Resolution::Unavailable));
        assert_eq!(view.state(), &ViewState::Unavailable);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut view = ContentView::new();

        // Language switches from L1 to L2 before L1's resolution settles
        let first = view.begin();
        let second = view.begin();

        assert!(view.complete(second, Resolution::Ready("l2-bundle")));
        // L1 finishes late; it must not overwrite L2's result
        assert!(!view.complete(first, Resolution::Ready("l1-bundle")));

        assert_eq!(view.state(), &ViewState::Ready("l2-bundle"));
    }

    #[test]
    fn test_stale_completion_arriving_first_keeps_loading() {
        let mut view = ContentView::new();

        let first = view.begin();
        let second = view.begin();

        // The stale completion lands while the newer request is still
        // in flight; the view must stay Loading for the newer one.
        assert!(!view.complete(first, Resolution::Ready("l1-bundle")));
        assert_eq!(view.state(), &ViewState::Loading);

        assert!(view.complete(second, Resolution::Ready("l2-bundle")));
        assert_eq!(view.state(), &ViewState::Ready("l2-bundle"));
    }

    #[test]
    fn test_begin_resets_to_loading() {
        let mut view = ContentView::new();
        let token = view.begin();
        view.complete(token, Resolution::Ready("bundle"));

        view.begin();
        assert_eq!(view.state(), &ViewState::Loading);
    }

    #[test]
    fn test_many_interleaved_switches_latest_wins() {
        let mut view = ContentView::new();

        let tokens: Vec<_> = (0..5).map(|_| view.begin()).collect();

        // Complete out of order: 2, 0, 4 (latest), 3, 1
        assert!(!view.complete(tokens[2], Resolution::Ready(2)));
        assert!(!view.complete(tokens[0], Resolution::Ready(0)));
        assert!(view.complete(tokens[4], Resolution::Ready(4)));
        assert!(!view.complete(tokens[3], Resolution::Ready(3)));
        assert!(!view.complete(tokens[1], Resolution::Ready(1)));

        assert_eq!(view.state(), &ViewState::Ready(4));
    }
}
