//! Host viewport handle.
//!
//! The viewport stands in for the browsing context the page lives in: it
//! tracks the scroll position, hands out listener registrations, and queues
//! blocking user notifications.  Event payloads themselves are delivered by
//! the host calling the view's `on_*` handlers; the registry here exists so
//! the component can pair every registration with a deterministic release.

use log::{debug, warn};

/// Handle for a registered listener, required to release it again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(u64);

/// The event sources a component can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerKind {
    Scroll,
    Pointer,
}

/// The host viewport the page is mounted on.
#[derive(Debug, Default)]
pub struct Viewport {
    scroll_offset: f64,
    smooth_scrolling: bool,
    listeners: Vec<(ListenerId, ListenerKind)>,
    next_listener: u64,
    alerts: Vec<String>,
}

impl Viewport {
    /// Creates a viewport scrolled to the top with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns the handle used to release it.
    pub fn listen(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, kind));
        debug!("registered {:?} listener {:?}", kind, id);
        id
    }

    /// Releases a previously registered listener.
    pub fn unlisten(&mut self, id: ListenerId) {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        if self.listeners.len() == before {
            warn!("release of unknown listener {:?} ignored", id);
        } else {
            debug!("released listener {:?}", id);
        }
    }

    /// Number of live listeners of the given kind.
    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.listeners
            .iter()
            .filter(|(_, registered)| *registered == kind)
            .count()
    }

    /// Total number of live listeners.
    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Requests smooth scrolling for programmatic scroll movements.
    pub fn request_smooth_scrolling(&mut self) {
        self.smooth_scrolling = true;
    }

    /// Whether smooth scrolling has been requested.
    pub fn smooth_scrolling(&self) -> bool {
        self.smooth_scrolling
    }

    /// Updates the vertical scroll offset in pixels.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.max(0.0);
    }

    /// Current vertical scroll offset in pixels.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Scrolls back to the top of the page.
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0.0;
    }

    /// Queues a blocking notification for the user.
    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("alert queued: {}", message);
        self.alerts.push(message);
    }

    /// The notifications queued so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_are_counted_per_kind_and_released_by_id() {
        let mut viewport = Viewport::new();
        let scroll = viewport.listen(ListenerKind::Scroll);
        let pointer = viewport.listen(ListenerKind::Pointer);
        assert_eq!(viewport.listener_count(ListenerKind::Scroll), 1);
        assert_eq!(viewport.listener_count(ListenerKind::Pointer), 1);

        viewport.unlisten(scroll);
        assert_eq!(viewport.listener_count(ListenerKind::Scroll), 0);
        assert_eq!(viewport.listener_count(ListenerKind::Pointer), 1);

        viewport.unlisten(pointer);
        assert_eq!(viewport.total_listeners(), 0);
    }

    #[test]
    fn releasing_twice_is_harmless() {
        let mut viewport = Viewport::new();
        let id = viewport.listen(ListenerKind::Scroll);
        viewport.unlisten(id);
        viewport.unlisten(id);
        assert_eq!(viewport.total_listeners(), 0);
    }

    #[test]
    fn scroll_offset_never_goes_negative() {
        let mut viewport = Viewport::new();
        viewport.set_scroll_offset(-5.0);
        assert_eq!(viewport.scroll_offset(), 0.0);
        viewport.set_scroll_offset(420.0);
        assert_eq!(viewport.scroll_offset(), 420.0);
        viewport.scroll_to_top();
        assert_eq!(viewport.scroll_offset(), 0.0);
    }

    #[test]
    fn alerts_queue_in_order() {
        let mut viewport = Viewport::new();
        viewport.alert("first");
        viewport.alert("second");
        assert_eq!(viewport.alerts(), ["first", "second"]);
    }
}
