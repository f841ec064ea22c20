//! Scroll listeners for the nav bar, the header parallax and the debounced logger
//!
//! A single window `scroll` listener folds each offset into a [`ScrollTracker`] and
//! publishes the resulting [`ScrollFrame`]; the nav bar and the header render from
//! that signal.

use leptos::prelude::*;

use crate::core::scroll::ScrollFrame;

/// Signal with the latest scroll-derived state, updated on every scroll event
pub fn use_scroll_frame() -> ReadSignal<ScrollFrame> {
    let (frame, set_frame) = signal(ScrollFrame::default());

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::scroll::ScrollTracker;
        use leptos::ev::scroll;
        use std::cell::RefCell;
        use std::rc::Rc;

        let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
        let handle = window_event_listener(scroll, move |_| {
            let offset = super::dom::scroll_offset();
            let next = tracker.borrow_mut().observe(offset);
            set_frame.set(next);
        });

        on_cleanup(move || handle.remove());
    }

    #[cfg(feature = "ssr")]
    {
        let _ = set_frame;
    }

    frame
}

/// Log once the page has stopped scrolling for a moment.
///
/// Each scroll event replaces the pending timer, which cancels the previous one.
#[cfg(not(feature = "ssr"))]
pub fn install_scroll_logger() {
    use crate::core::debounce::Debouncer;
    use gloo_timers::callback::Timeout;
    use leptos::ev::scroll;
    use std::cell::RefCell;
    use std::rc::Rc;

    let debouncer = Rc::new(RefCell::new(Debouncer::default()));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let handle = window_event_listener(scroll, move |_| {
        let ticket = debouncer.borrow_mut().schedule();
        let wait = debouncer.borrow().wait_ms();
        let debouncer = Rc::clone(&debouncer);
        let timeout = Timeout::new(wait, move || {
            if debouncer.borrow_mut().fire(ticket) {
                leptos::logging::log!(
                    "Scroll event processed at {}px",
                    super::dom::scroll_offset()
                );
            }
        });
        pending.borrow_mut().replace(timeout);
    });

    on_cleanup(move || handle.remove());
}
