//! Headline with a typewriter reveal
//!
//! The server renders the full headline. Once hydrated, the text is cleared and typed
//! back one character every 100ms, starting `index` seconds after load. Unmounting the
//! headline aborts the run.

use leptos::prelude::*;

use crate::core::typewriter::{CURSOR_BORDER, NO_CURSOR_BORDER};

/// Cursor drawn as the headline's right border
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CursorBorder {
    /// No inline style (server render, before the run starts)
    Untouched,
    Shown,
    Removed,
}

impl CursorBorder {
    fn style(&self) -> String {
        match self {
            CursorBorder::Untouched => String::new(),
            CursorBorder::Shown => format!("border-right: {};", CURSOR_BORDER),
            CursorBorder::Removed => format!("border-right: {};", NO_CURSOR_BORDER),
        }
    }
}

#[component]
pub fn Headline(
    /// Full headline text
    text: &'static str,
    /// Position among the page's headlines; sets the start delay
    index: usize,
    /// Extra classes next to `headline`
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = signal(text.to_string());
    let (border, set_border) = signal(CursorBorder::Untouched);

    #[cfg(not(feature = "ssr"))]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let aborted = Arc::new(AtomicBool::new(false));
        let run_aborted = Arc::clone(&aborted);
        Effect::new(move |_| {
            run::start(text, index, set_visible, set_border, Arc::clone(&run_aborted));
        });
        on_cleanup(move || aborted.store(true, Ordering::Relaxed));
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (index, set_visible, set_border);
    }

    let classes = if class.is_empty() {
        "headline".to_string()
    } else {
        format!("headline {}", class)
    };

    view! {
        <h2 class=classes style=move || border.get().style()>
            {move || visible.get()}
        </h2>
    }
}

#[cfg(not(feature = "ssr"))]
mod run {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use gloo_timers::callback::{Interval, Timeout};
    use leptos::prelude::*;

    use super::CursorBorder;
    use crate::core::typewriter::{CHAR_INTERVAL_MS, Typewriter, TypewriterStep, start_delay_ms};

    struct Run {
        typewriter: Typewriter,
        ticker: Option<Interval>,
        set_visible: WriteSignal<String>,
        set_border: WriteSignal<CursorBorder>,
        aborted: Arc<AtomicBool>,
    }

    impl Run {
        fn is_aborted(&self) -> bool {
            self.aborted.load(Ordering::Relaxed)
        }

        /// Stop ticking. The interval cannot be dropped from inside its own
        /// callback, so it is released on the next turn of the event loop.
        fn stop(&mut self) {
            if let Some(ticker) = self.ticker.take() {
                Timeout::new(0, move || drop(ticker)).forget();
            }
        }
    }

    /// Clear the headline and schedule its reveal
    pub(super) fn start(
        text: &'static str,
        index: usize,
        set_visible: WriteSignal<String>,
        set_border: WriteSignal<CursorBorder>,
        aborted: Arc<AtomicBool>,
    ) {
        set_visible.set(String::new());
        set_border.set(CursorBorder::Shown);

        let run = Rc::new(RefCell::new(Run {
            typewriter: Typewriter::new(text),
            ticker: None,
            set_visible,
            set_border,
            aborted,
        }));

        Timeout::new(start_delay_ms(index), move || {
            if run.borrow().is_aborted() {
                return;
            }
            run.borrow_mut().typewriter.start();
            let tick_run = Rc::clone(&run);
            let ticker = Interval::new(CHAR_INTERVAL_MS, move || tick(&tick_run));
            run.borrow_mut().ticker = Some(ticker);
        })
        .forget();
    }

    /// One interval tick: reveal, linger, or remove the cursor
    fn tick(run: &Rc<RefCell<Run>>) {
        let mut r = run.borrow_mut();
        if r.is_aborted() {
            r.stop();
            return;
        }

        match r.typewriter.tick() {
            TypewriterStep::Reveal(text) | TypewriterStep::Complete(text) => {
                r.set_visible.set(text);
            }
            TypewriterStep::RemoveCursor => {
                r.set_border.set(CursorBorder::Removed);
                r.stop();
            }
            TypewriterStep::Idle => {}
        }
    }
}
