use leptos::prelude::*;

/// Styles the interactions depend on: ripple and pulse keyframes, the ripple
/// container, and the `scrolled` nav variant
#[component]
pub fn InteractionStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Ripple on social buttons */
            @keyframes ripple {
                to {
                    transform: scale(4);
                    opacity: 0;
                }
            }

            /* Page pulse for the easter egg */
            @keyframes pulse {
                0%, 100% { transform: scale(1); }
                50% { transform: scale(1.01); }
            }

            .social-btn {
                position: relative;
                overflow: hidden;
            }

            .vintage-nav.scrolled {
                background-color: rgba(139, 69, 19, 0.95);
                backdrop-filter: blur(10px);
            }
            "#
        </style>
    }
}
