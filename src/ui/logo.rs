//! Bazaari wordmark component

use leptos::prelude::*;

/// Inline-SVG logo with the wordmark, stylable through the `class` prop.
#[component]
pub fn Logo(
    /// CSS classes applied to the wrapper
    #[prop(default = "h-10")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex items-center justify-center gap-3 {}", class)>
            <svg
                class="h-full w-auto text-orange-500"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                aria-hidden="true"
            >
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M16 11V7a4 4 0 00-8 0v4M5 9h14l1 12H4L5 9z"
                />
            </svg>
            <span class="text-3xl font-extrabold tracking-tight text-current">"Bazaari"</span>
        </div>
    }
}
