//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::logo::Logo;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <Logo class="h-16 mx-auto mb-8 text-gray-900" />

                <h1 class="text-6xl font-bold text-gray-900 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-gray-900 mb-2">"Page Not Found"</h2>

                <p class="text-gray-500 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-orange-500 hover:bg-orange-600 text-white font-medium rounded-lg transition-colors"
                >
                    "Go Home"
                </A>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-400">"© 2025 Bazaari"</p>
            </div>
        </div>
    }
}
