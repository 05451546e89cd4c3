//! Combined sign-in / sign-up page
//!
//! Split layout: a dark branding panel on the left, the registration form on
//! the right. The page owns the submit handler the form delegates to.

use leptos::prelude::*;

use crate::core::form::Submission;
use crate::ui::auth::RegistrationForm;
use crate::ui::icon::{Icon, icons};
use crate::ui::logo::Logo;

/// Auth page component
#[component]
pub fn AuthPage() -> impl IntoView {
    // The form delegates all real work here; wiring this to an actual auth
    // backend is the host application's concern. The form itself is neither
    // cleared nor told whether the handler succeeded.
    let on_submit = Callback::new(move |submission: Submission| {
        leptos::logging::log!(
            "auth submit: email={} account_type={}",
            submission.email,
            submission.account_type.as_str()
        );
    });

    view! {
        <div class="min-h-screen flex bg-white">
            // Left side - branding panel
            <div class="hidden lg:flex lg:w-5/12 relative overflow-hidden bg-gray-900 text-white">
                <div class="absolute inset-0 z-0">
                    <div class="absolute inset-0 bg-gradient-to-b from-gray-900/40 via-gray-900/20 to-gray-900/80"></div>
                </div>

                <div class="relative z-10 flex flex-col justify-between w-full p-12">
                    <div>
                        <Logo class="h-16 mb-8 text-white" />
                        <h1 class="text-5xl font-bold leading-tight tracking-tight">
                            "Discover. " <br /> <span class="text-orange-500">"Buy. "</span>
                            <br /> "Sell."
                        </h1>
                        <p class="mt-6 text-lg text-gray-100 max-w-sm leading-relaxed font-medium">
                            "Join the marketplace where opportunities meet. Find exactly what you
                             need, or turn your items into cash in minutes."
                        </p>
                    </div>

                    <div class="space-y-6">
                        <FeatureRow
                            icon=icons::BRIEFCASE
                            title="For Business"
                            description="Grow your reach instantly"
                        />
                        <FeatureRow
                            icon=icons::USER
                            title="For Everyone"
                            description="Safe and easy transactions"
                        />
                    </div>

                    <div class="text-xs text-gray-300/80">
                        "© 2025 Bazaari. All rights reserved."
                    </div>
                </div>
            </div>

            // Right side - form
            <div class="w-full lg:w-7/12 flex items-center justify-center p-6 sm:p-12 bg-gray-50 overflow-y-auto">
                <div class="max-w-md w-full my-auto">
                    <div class="text-center mb-8">
                        <Logo class="h-24 text-gray-900" />
                    </div>

                    <RegistrationForm on_submit=on_submit />
                </div>
            </div>
        </div>
    }
}

/// One icon-chip + copy row in the branding panel.
#[component]
fn FeatureRow(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <div class="p-3 bg-white/10 backdrop-blur-sm rounded-lg border border-white/10">
                <Icon name=icon class="w-6 h-6 text-orange-500" />
            </div>
            <div>
                <p class="font-bold">{title}</p>
                <p class="text-sm text-gray-200">{description}</p>
            </div>
        </div>
    }
}
