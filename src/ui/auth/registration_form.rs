//! Combined sign-in / sign-up form component
//!
//! A controlled form that toggles between login and registration modes,
//! derives the City/Area options from the selected State, and hands the
//! collected values to the caller on submit. All field state lives in
//! [`FormState`]; this component only wires DOM events to its setters.

use leptos::prelude::*;

use crate::core::form::{AccountType, FormMode, FormState, Submission};
use crate::core::locations::{INDIA_REGIONS, Region};
use crate::ui::icon::{Icon, icons};

/// Combined sign-in / sign-up form
#[component]
pub fn RegistrationForm(
    /// Callback invoked with the collected details on every submit
    #[prop(into)]
    on_submit: Callback<Submission>,
    /// Region reference table backing the State and City/Area selects
    #[prop(default = INDIA_REGIONS)]
    regions: &'static [Region],
) -> impl IntoView {
    let form = RwSignal::new(FormState::new(regions));

    let registering = move || form.with(|f| f.mode().is_register());

    // Fire-and-forget: the callback result is not awaited and the form is
    // neither cleared nor switched out of its current mode.
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.with(|f| f.submission()));
    };

    let toggle_mode = move |_| {
        form.update(|f| {
            let next = if f.mode().is_register() {
                FormMode::SignIn
            } else {
                FormMode::Register
            };
            f.set_mode(next);
        });
    };

    view! {
        <div class="bg-white rounded-2xl shadow-xl border border-gray-100 p-8 sm:p-10">
            // Mode-dependent heading
            <div class="mb-8">
                <h2 class="text-3xl font-extrabold text-gray-900 tracking-tight">
                    {move || if registering() { "Create Account" } else { "Welcome Back" }}
                </h2>
                <p class="mt-2 text-sm text-gray-500">
                    {move || {
                        if registering() {
                            "Enter your details to get started"
                        } else {
                            "Please enter your details to sign in"
                        }
                    }}
                </p>
            </div>

            <form on:submit=handle_submit class="space-y-5">
                // Personal / Business picker (register only)
                {move || {
                    registering()
                        .then(|| {
                            view! {
                                <div class="grid grid-cols-2 gap-4">
                                    <AccountTypeButton
                                        form=form
                                        variant=AccountType::Personal
                                        label="Personal"
                                        icon=icons::USER
                                    />
                                    <AccountTypeButton
                                        form=form
                                        variant=AccountType::Business
                                        label="Business"
                                        icon=icons::BRIEFCASE
                                    />
                                </div>
                            }
                        })
                }}

                <div class="space-y-4">
                    // Email field
                    <div>
                        <label
                            for="email-address"
                            class="block text-sm font-medium text-gray-700 mb-1"
                        >
                            "Email Address"
                        </label>
                        <div class="relative">
                            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                                <Icon name=icons::MAIL class="h-5 w-5 text-gray-400" />
                            </div>
                            <input
                                type="email"
                                id="email-address"
                                name="email"
                                autocomplete="email"
                                required=true
                                placeholder="e.g., yourname@example.com"
                                class="block w-full pl-10 pr-3 py-3 border border-gray-200 rounded-lg
                                       bg-gray-50 placeholder-gray-400
                                       focus:outline-none focus:bg-white focus:ring-2 focus:ring-orange-500/50 focus:border-orange-500
                                       transition-colors sm:text-sm"
                                prop:value=move || form.with(|f| f.email().to_string())
                                on:input=move |ev| {
                                    form.update(|f| f.set_email(event_target_value(&ev)))
                                }
                            />
                        </div>
                    </div>

                    // Password field with visibility toggle
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-1">
                            "Password"
                        </label>
                        <div class="relative">
                            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                                <Icon name=icons::LOCK class="h-5 w-5 text-gray-400" />
                            </div>
                            <input
                                type=move || {
                                    if form.with(|f| f.password_visible()) { "text" } else { "password" }
                                }
                                id="password"
                                name="password"
                                autocomplete=move || {
                                    if registering() { "new-password" } else { "current-password" }
                                }
                                required=true
                                placeholder="password"
                                class="block w-full pl-10 pr-10 py-3 border border-gray-200 rounded-lg
                                       bg-gray-50 placeholder-gray-400
                                       focus:outline-none focus:bg-white focus:ring-2 focus:ring-orange-500/50 focus:border-orange-500
                                       transition-colors sm:text-sm"
                                prop:value=move || form.with(|f| f.password().to_string())
                                on:input=move |ev| {
                                    form.update(|f| f.set_password(event_target_value(&ev)))
                                }
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600"
                                on:click=move |_| form.update(|f| f.toggle_password_visibility())
                            >
                                {move || {
                                    if form.with(|f| f.password_visible()) {
                                        view! { <Icon name=icons::EYE_OFF class="h-5 w-5" /> }
                                            .into_any()
                                    } else {
                                        view! { <Icon name=icons::EYE class="h-5 w-5" /> }
                                            .into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </div>

                    // Registration-only details
                    {move || {
                        registering()
                            .then(|| {
                                view! {
                                    // Full name field
                                    <div>
                                        <label
                                            for="name"
                                            class="block text-sm font-medium text-gray-700 mb-1"
                                        >
                                            "Full Name (for new accounts)"
                                        </label>
                                        <div class="relative">
                                            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                                                <Icon name=icons::USER class="h-5 w-5 text-gray-400" />
                                            </div>
                                            <input
                                                type="text"
                                                id="name"
                                                name="name"
                                                autocomplete="name"
                                                required=true
                                                placeholder="e.g., Rahul Sharma"
                                                class="block w-full pl-10 pr-3 py-3 border border-gray-200 rounded-lg
                                                       bg-gray-50 placeholder-gray-400
                                                       focus:outline-none focus:bg-white focus:ring-2 focus:ring-orange-500/50 focus:border-orange-500
                                                       transition-colors sm:text-sm"
                                                prop:value=move || form.with(|f| f.full_name().to_string())
                                                on:input=move |ev| {
                                                    form.update(|f| f.set_full_name(event_target_value(&ev)))
                                                }
                                            />
                                        </div>
                                    </div>

                                    // Phone field
                                    <div>
                                        <label
                                            for="phone"
                                            class="block text-sm font-medium text-gray-700 mb-1"
                                        >
                                            "Phone Number (for new accounts)"
                                        </label>
                                        <div class="relative">
                                            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                                                <Icon name=icons::PHONE class="h-5 w-5 text-gray-400" />
                                            </div>
                                            <input
                                                type="tel"
                                                id="phone"
                                                name="phone"
                                                autocomplete="tel"
                                                required=true
                                                placeholder="e.g., +91 98765 43210"
                                                class="block w-full pl-10 pr-3 py-3 border border-gray-200 rounded-lg
                                                       bg-gray-50 placeholder-gray-400
                                                       focus:outline-none focus:bg-white focus:ring-2 focus:ring-orange-500/50 focus:border-orange-500
                                                       transition-colors sm:text-sm"
                                                prop:value=move || form.with(|f| f.phone().to_string())
                                                on:input=move |ev| {
                                                    form.update(|f| f.set_phone(event_target_value(&ev)))
                                                }
                                            />
                                        </div>
                                    </div>

                                    // State and dependent City/Area selects
                                    <div class="grid grid-cols-2 gap-4">
                                        <div>
                                            <label
                                                for="state"
                                                class="block text-sm font-medium text-gray-700 mb-1"
                                            >
                                                "State"
                                            </label>
                                            <div class="relative">
                                                <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                                                    <Icon
                                                        name=icons::MAP_PIN
                                                        class="h-5 w-5 text-gray-400"
                                                    />
                                                </div>
                                                <select
                                                    id="state"
                                                    name="state"
                                                    autocomplete="address-level1"
                                                    required=true
                                                    class="block w-full pl-10 pr-8 py-3 border border-gray-200 rounded-lg
                                                           bg-gray-50 text-gray-900 appearance-none
                                                           focus:outline-none focus:bg-white focus:ring-2 focus:ring-orange-500/50 focus:border-orange-500
                                                           transition-colors sm:text-sm"
                                                    prop:value=move || form.with(|f| f.region().to_string())
                                                    on:change=move |ev| {
                                                        form.update(|f| f.set_region(event_target_value(&ev)))
                                                    }
                                                >
                                                    <option value="">"Select State"</option>
                                                    {regions
                                                        .iter()
                                                        .map(|region| {
                                                            view! {
                                                                <option value=region.name>{region.name}</option>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </select>
                                                <SelectChevron />
                                            </div>
                                        </div>
                                        <div>
                                            <label
                                                for="city"
                                                class="block text-sm font-medium text-gray-700 mb-1"
                                            >
                                                "City / Area"
                                            </label>
                                            <div class="relative">
                                                <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                                                    <Icon
                                                        name=icons::MAP_PIN
                                                        class="h-5 w-5 text-gray-400"
                                                    />
                                                </div>
                                                <select
                                                    id="city"
                                                    name="city"
                                                    autocomplete="address-level2"
                                                    required=true
                                                    disabled=move || form.with(|f| f.region().is_empty())
                                                    class="block w-full pl-10 pr-8 py-3 border border-gray-200 rounded-lg
                                                           bg-gray-50 text-gray-900 appearance-none
                                                           focus:outline-none focus:bg-white focus:ring-2 focus:ring-orange-500/50 focus:border-orange-500
                                                           transition-colors sm:text-sm
                                                           disabled:bg-gray-100 disabled:text-gray-400"
                                                    prop:value=move || form.with(|f| f.locality().to_string())
                                                    on:change=move |ev| {
                                                        form.update(|f| f.set_locality(event_target_value(&ev)))
                                                    }
                                                >
                                                    <option value="">"Select City/Area"</option>
                                                    {move || {
                                                        form.with(|f| f.available_localities())
                                                            .iter()
                                                            .map(|locality| {
                                                                view! {
                                                                    <option value=*locality>{*locality}</option>
                                                                }
                                                            })
                                                            .collect_view()
                                                    }}
                                                </select>
                                                <SelectChevron />
                                            </div>
                                        </div>
                                    </div>

                                    // Street address field
                                    <div>
                                        <label
                                            for="street-address"
                                            class="block text-sm font-medium text-gray-700 mb-1"
                                        >
                                            "Street Address (for new accounts)"
                                        </label>
                                        <div class="relative">
                                            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                                                <Icon name=icons::MAP_PIN class="h-5 w-5 text-gray-400" />
                                            </div>
                                            <input
                                                type="text"
                                                id="street-address"
                                                name="street-address"
                                                autocomplete="street-address"
                                                required=true
                                                placeholder="e.g., Flat 201, Sunshine Apartments, MG Road"
                                                class="block w-full pl-10 pr-3 py-3 border border-gray-200 rounded-lg
                                                       bg-gray-50 placeholder-gray-400
                                                       focus:outline-none focus:bg-white focus:ring-2 focus:ring-orange-500/50 focus:border-orange-500
                                                       transition-colors sm:text-sm"
                                                prop:value=move || form.with(|f| f.street().to_string())
                                                on:input=move |ev| {
                                                    form.update(|f| f.set_street(event_target_value(&ev)))
                                                }
                                            />
                                        </div>
                                    </div>

                                    // PIN code field
                                    <div>
                                        <label
                                            for="zip-code"
                                            class="block text-sm font-medium text-gray-700 mb-1"
                                        >
                                            "PIN Code"
                                        </label>
                                        <div class="relative">
                                            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                                                <Icon name=icons::MAP_PIN class="h-5 w-5 text-gray-400" />
                                            </div>
                                            <input
                                                type="text"
                                                id="zip-code"
                                                name="postal-code"
                                                autocomplete="postal-code"
                                                required=true
                                                placeholder="e.g., 400001"
                                                class="block w-full pl-10 pr-3 py-3 border border-gray-200 rounded-lg
                                                       bg-gray-50 placeholder-gray-400
                                                       focus:outline-none focus:bg-white focus:ring-2 focus:ring-orange-500/50 focus:border-orange-500
                                                       transition-colors sm:text-sm"
                                                prop:value=move || form.with(|f| f.postal_code().to_string())
                                                on:input=move |ev| {
                                                    form.update(|f| f.set_postal_code(event_target_value(&ev)))
                                                }
                                            />
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </div>

                // Submit button
                <button
                    type="submit"
                    class="group w-full flex justify-center items-center py-3.5 px-4 border border-transparent
                           text-sm font-bold rounded-lg text-white bg-orange-500 hover:bg-orange-600
                           focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-orange-500
                           shadow-lg transform transition-all duration-200 hover:-translate-y-0.5 hover:shadow-xl"
                >
                    {move || if registering() { "Create Account" } else { "Sign In" }}
                    <Icon
                        name=icons::ARROW_RIGHT
                        class="ml-2 h-5 w-5 group-hover:translate-x-1 transition-transform"
                    />
                </button>
            </form>

            // Mode toggle footer
            <div class="mt-8 text-center">
                <div class="relative">
                    <div class="absolute inset-0 flex items-center">
                        <div class="w-full border-t border-gray-200"></div>
                    </div>
                    <div class="relative flex justify-center text-sm">
                        <span class="px-4 bg-white text-gray-500">
                            {move || {
                                if registering() { "Already have an account?" } else { "New here?" }
                            }}
                        </span>
                    </div>
                </div>
                <button
                    type="button"
                    class="mt-4 font-medium text-orange-600 hover:text-orange-700 transition-colors"
                    on:click=toggle_mode
                >
                    {move || if registering() { "Sign In Here" } else { "Create an Account" }}
                </button>
            </div>
        </div>
    }
}

/// One of the two account-type toggle buttons shown in register mode.
#[component]
fn AccountTypeButton(
    form: RwSignal<FormState>,
    variant: AccountType,
    label: &'static str,
    icon: &'static str,
) -> impl IntoView {
    let selected = move || form.with(|f| f.account_type() == variant);

    view! {
        <button
            type="button"
            class="relative p-4 rounded-xl border-2 flex flex-col items-center justify-center gap-2
                   transition-all duration-200"
            class:border-orange-500=selected
            class:bg-orange-50=selected
            class:text-orange-600=selected
            class:border-gray-100=move || !selected()
            class:bg-white=move || !selected()
            class:text-gray-500=move || !selected()
            on:click=move |_| form.update(|f| f.set_account_type(variant))
        >
            <Icon name=icon class="w-6 h-6" />
            <span class="font-bold text-sm">{label}</span>
        </button>
    }
}

/// Dropdown arrow overlay for the appearance-none selects.
#[component]
fn SelectChevron() -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-y-0 right-0 flex items-center px-2 text-gray-700">
            <svg class="fill-current h-4 w-4" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20">
                <path d="M9.293 12.95l.707.707L15.657 8l-1.414-1.414L10 10.828 5.757 6.586 4.343 8z" />
            </svg>
        </div>
    }
}
