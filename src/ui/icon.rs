use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names bundled under public/icons/
pub mod icons {
    pub const EYE: &str = "eye";
    pub const EYE_OFF: &str = "eye-off";
    pub const USER: &str = "user";
    pub const BRIEFCASE: &str = "briefcase";
    pub const MAIL: &str = "mail";
    pub const LOCK: &str = "lock";
    pub const PHONE: &str = "phone";
    pub const MAP_PIN: &str = "map-pin";
    pub const ARROW_RIGHT: &str = "arrow-right";
}
