use leptos::prelude::*;

/// SVG icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon name (file name without `.svg`)
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK: &str = "check";
    pub const CIRCLE: &str = "circle";
    pub const EDIT: &str = "edit";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const FOLDER: &str = "folder";
    pub const LOGOUT: &str = "logout";
    pub const PLUS: &str = "plus";
    pub const TRASH: &str = "trash";
    pub const X: &str = "x";
}
