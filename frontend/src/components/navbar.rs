use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Height assumed for the fixed navbar when it cannot be measured.
const NAV_OFFSET_FALLBACK: f64 = 70.0;

/// Fixed top navigation. In-page links scroll smoothly to their section,
/// offset by the navbar height so the heading is not covered by it.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav_link = |fragment: &'static str, label: &'static str| {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            scroll_to_section(fragment);
        });
        html! { <a href={format!("#{}", fragment)} {onclick}>{label}</a> }
    };

    html! {
        <nav class="navbar">
            <div class="nav-brand">{"Hall Bookings"}</div>
            <div class="nav-links">
                {nav_link("home", "Home")}
                {nav_link("availability", "Availability")}
                {nav_link("booking", "Book Now")}
            </div>
        </nav>
    }
}

fn scroll_to_section(fragment: &str) {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document.get_element_by_id(fragment) else {
        return;
    };

    let nav_height = document
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(NAV_OFFSET_FALLBACK);

    let top = scroll_target_top(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        nav_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Absolute scroll position that puts the section heading just below the
/// fixed navbar.
fn scroll_target_top(rect_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    rect_top + scroll_y - nav_height
}
