mod components;
mod hooks;
mod services;

use std::rc::Rc;

use yew::prelude::*;

use components::booking_form::BookingForm;
use components::calendar::CalendarView;
use components::carousel::Carousel;
use components::navbar::Navbar;
use shared::SitePayload;

#[function_component(App)]
fn app() -> Html {
    // The host page embeds the availability payload; read and validate it
    // exactly once, then hand typed slices to the sections below.
    let payload: Rc<Option<SitePayload>> = use_memo((), |_| match services::page_data::load() {
        Ok(payload) => Some(payload),
        Err(error) => {
            gloo::console::error!(&format!("Failed to load page data: {:#}", error));
            None
        }
    });

    let hero = match &*payload {
        Some(payload) if !payload.carousel.is_empty() => html! {
            <Carousel images={payload.carousel.clone()} />
        },
        _ => html! {},
    };

    let calendar = match &*payload {
        Some(payload) => html! {
            <CalendarView
                halls={payload.halls.clone()}
                availability={Rc::new(payload.availability.clone())}
            />
        },
        None => html! {
            <div class="section-fallback">{"Availability is unavailable right now."}</div>
        },
    };

    let halls = match &*payload {
        Some(payload) => payload.halls.clone(),
        None => Vec::new(),
    };

    html! {
        <>
            <Navbar />
            <main>
                <section id="home" class="hero-section">
                    {hero}
                </section>

                <section id="availability" class="availability-section">
                    <h2>{"Availability"}</h2>
                    {calendar}
                </section>

                <section id="booking" class="booking-section">
                    <h2>{"Book a Hall"}</h2>
                    <BookingForm {halls} />
                </section>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
