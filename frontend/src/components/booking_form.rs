use chrono::NaiveDate;
use serde::Serialize;
use shared::HallSummary;
use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub halls: Vec<HallSummary>,
}

/// What a real submission would carry. The page only simulates the booking,
/// so this is logged instead of sent.
#[derive(Debug, Serialize)]
struct BookingRequest {
    hall: String,
    date: String,
    name: String,
    email: String,
}

/// Simulated booking form: submit is intercepted, incomplete input gets a
/// browser alert, complete input swaps the form for a confirmation block.
/// Nothing is sent anywhere.
#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let hall = use_state(|| props.halls.first().map(|h| h.id.clone()).unwrap_or_default());
    let date = use_state(String::new);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let submitted = use_state(|| false);

    let on_hall_change = {
        let hall = hall.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            hall.set(select.value());
        })
    };

    let on_date_change = input_setter(date.clone());
    let on_name_change = input_setter(name.clone());
    let on_email_change = input_setter(email.clone());

    let on_submit = {
        let hall = hall.clone();
        let date = date.clone();
        let name = name.clone();
        let email = email.clone();
        let submitted = submitted.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if let Some(message) = refuse_submission(&date, &name, &email) {
                alert(message);
                return;
            }

            // A backend would receive this; the marketing page only logs it.
            let request = BookingRequest {
                hall: (*hall).clone(),
                date: (*date).clone(),
                name: (*name).clone(),
                email: (*email).clone(),
            };
            match serde_json::to_string(&request) {
                Ok(body) => gloo::console::log!(&format!("Simulated booking submission: {}", body)),
                Err(error) => gloo::console::warn!(&format!("Booking log skipped: {}", error)),
            }

            submitted.set(true);
        })
    };

    if *submitted {
        return html! {
            <div id="booking-status" class="booking-status">
                <h3>{"Request received!"}</h3>
                <p>{"Thanks! We will get back to you shortly to confirm your booking."}</p>
            </div>
        };
    }

    html! {
        <form id="booking-form" class="booking-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="hall-select">{"Hall"}</label>
                <select id="hall-select" onchange={on_hall_change}>
                    {for props.halls.iter().map(|entry| html! {
                        <option value={entry.id.clone()} selected={entry.id == *hall}>
                            {&entry.name}
                        </option>
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="booking-date">{"Date"}</label>
                <input
                    type="date"
                    id="booking-date"
                    value={(*date).clone()}
                    onchange={on_date_change}
                />
            </div>

            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input
                    type="text"
                    id="name"
                    placeholder="Your full name"
                    value={(*name).clone()}
                    onchange={on_name_change}
                />
            </div>

            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input
                    type="email"
                    id="email"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    onchange={on_email_change}
                />
            </div>

            <button type="submit" class="btn btn-primary">{"Request Booking"}</button>
        </form>
    }
}

fn input_setter(state: UseStateHandle<String>) -> Callback<Event> {
    Callback::from(move |event: Event| {
        let input: HtmlInputElement = event.target_unchecked_into();
        state.set(input.value());
    })
}

/// Why a submission attempt is refused, as the alert text, or `None` when
/// the input is acceptable.
fn refuse_submission(date: &str, name: &str, email: &str) -> Option<&'static str> {
    if date.trim().is_empty() || name.trim().is_empty() || email.trim().is_empty() {
        return Some("Please fill in all required fields (Date, Name, Email).");
    }
    if NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").is_err() {
        return Some("Please choose a valid booking date.");
    }
    None
}

fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_refused() {
        let message = refuse_submission("", "Dana", "dana@example.com").unwrap();
        assert!(message.contains("required fields"));

        assert!(refuse_submission("2024-11-15", "", "dana@example.com").is_some());
        assert!(refuse_submission("2024-11-15", "Dana", "").is_some());
        assert!(refuse_submission("2024-11-15", "   ", "dana@example.com").is_some());
    }

    #[test]
    fn test_unparseable_date_is_refused() {
        let message = refuse_submission("2024-13-40", "Dana", "dana@example.com").unwrap();
        assert!(message.contains("valid booking date"));
    }

    #[test]
    fn test_complete_input_passes() {
        assert_eq!(
            refuse_submission("2024-11-15", "Dana", "dana@example.com"),
            None
        );
    }
}
