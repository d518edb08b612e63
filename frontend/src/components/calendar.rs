use std::rc::Rc;

use shared::{AvailabilityCalendarSet, CalendarCursor, HallSummary, MonthCalendar};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarViewProps {
    /// Selector entries, in display order.
    pub halls: Vec<HallSummary>,
    /// Validated availability data; never mutated here.
    pub availability: Rc<AvailabilityCalendarSet>,
}

/// Availability grid for one hall and one month, with a hall selector and
/// previous/next month controls. Exactly one month is rendered at a time;
/// moving the cursor replaces the whole grid.
///
/// The handlers derive a candidate cursor, check it against the data and
/// only then persist it, so a miss never disturbs what is on screen and a
/// boundary click changes nothing at all.
#[function_component(CalendarView)]
pub fn calendar_view(props: &CalendarViewProps) -> Html {
    // The cursor starts on the selector's initial value, at month 0.
    let cursor = use_state(|| {
        props
            .halls
            .first()
            .map(|hall| CalendarCursor::new(hall.id.clone()))
    });

    // Mount-time diagnostic for a first hall that comes without data.
    {
        let availability = props.availability.clone();
        let initial = (*cursor).clone();
        use_effect_with((), move |_| {
            if let Some(cursor) = initial {
                if availability.month(&cursor.hall, cursor.month_index).is_none() {
                    gloo::console::error!(&missing_data_message(&cursor));
                }
            }
            || ()
        });
    }

    let Some(current) = (*cursor).clone() else {
        return html! { <div id="calendar-container" class="calendar-container"></div> };
    };

    let on_hall_change = {
        let cursor = cursor.clone();
        let availability = props.availability.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let Some(next) = (*cursor).as_ref().map(|c| c.select_hall(select.value())) else {
                return;
            };
            if availability.month(&next.hall, next.month_index).is_none() {
                // Fail soft: the previous grid stays on screen.
                gloo::console::error!(&missing_data_message(&next));
                return;
            }
            cursor.set(Some(next));
        })
    };

    let on_prev = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(prev) = (*cursor).as_ref().and_then(CalendarCursor::prev) {
                cursor.set(Some(prev));
            }
        })
    };

    let on_next = {
        let cursor = cursor.clone();
        let availability = props.availability.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*cursor)
                .as_ref()
                .and_then(|c| c.next(availability.month_count(&c.hall)));
            if let Some(next) = next {
                cursor.set(Some(next));
            }
        })
    };

    let grid = match props.availability.month(&current.hall, current.month_index) {
        Some(month) => render_month(month, on_prev, on_next),
        // Nothing valid has been rendered yet; leave the container empty.
        None => html! {},
    };

    html! {
        <div class="calendar-block">
            <select id="calendar-hall-select" class="calendar-hall-select" onchange={on_hall_change}>
                {for props.halls.iter().map(|hall| html! {
                    <option value={hall.id.clone()} selected={hall.id == current.hall}>
                        {&hall.name}
                    </option>
                })}
            </select>
            <div id="calendar-container" class="calendar-container">
                {grid}
            </div>
        </div>
    }
}

fn missing_data_message(cursor: &CalendarCursor) -> String {
    format!(
        "Missing calendar data for {} month index {}",
        cursor.hall, cursor.month_index
    )
}

/// Header, weekday row and day grid for one month.
fn render_month(
    month: &MonthCalendar,
    on_prev: Callback<MouseEvent>,
    on_next: Callback<MouseEvent>,
) -> Html {
    let mut day_cells = Vec::new();
    for week in &month.weeks {
        for slot in week {
            day_cells.push(match slot {
                Some(day) => html! {
                    <div class="calendar-day" style={day.inline_style()}>
                        <span>{day.day}</span>
                    </div>
                },
                None => html! { <div class="calendar-day other-month"></div> },
            });
        }
    }

    html! {
        <>
            <div class="calendar-header">
                <button id="prev-month" aria-label="Previous Month" onclick={on_prev}>{"<"}</button>
                <span id="month-year">{month.label()}</span>
                <button id="next-month" aria-label="Next Month" onclick={on_next}>{">"}</button>
            </div>
            <div class="calendar-weekdays">
                <div>{"Sun"}</div><div>{"Mon"}</div><div>{"Tue"}</div>
                <div>{"Wed"}</div><div>{"Thu"}</div><div>{"Fri"}</div><div>{"Sat"}</div>
            </div>
            <div class="calendar-days">
                {for day_cells}
            </div>
        </>
    }
}
