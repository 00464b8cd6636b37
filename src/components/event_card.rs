//! Card for a community event in the discovery feed.

use leptos::prelude::*;

use crate::mock::types::{Event, EventCategory};
use crate::routes::AppRoute;
use crate::util::class_merge::merge_class_fragments;

fn category_class(category: EventCategory) -> &'static str {
    match category {
        EventCategory::Meetup => "event-card--meetup bg-emerald-50",
        EventCategory::Blitz => "event-card--blitz bg-amber-50",
        EventCategory::Lesson => "event-card--lesson bg-sky-50",
        EventCategory::Tournament => "event-card--tournament bg-violet-50",
    }
}

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let class = merge_class_fragments([Some("card event-card p-4 rounded-lg bg-white"), Some(category_class(event.category))]);
    let venue_href = AppRoute::Venue { id: event.venue_id.clone() }.href();
    let spots = match event.spots_left {
        0 => "Full".to_owned(),
        1 => "1 spot left".to_owned(),
        n => format!("{n} spots left"),
    };

    view! {
        <article class=class>
            <span class="event-card__category">{event.category.label()}</span>
            <h3 class="event-card__title">{event.title}</h3>
            <p class="event-card__when">{format!("{} at {}", event.date, event.start_time)}</p>
            <p class="event-card__host">
                "Hosted by " {event.host} " · "
                <a href=venue_href>{event.city}</a>
            </p>
            <span class="event-card__spots">{spots}</span>
        </article>
    }
}
