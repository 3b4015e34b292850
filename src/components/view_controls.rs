//! View Controls Component
//!
//! Filter and sort selectors above the list.

use leptos::prelude::*;
use todo_store::{Command, Filter, SortOrder};

use crate::store::use_app_store;

#[component]
pub fn ViewControls() -> impl IntoView {
    let store = use_app_store();

    let on_filter = move |ev: web_sys::Event| match event_target_value(&ev).parse::<Filter>() {
        Ok(filter) => store.dispatch(Command::SetFilter(filter)),
        Err(err) => log::warn!("{}", err),
    };
    let on_sort = move |ev: web_sys::Event| match event_target_value(&ev).parse::<SortOrder>() {
        Ok(sort) => store.dispatch(Command::SetSort(sort)),
        Err(err) => log::warn!("{}", err),
    };

    view! {
        <div class="view-controls">
            <label class="view-control">
                "Filter"
                <select on:change=on_filter>
                    {Filter::ALL.into_iter().map(move |filter| view! {
                        <option
                            value=filter.as_str()
                            selected=move || store.with(|s| s.filter() == filter)
                        >
                            {filter.label()}
                        </option>
                    }).collect_view()}
                </select>
            </label>
            <label class="view-control">
                "Sort by"
                <select on:change=on_sort>
                    {SortOrder::ALL.into_iter().map(move |sort| view! {
                        <option
                            value=sort.as_str()
                            selected=move || store.with(|s| s.sort() == sort)
                        >
                            {sort.label()}
                        </option>
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}
