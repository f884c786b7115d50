//! Category Select Component
//!
//! Dropdown over the fixed category set.

use leptos::prelude::*;

use crate::models::Category;

/// Category dropdown. Values outside the category set are ignored.
#[component]
pub fn CategorySelect(
    selected: Memo<Category>,
    on_change: impl Fn(Category) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="category-select"
            prop:value=move || selected.get().id()
            on:change=move |ev| {
                match event_target_value(&ev).parse::<Category>() {
                    Ok(category) => on_change(category),
                    Err(e) => log::warn!("ignoring selector value: {}", e),
                }
            }
        >
            {Category::ALL_CATEGORIES.iter().map(|category| {
                let category = *category;
                view! {
                    <option
                        value=category.id()
                        selected=move || selected.get() == category
                    >
                        {category.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
