//! Failure View Component

use leptos::prelude::*;

pub const FAILURE_TITLE: &str = "Oops! Something Went Wrong";
pub const FAILURE_MESSAGE: &str = "We cannot seem to find the page you are looking for";

/// Generic failure illustration with a retry button
#[component]
pub fn FailureView(
    #[prop(into)] image_url: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="failure-view">
            <img class="failure-img" src=image_url alt="failure view" />
            <h1 class="failure-title">{FAILURE_TITLE}</h1>
            <p class="failure-message">{FAILURE_MESSAGE}</p>
            <button class="retry-btn" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
