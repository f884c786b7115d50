//! Loader Component
//!
//! Three pulsing dots shown while a fetch is outstanding.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-label="loading">
            <span class="loader-dot"></span>
            <span class="loader-dot"></span>
            <span class="loader-dot"></span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_loader_dots() {
        let html = view! { <Loader /> }.to_html();
        assert_eq!(html.matches("loader-dot").count(), 3);
    }
}
