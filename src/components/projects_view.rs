//! Projects View Component
//!
//! Header, category selector and the results area. The results area
//! shows exactly one of: loader, failure view, project list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpProjectsApi;
use crate::components::{CategorySelect, FailureView, Loader, ProjectList};
use crate::config::use_app_config;
use crate::context::use_projects;
use crate::state::{load_projects, FetchState};

#[component]
pub fn ProjectsView() -> impl IntoView {
    let config = use_app_config();
    let ctx = use_projects();
    let model = ctx.model;
    let api = HttpProjectsApi::new(config.projects_api_url.clone());

    // Load on mount, on category change and on retry
    Effect::new(move |_| {
        let (category, trigger) = ctx.load_request.get();
        log::debug!("load effect: category={}, trigger={}", category, trigger);

        let api = api.clone();
        spawn_local(async move {
            load_projects(&api, &model).await;
        });
    });

    let failure_image_url = config.failure_image_url.clone();
    let on_retry = Callback::new(move |_| ctx.retry());
    let results = move || {
        results_view(
            model.with(|m| m.state().clone()),
            failure_image_url.clone(),
            on_retry,
        )
    };

    view! {
        <div class="projects-showcase">
            <nav class="header">
                <img class="website-logo" src=config.logo_url alt="website logo" />
            </nav>

            <CategorySelect
                selected=ctx.category
                on_change=move |category| ctx.change_category(category)
            />

            {results}
        </div>
    }
}

/// Results area for one fetch state
pub fn results_view(
    state: FetchState,
    failure_image_url: String,
    on_retry: Callback<()>,
) -> AnyView {
    match state {
        FetchState::Loading => view! {
            <div data-testid="loader">
                <Loader />
            </div>
        }.into_any(),
        FetchState::Failed(message) => {
            log::debug!("showing failure view: {}", message);
            view! {
                <FailureView image_url=failure_image_url on_retry=on_retry />
            }.into_any()
        }
        FetchState::Loaded(projects) => view! {
            <ProjectList projects=projects />
        }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::Project;
    use crate::state::ProjectsModel;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    fn render(state: FetchState) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let on_retry = Callback::new(|_| {});
            results_view(state, "http://x/failure.png".to_string(), on_retry).to_html()
        })
    }

    #[test]
    fn test_initial_render_shows_only_loader() {
        let html = render(ProjectsModel::new().state().clone());

        assert!(html.contains(r#"data-testid="loader""#));
        assert!(html.contains("loader-dot"));
        assert!(!html.contains("failure-view"));
        assert!(!html.contains("projects-list"));
    }

    #[test]
    fn test_not_found_renders_failure_view() {
        let mut model = ProjectsModel::new();
        let ticket = model.begin_load();
        model.apply_response(ticket, Err(FetchError::Status(404)));

        let html = render(model.state().clone());

        assert!(html.contains(r#"src="http://x/failure.png""#));
        assert!(html.contains(r#"alt="failure view""#));
        assert!(html.contains("Oops! Something Went Wrong"));
        assert!(html.contains("Retry</button>"));
        assert!(!html.contains("loader"));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn test_success_renders_one_item() {
        let html = render(FetchState::Loaded(vec![Project {
            id: "1".to_string(),
            name: "Foo".to_string(),
            image_url: "http://x/1.png".to_string(),
        }]));

        assert_eq!(html.matches("<li").count(), 1);
        assert!(html.contains(r#"alt="Foo""#));
        assert!(html.contains(">Foo</p>"));
        assert!(!html.contains("loader"));
        assert!(!html.contains("failure-view"));
    }

    #[test]
    fn test_empty_result_renders_empty_list() {
        let html = render(FetchState::Loaded(Vec::new()));

        assert!(html.contains(r#"<ul class="projects-list">"#));
        assert_eq!(html.matches("<li").count(), 0);
        assert!(!html.contains("failure-view"));
    }
}
