//! Projects State
//!
//! The model behind the projects view and the load flow that drives it.
//! Responses are applied in completion order: a response for a superseded
//! request still lands, and whichever resolves last wins.

use std::mem;

use leptos::prelude::*;

use crate::api::ProjectsApi;
use crate::error::FetchError;
use crate::models::{Category, Project};

/// What the results area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Failed(String),
    Loaded(Vec<Project>),
}

/// Identifies one issued load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub category: Category,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsModel {
    category: Category,
    state: FetchState,
    /// Last loaded list while the state is not `Loaded`
    retained: Vec<Project>,
    issued: u64,
}

impl Default for ProjectsModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectsModel {
    pub fn new() -> Self {
        Self {
            category: Category::default(),
            state: FetchState::Loading,
            retained: Vec::new(),
            issued: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    /// Current project list, including one kept from an earlier success
    /// while a later load is pending or failed
    #[cfg(test)]
    pub fn projects(&self) -> &[Project] {
        match &self.state {
            FetchState::Loaded(projects) => projects,
            _ => &self.retained,
        }
    }

    /// Select a category. Returns false if it was already selected.
    pub fn select(&mut self, category: Category) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        true
    }

    /// Enter `Loading` for the selected category and issue a ticket
    pub fn begin_load(&mut self) -> LoadTicket {
        self.park_loaded(FetchState::Loading);
        self.issued += 1;
        LoadTicket {
            category: self.category,
            seq: self.issued,
        }
    }

    /// Whether `ticket` belongs to the most recently issued load
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.seq == self.issued
    }

    /// Apply the outcome of a load. Stale tickets are not rejected.
    pub fn apply_response(&mut self, ticket: LoadTicket, result: Result<Vec<Project>, FetchError>) {
        if !self.is_current(ticket) {
            log::warn!(
                "applying response for superseded request #{} ({}), latest is #{}",
                ticket.seq,
                ticket.category,
                self.issued
            );
        }

        match result {
            Ok(projects) => {
                self.retained.clear();
                self.state = FetchState::Loaded(projects);
            }
            Err(e) => {
                self.park_loaded(FetchState::Failed(e.to_string()));
                log::debug!("{} previously loaded projects retained", self.retained.len());
            }
        }
    }

    fn park_loaded(&mut self, next: FetchState) {
        if let FetchState::Loaded(projects) = mem::replace(&mut self.state, next) {
            self.retained = projects;
        }
    }
}

// ========================
// Model Handles
// ========================

/// Shared, mutable access to a `ProjectsModel`
pub trait ModelHandle {
    /// Run `f` against the model. `None` if the model is gone.
    fn update_model<R>(&self, f: impl FnOnce(&mut ProjectsModel) -> R) -> Option<R>;
}

impl ModelHandle for RwSignal<ProjectsModel> {
    fn update_model<R>(&self, f: impl FnOnce(&mut ProjectsModel) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[cfg(test)]
impl ModelHandle for std::cell::RefCell<ProjectsModel> {
    fn update_model<R>(&self, f: impl FnOnce(&mut ProjectsModel) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

// ========================
// Load Flow
// ========================

/// Fetch projects for the selected category and apply the result
pub async fn load_projects<A, H>(api: &A, handle: &H)
where
    A: ProjectsApi + ?Sized,
    H: ModelHandle,
{
    let Some(ticket) = handle.update_model(ProjectsModel::begin_load) else {
        return;
    };
    log::info!("loading projects for {} (request #{})", ticket.category, ticket.seq);

    let result = api.fetch_projects(ticket.category).await;
    match &result {
        Ok(projects) => log::info!("loaded {} projects for {}", projects.len(), ticket.category),
        Err(e) => log::error!("failed to load projects for {}: {}", ticket.category, e),
    }

    handle.update_model(|model| model.apply_response(ticket, result));
}

/// Select a category. Returns true if the selection changed and a
/// reload is due.
pub fn change_category<H: ModelHandle>(handle: &H, category: Category) -> bool {
    handle
        .update_model(|model| model.select(category))
        .unwrap_or(false)
}
