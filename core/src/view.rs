//! Pure view model for a todo list frontend.
//!
//! # Design
//! The view model is plain data with no I/O: the host fetches the
//! collection (via `TodoClient` build/parse) and feeds the outcome into
//! [`TodoViewModel::resolve`]; after a mutation it feeds the server's
//! response into the matching `apply_*` method so local state reconciles
//! with server truth. Rendering is a pure function of the current state:
//! the loading/error/empty messages and the stats labels are derived on
//! demand and never cached.
//!
//! The view model never retries a failed request on its own. Create in
//! particular is not idempotent, so a blind retry could duplicate todos;
//! recovery is always an explicit refetch-and-resolve by the host.

use crate::error::ApiError;
use crate::types::Todo;

/// Lifecycle of the fetched collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Initial state, before the first fetch resolves.
    #[default]
    Loading,
    /// The fetch was rejected; the list is unknown.
    Failed,
    /// The collection as last confirmed by the server.
    Ready(Vec<Todo>),
}

/// Client-side state for the todo list screen.
#[derive(Debug, Clone, Default)]
pub struct TodoViewModel {
    state: LoadState,
}

impl TodoViewModel {
    /// Starts in [`LoadState::Loading`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Feed the outcome of a list fetch. Overwrites whatever state was
    /// there before, so refetches and retries go through the same path.
    pub fn resolve(&mut self, outcome: Result<Vec<Todo>, ApiError>) {
        self.state = match outcome {
            Ok(todos) => LoadState::Ready(todos),
            Err(_) => LoadState::Failed,
        };
    }

    /// The user-facing status message for the current state, or `None`
    /// when the populated list itself should render.
    pub fn message(&self) -> Option<&'static str> {
        match &self.state {
            LoadState::Loading => Some("Loading..."),
            LoadState::Failed => Some("Failed to load todos"),
            LoadState::Ready(todos) if todos.is_empty() => Some("No todos yet"),
            LoadState::Ready(_) => None,
        }
    }

    /// The confirmed collection; empty until a fetch has resolved.
    pub fn todos(&self) -> &[Todo] {
        match &self.state {
            LoadState::Ready(todos) => todos,
            _ => &[],
        }
    }

    pub fn items_left(&self) -> usize {
        self.todos().iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos().iter().filter(|todo| todo.completed).count()
    }

    /// Stats line fragment, e.g. `"2 items left"`.
    pub fn items_left_label(&self) -> String {
        format!("{} items left", self.items_left())
    }

    /// Stats line fragment, e.g. `"2 completed"`.
    pub fn completed_label(&self) -> String {
        format!("{} completed", self.completed_count())
    }

    /// Reconcile a successful create: the server appends, so the client
    /// appends too, keeping insertion order aligned.
    pub fn apply_created(&mut self, todo: Todo) {
        if let LoadState::Ready(todos) = &mut self.state {
            todos.push(todo);
        }
    }

    /// Reconcile a toggle or update response by replacing the record with
    /// the server's version. Unknown ids are ignored; the next refetch
    /// settles any divergence.
    pub fn apply_updated(&mut self, todo: Todo) {
        if let LoadState::Ready(todos) = &mut self.state {
            if let Some(existing) = todos.iter_mut().find(|t| t.id == todo.id) {
                *existing = todo;
            }
        }
    }

    /// Reconcile a successful delete.
    pub fn apply_deleted(&mut self, id: u64) {
        if let LoadState::Ready(todos) = &mut self.state {
            todos.retain(|todo| todo.id != id);
        }
    }
}
