//! Application state definitions

use super::forms::RegisterForm;
use super::jobs::JobPost;
use std::collections::{HashSet, VecDeque};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Jobs,
    JobDetail,
    Booking,
    Register,
}

impl View {
    /// Views that hold unsaved input and are skipped when going back
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::Register)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Jobs => "Jobs",
            View::JobDetail => "Job Detail",
            View::Booking => "Booking",
            View::Register => "Sign Up",
        }
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub job_id: Option<String>,
}

/// Focus state for the job detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFocus {
    #[default]
    Bids,
    Back,
    Favorite,
    Book,
}

impl DetailFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Bids => Self::Back,
            Self::Back => Self::Favorite,
            Self::Favorite => Self::Book,
            Self::Book => Self::Bids,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Bids => Self::Book,
            Self::Back => Self::Bids,
            Self::Favorite => Self::Back,
            Self::Book => Self::Favorite,
        }
    }
}

/// Values a fresh sign-up form starts with
#[derive(Debug, Clone, Default)]
pub struct FormDefaults {
    pub country: Option<String>,
    pub show_password: bool,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Data
    pub jobs: Vec<JobPost>,
    pub favorites: HashSet<String>,

    // Selection
    pub selected_index: usize,
    pub selected_job_id: Option<String>,
    pub detail_focus: DetailFocus,

    // Form state
    pub register_form: RegisterForm,
    pub form_defaults: FormDefaults,

    // Errors waiting to be shown, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(jobs: Vec<JobPost>, form_defaults: FormDefaults) -> Self {
        let mut state = Self {
            jobs,
            form_defaults,
            ..Default::default()
        };
        state.clear_form();
        state
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Job the detail/booking views are showing
    pub fn selected_job(&self) -> Option<&JobPost> {
        let id = self.selected_job_id.as_ref()?;
        self.jobs.iter().find(|job| &job.id == id)
    }

    pub fn is_favorite(&self, job_id: &str) -> bool {
        self.favorites.contains(job_id)
    }

    /// Flip the favourite mark on a job, returning the new value
    pub fn toggle_favorite(&mut self, job_id: &str) -> bool {
        if self.favorites.remove(job_id) {
            false
        } else {
            self.favorites.insert(job_id.to_string());
            true
        }
    }

    /// Reset the sign-up form to its configured defaults
    pub fn clear_form(&mut self) {
        let mut form = RegisterForm::new();
        if let Some(code) = &self.form_defaults.country {
            form.select_country(code);
        }
        form.password_visible = self.form_defaults.show_password;
        self.register_form = form;
    }

    /// Queue an error for display
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
