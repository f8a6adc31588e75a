//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    bundled_jobs, load_jobs, validate, AppState, Country, DetailFocus, Form, FormDefaults,
    JobPost, RegisterField, SubmissionHandler, SubmissionPayload, TracingSubmissionHandler, View,
    ViewParams,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives sign-up payloads that passed validation
    submission_handler: Box<dyn SubmissionHandler>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let mut startup_errors = Vec::new();
        let jobs = match &config.jobs_file {
            Some(path) => match load_jobs(path) {
                Ok(jobs) => jobs,
                Err(err) => {
                    tracing::warn!("Falling back to bundled jobs: {err}");
                    startup_errors.push(err.to_string());
                    bundled_jobs()?
                }
            },
            None => bundled_jobs()?,
        };
        tracing::info!("Loaded {} job posts", jobs.len());

        // Only dialing codes from the catalog may be preselected
        let country = match config.default_country.as_deref() {
            Some(code) if Country::by_code(code).is_none() => {
                tracing::warn!("Ignoring unknown default country {code}");
                startup_errors.push(format!("Unknown default country in config: {code}"));
                None
            }
            code => code.map(str::to_string),
        };

        let defaults = FormDefaults {
            country,
            show_password: config.show_password(),
        };
        let mut app = Self::with_handler(
            AppState::new(jobs, defaults),
            Box::new(TracingSubmissionHandler),
        );
        for message in startup_errors {
            app.push_error(message);
        }
        Ok(app)
    }

    /// Create an App around existing state and a custom submission handler
    pub fn with_handler(state: AppState, submission_handler: Box<dyn SubmissionHandler>) -> Self {
        Self {
            state,
            submission_handler,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.status_message = None;

        match self.state.current_view {
            View::Jobs => self.handle_jobs_key(key),
            View::JobDetail => self.handle_job_detail_key(key),
            View::Booking => self.handle_booking_key(key),
            View::Register => self.handle_register_key(key),
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        tracing::info!("Navigating to {view:?}");
        self.state.view_history.push((
            self.state.current_view.clone(),
            self.state.view_params.clone(),
        ));
        self.state.current_view = view;
        self.state.view_params = params;
    }

    /// Go back to the last non-form view
    pub fn go_back(&mut self) {
        while let Some((view, params)) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            tracing::info!("Going back to {view:?}");
            self.state.current_view = view;
            self.state.view_params = params;
            self.restore_selection();
            return;
        }
        // Nothing to return to; never leave the user stranded on a form
        if self.state.current_view.is_form_view() {
            self.state.current_view = View::Jobs;
            self.state.view_params = ViewParams::default();
            self.restore_selection();
        }
    }

    /// Re-point the list selection at what the restored view shows
    fn restore_selection(&mut self) {
        self.state.reset_selection();
        if self.state.current_view == View::Jobs {
            if let Some(id) = &self.state.view_params.job_id {
                if let Some(idx) = self.state.jobs.iter().position(|job| &job.id == id) {
                    self.state.selected_index = idx;
                }
            }
        }
    }

    fn open_register(&mut self) {
        self.state.clear_form();
        self.navigate(View::Register, ViewParams::default());
    }

    /// Leave the sign-up screen, discarding its state
    fn leave_register(&mut self) {
        self.state.clear_form();
        self.go_back();
    }

    fn selected_list_job(&self) -> Option<&JobPost> {
        self.state.jobs.get(self.state.selected_index)
    }

    fn toggle_favorite(&mut self, job_id: &str) {
        let is_favorite = self.state.toggle_favorite(job_id);
        tracing::debug!("Favourite {job_id}: {is_favorite}");
        self.status_message = Some(if is_favorite {
            "Added to favourites".to_string()
        } else {
            "Removed from favourites".to_string()
        });
    }

    /// Handle keys in Jobs view
    fn handle_jobs_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.move_selection_down(self.state.jobs.len())
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_list_job().map(|job| job.id.clone()) {
                    // Remember the row so going back lands on it again
                    self.state.view_params.job_id = Some(id.clone());
                    self.state.selected_job_id = Some(id.clone());
                    self.state.detail_focus = DetailFocus::default();
                    self.state.reset_selection();
                    self.navigate(View::JobDetail, ViewParams { job_id: Some(id) });
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.selected_list_job().map(|job| job.id.clone()) {
                    self.toggle_favorite(&id);
                }
            }
            KeyCode::Char('r') => self.open_register(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in Job Detail view
    fn handle_job_detail_key(&mut self, key: KeyEvent) {
        let Some(job_id) = self.state.selected_job().map(|job| job.id.clone()) else {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.go_back();
            }
            return;
        };
        let bid_count = self.state.selected_job().map_or(0, |job| job.bids.len());
        let on_bids = self.state.detail_focus == DetailFocus::Bids;

        match key.code {
            KeyCode::Tab => self.state.detail_focus = self.state.detail_focus.next(),
            KeyCode::BackTab => self.state.detail_focus = self.state.detail_focus.prev(),
            KeyCode::Up | KeyCode::Char('k') if on_bids => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') if on_bids => {
                self.state.move_selection_down(bid_count)
            }
            KeyCode::Enter => match self.state.detail_focus {
                DetailFocus::Back => self.go_back(),
                DetailFocus::Favorite => self.toggle_favorite(&job_id),
                DetailFocus::Book => self.book(job_id),
                DetailFocus::Bids => {}
            },
            KeyCode::Char('f') => self.toggle_favorite(&job_id),
            KeyCode::Char('b') => self.book(job_id),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn book(&mut self, job_id: String) {
        self.navigate(
            View::Booking,
            ViewParams {
                job_id: Some(job_id),
            },
        );
    }

    /// Handle keys in Booking view
    fn handle_booking_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            self.go_back();
        }
    }

    /// Handle keys in Register view
    fn handle_register_key(&mut self, key: KeyEvent) {
        if self.state.register_form.is_country_picker_open() {
            self.handle_country_picker_key(key);
            return;
        }
        if self.state.register_form.date_picker_open {
            self.handle_date_picker_key(key);
            return;
        }

        let shortcut = key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER);
        let active = self.state.register_form.active();

        match key.code {
            KeyCode::F(2) => return self.toggle_password_visibility(),
            KeyCode::Char('r') if shortcut => return self.toggle_password_visibility(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.submit_registration()
            }
            KeyCode::Enter if active == RegisterField::Submit => {
                return self.submit_registration()
            }
            KeyCode::Enter if active == RegisterField::Back => return self.leave_register(),
            KeyCode::Esc => return self.leave_register(),
            _ => {}
        }

        let form = &mut self.state.register_form;
        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Up => form.prev_field(),
            KeyCode::Down => form.next_field(),
            KeyCode::Enter => match active {
                RegisterField::Country => form.open_country_picker(),
                RegisterField::Date => form.toggle_date_picker(),
                _ => form.next_field(),
            },
            KeyCode::Char(c) if !shortcut && active.accepts_text() => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    fn toggle_password_visibility(&mut self) {
        let form = &mut self.state.register_form;
        form.toggle_password_visibility();
        tracing::debug!("Password visible: {}", form.password_visible);
    }

    fn handle_country_picker_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.register_form;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => form.country_picker_prev(),
            KeyCode::Down | KeyCode::Char('j') => form.country_picker_next(),
            KeyCode::Enter => {
                form.confirm_country_picker();
                tracing::debug!("Country selected: {:?}", form.selected_country);
            }
            KeyCode::Esc => form.close_country_picker(),
            _ => {}
        }
    }

    fn handle_date_picker_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.register_form;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => form.shift_days(-1),
            KeyCode::Right | KeyCode::Char('l') => form.shift_days(1),
            KeyCode::Up | KeyCode::Char('k') => form.shift_months(-1),
            KeyCode::Down | KeyCode::Char('j') => form.shift_months(1),
            KeyCode::PageUp => form.shift_months(-12),
            KeyCode::PageDown => form.shift_months(12),
            KeyCode::Enter | KeyCode::Esc => form.toggle_date_picker(),
            _ => {}
        }
    }

    /// Validate the sign-up form and hand the payload on.
    ///
    /// On failure the form is left as it is so the user can correct it.
    fn submit_registration(&mut self) {
        let payload = match validate(&self.state.register_form) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!("Registration rejected: {err:?}");
                self.push_error(err.to_string());
                return;
            }
        };

        self.deliver_registration(&payload);
    }

    fn deliver_registration(&mut self, payload: &SubmissionPayload) {
        match self.submission_handler.submit(payload) {
            Ok(()) => {
                tracing::info!("Registration submitted for {}", payload.email);
                self.status_message = Some("Registration submitted".to_string());
                self.leave_register();
            }
            Err(err) => {
                tracing::warn!("Registration handler failed: {err:#}");
                self.push_error(format!("Failed to submit registration: {err}"));
            }
        }
    }
}
