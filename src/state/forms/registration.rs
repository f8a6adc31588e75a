//! Sign-up form state

use super::country::{Country, COUNTRIES};
use super::field::FormField;
use chrono::{Days, Local, Months, NaiveDate};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Focusable rows of the sign-up form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Name,
    Email,
    Address,
    PhoneNumber,
    Password,
    ConfirmPassword,
    Country,
    Date,
    Submit,
    /// Top-left back button
    Back,
}

impl RegisterField {
    pub const ALL: [RegisterField; 10] = [
        Self::Name,
        Self::Email,
        Self::Address,
        Self::PhoneNumber,
        Self::Password,
        Self::ConfirmPassword,
        Self::Country,
        Self::Date,
        Self::Submit,
        Self::Back,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// Whether typing goes into this row
    pub fn accepts_text(&self) -> bool {
        !matches!(
            self,
            Self::Country | Self::Date | Self::Submit | Self::Back
        )
    }
}

/// Values entered on the sign-up screen plus its two visibility flags
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: FormField,
    pub email: FormField,
    pub address: FormField,
    pub phone_number: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    /// Dialing code, e.g. "+62"
    pub selected_country: Option<String>,
    pub date: NaiveDate,
    pub password_visible: bool,
    pub date_picker_open: bool,
    /// Highlighted row while the country dropdown is open
    pub country_picker: Option<usize>,
    pub active_field_index: usize,
}

impl RegisterForm {
    /// Fresh form dated today
    pub fn new() -> Self {
        Self::with_date(Local::now().date_naive())
    }

    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            name: FormField::text("Name"),
            email: FormField::text("Email"),
            address: FormField::text("Address"),
            phone_number: FormField::text("Phone Number"),
            password: FormField::secret("Password"),
            confirm_password: FormField::secret("Confirm Password"),
            selected_country: None,
            date,
            password_visible: false,
            date_picker_open: false,
            country_picker: None,
            active_field_index: 0,
        }
    }

    pub fn active(&self) -> RegisterField {
        RegisterField::from_index(self.active_field_index)
    }

    pub fn is_submit_active(&self) -> bool {
        self.active() == RegisterField::Submit
    }

    /// Text field that currently receives keystrokes, if any
    pub fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active() {
            RegisterField::Name => Some(&mut self.name),
            RegisterField::Email => Some(&mut self.email),
            RegisterField::Address => Some(&mut self.address),
            RegisterField::PhoneNumber => Some(&mut self.phone_number),
            RegisterField::Password => Some(&mut self.password),
            RegisterField::ConfirmPassword => Some(&mut self.confirm_password),
            RegisterField::Country
            | RegisterField::Date
            | RegisterField::Submit
            | RegisterField::Back => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_text_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_text_field_mut() {
            field.pop_char();
        }
    }

    /// Show or hide both password fields
    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn toggle_date_picker(&mut self) {
        self.date_picker_open = !self.date_picker_open;
    }

    /// Change callback for the country picker
    pub fn select_country(&mut self, code: &str) {
        self.selected_country = Some(code.to_string());
    }

    /// Change callback for the date picker
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Move the date by whole days; out-of-range results are ignored
    pub fn shift_days(&mut self, days: i64) {
        let shifted = if days >= 0 {
            self.date.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = shifted {
            self.set_date(date);
        }
    }

    /// Move the date by whole months, clamping the day to the month's end
    pub fn shift_months(&mut self, months: i32) {
        let shifted = if months >= 0 {
            self.date.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.date.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(date) = shifted {
            self.set_date(date);
        }
    }

    /// Date as shown on the form, e.g. "Sat Oct 17 2026"
    pub fn date_label(&self) -> String {
        self.date.format("%a %b %d %Y").to_string()
    }

    pub fn selected_country_label(&self) -> Option<String> {
        let code = self.selected_country.as_deref()?;
        Some(
            Country::by_code(code)
                .map(Country::label)
                .unwrap_or_else(|| code.to_string()),
        )
    }

    pub fn is_country_picker_open(&self) -> bool {
        self.country_picker.is_some()
    }

    /// Open the dropdown with the current selection highlighted
    pub fn open_country_picker(&mut self) {
        let start = self
            .selected_country
            .as_deref()
            .and_then(Country::index_of)
            .unwrap_or(0);
        self.country_picker = Some(start);
    }

    pub fn close_country_picker(&mut self) {
        self.country_picker = None;
    }

    pub fn country_picker_next(&mut self) {
        if let Some(idx) = self.country_picker.as_mut() {
            *idx = (*idx + 1) % COUNTRIES.len();
        }
    }

    pub fn country_picker_prev(&mut self) {
        if let Some(idx) = self.country_picker.as_mut() {
            *idx = if *idx == 0 {
                COUNTRIES.len() - 1
            } else {
                *idx - 1
            };
        }
    }

    /// Select the highlighted country and close the dropdown
    pub fn confirm_country_picker(&mut self) {
        if let Some(idx) = self.country_picker.take() {
            if let Some(country) = COUNTRIES.get(idx) {
                self.select_country(country.code);
            }
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn field_count(&self) -> usize {
        RegisterField::ALL.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(RegisterField::ALL.len() - 1);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.address),
            3 => Some(&self.phone_number),
            4 => Some(&self.password),
            5 => Some(&self.confirm_password),
            // Country, date and the buttons are not text fields
            _ => None,
        }
    }
}
