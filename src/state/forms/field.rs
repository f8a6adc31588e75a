//! Form field value objects

/// How a field's value is shown on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    /// Masked unless the owning form reveals it
    Secret,
}

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone, Default)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            kind: FieldKind::Text,
        }
    }

    /// Create a new secret (password) field
    pub fn secret(label: &str) -> Self {
        Self {
            kind: FieldKind::Secret,
            ..Self::text(label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_secret(&self) -> bool {
        self.kind == FieldKind::Secret
    }

    /// Replace the whole value
    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Get the display value for rendering
    ///
    /// Secret fields are masked with one bullet per character unless `reveal` is set.
    pub fn display_value(&self, reveal: bool) -> String {
        if self.is_secret() && !reveal {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("Email");
        assert!(field.is_empty());
        assert_eq!(field.label, "Email");
        assert!(!field.is_secret());
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("Name");
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text("Name");
        field.pop_char();
        assert!(field.is_empty());
    }

    #[test]
    fn test_secret_display_is_masked() {
        let mut field = FormField::secret("Password");
        field.set_text("héllo");
        assert_eq!(field.display_value(false), "•••••");
        assert_eq!(field.display_value(true), "héllo");
    }

    #[test]
    fn test_text_display_ignores_reveal() {
        let mut field = FormField::text("Address");
        field.set_text("Jl. Merdeka 1");
        assert_eq!(field.display_value(false), "Jl. Merdeka 1");
    }
}
