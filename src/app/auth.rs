//! Sign-in / sign-up form state

/// Form layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Email + password
    #[default]
    Login,
    /// Email + password + display name
    Register,
}

impl AuthMode {
    /// Tab label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Login => "Вход",
            Self::Register => "Регистрация",
        }
    }

    /// Submit button label
    pub const fn submit_label(&self) -> &'static str {
        match self {
            Self::Login => "Войти",
            Self::Register => "Зарегистрироваться",
        }
    }
}

/// Form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    /// Email
    #[default]
    Email,
    /// Password
    Password,
    /// Display name (register only)
    Name,
}

impl AuthField {
    /// Placeholder text
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Пароль",
            Self::Name => "Имя",
        }
    }
}

/// Auth panel view state.
///
/// The entered values are kept only so they can be displayed; nothing reads
/// them on submit.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    /// Current layout
    pub mode: AuthMode,
    /// Focused field
    pub focus: AuthField,
    /// Email input
    pub email: String,
    /// Password input
    pub password: String,
    /// Name input
    pub name: String,
}

impl AuthForm {
    /// Fields visible in the current mode, top to bottom
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Register => &[AuthField::Email, AuthField::Password, AuthField::Name],
        }
    }

    /// Switch between login and register
    pub fn toggle_mode(&mut self) {
        self.set_mode(match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        });
    }

    /// Pick a layout; focus falls back to the first field if it disappears
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        if !self.fields().contains(&self.focus) {
            self.focus = AuthField::Email;
        }
    }

    /// Focus the next visible field (wraps)
    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    /// Focus the previous visible field (wraps)
    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + fields.len() - 1) % fields.len()];
    }

    /// Value of a field
    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::Name => &self.name,
        }
    }

    /// Type into the focused field
    pub fn push(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Delete from the focused field
    pub fn pop(&mut self) {
        self.focused_mut().pop();
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::Name => &mut self.name,
        }
    }
}
