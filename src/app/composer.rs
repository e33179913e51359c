//! Compose box for new posts and chat messages

/// Which composer field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerField {
    /// Main text
    #[default]
    Text,
    /// Tags line
    Tags,
}

/// Text submitted from a composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Body, trimmed
    pub text: String,
    /// Raw tags line
    pub tags_line: String,
}

impl Draft {
    /// Tags parsed from the tags line.
    ///
    /// Accepts `#щука #зимняя_рыбалка`, `щука, карп` and mixes of both.
    pub fn tags(&self) -> Vec<String> {
        self.tags_line
            .split(|c: char| c.is_whitespace() || c == ',')
            .map(|tag| tag.trim_start_matches('#'))
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Draft text plus the open/closed state of the compose surface
#[derive(Debug, Clone, Default)]
pub struct Composer {
    text: String,
    tags: String,
    open: bool,
    collapsible: bool,
    tags_enabled: bool,
    focus: ComposerField,
}

impl Composer {
    /// A composer that opens on demand and closes after submit (posts)
    pub fn collapsible() -> Self {
        Self {
            collapsible: true,
            ..Self::default()
        }
    }

    /// A composer that is always open (chat input)
    pub fn inline() -> Self {
        Self {
            open: true,
            ..Self::default()
        }
    }

    /// Enable the tags line
    pub fn with_tags(mut self) -> Self {
        self.tags_enabled = true;
        self
    }

    /// Draft text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Draft tags line
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Whether the compose surface is visible
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether this composer has a tags line
    pub fn has_tags(&self) -> bool {
        self.tags_enabled
    }

    /// Field receiving input
    pub fn focus(&self) -> ComposerField {
        self.focus
    }

    /// Submitting is allowed only with non-blank text
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Show the compose surface
    pub fn open(&mut self) {
        self.open = true;
        self.focus = ComposerField::Text;
    }

    /// Hide a collapsible surface, keeping the draft for the next `open`
    pub fn hide(&mut self) {
        if self.collapsible {
            self.open = false;
        }
    }

    /// Discard the draft and, if collapsible, hide the surface
    pub fn cancel(&mut self) {
        self.clear();
        if self.collapsible {
            self.open = false;
        }
    }

    /// Replace the draft text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace the tags line (ignored when tags are disabled)
    pub fn set_tags(&mut self, tags: impl Into<String>) {
        if self.tags_enabled {
            self.tags = tags.into();
        }
    }

    /// Type a character into the focused field
    pub fn push(&mut self, c: char) {
        match self.focus {
            ComposerField::Text => self.text.push(c),
            ComposerField::Tags => self.tags.push(c),
        }
    }

    /// Delete the last character of the focused field
    pub fn pop(&mut self) {
        match self.focus {
            ComposerField::Text => self.text.pop(),
            ComposerField::Tags => self.tags.pop(),
        };
    }

    /// Switch between text and tags (no-op without tags)
    pub fn toggle_field(&mut self) {
        if self.tags_enabled {
            self.focus = match self.focus {
                ComposerField::Text => ComposerField::Tags,
                ComposerField::Tags => ComposerField::Text,
            };
        }
    }

    /// Take the draft.
    ///
    /// Returns `None` and changes nothing when the text is blank. Otherwise
    /// clears both fields and closes a collapsible surface.
    pub fn submit(&mut self) -> Option<Draft> {
        if !self.can_submit() {
            return None;
        }
        let draft = Draft {
            text: self.text.trim().to_string(),
            tags_line: std::mem::take(&mut self.tags),
        };
        self.clear();
        if self.collapsible {
            self.open = false;
        }
        Some(draft)
    }

    fn clear(&mut self) {
        self.text.clear();
        self.tags.clear();
        self.focus = ComposerField::Text;
    }
}
