use inksac::prelude::*;

/// Colour styling for everything the shell prints. A palette built with
/// colour disabled returns its input untouched.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color_support: ColorSupport,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn from_flag(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::new()
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        text.style(style).to_string()
    }

    pub fn command(&self, name: &str) -> String {
        let style = Style::builder().foreground(Color::Cyan).bold().build();
        self.paint(name, style)
    }

    pub fn directory(&self, name: &str) -> String {
        let style = Style::builder().foreground(Color::Cyan).bold().build();
        self.paint(name, style)
    }

    pub fn error(&self, message: &str) -> String {
        let style = Style::builder().foreground(Color::Red).bold().build();
        self.paint(message, style)
    }

    pub fn success(&self, message: &str) -> String {
        let style = Style::builder().foreground(Color::Green).build();
        self.paint(message, style)
    }

    pub fn usage(&self, message: &str) -> String {
        let style = Style::builder().foreground(Color::Yellow).build();
        self.paint(message, style)
    }

    pub fn hint(&self, hint: &str) -> String {
        let style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        self.paint(hint, style)
    }

    /// Colours the command word of an input line: cyan when `known` says the
    /// word is a registered command, red otherwise.
    pub fn highlight_line(&self, line: &str, known: impl Fn(&str) -> bool) -> String {
        if self.is_plain() {
            return line.to_string();
        }

        let trimmed = line.trim_start();
        let Some(word) = trimmed.split_whitespace().next() else {
            return line.to_string();
        };

        let indent = &line[..line.len() - trimmed.len()];
        let rest = &trimmed[word.len()..];
        let painted = if known(&word.to_lowercase()) {
            self.command(word)
        } else {
            self.error(word)
        };
        format!("{}{}{}", indent, painted, rest)
    }
}
