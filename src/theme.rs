pub mod catppuccin {
    use nu_ansi_term::Color;
    pub struct Mocha;
    impl Mocha {
        // Base colors
        pub const TEXT: Color = Color::Rgb(205, 214, 244);  // Text
        pub const SURFACE2: Color = Color::Rgb(108, 112, 134);  // Subtle dim

        // Accents
        pub const RED: Color = Color::Rgb(243, 139, 168);
        pub const PEACH: Color = Color::Rgb(250, 179, 135);
    }
}

use nu_ansi_term::Style;

/// Styles for diagnostics written to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub header: Style,
    pub message: Style,
    pub source: Style,
    pub caret: Style,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        if !color {
            return Self::plain();
        }
        use catppuccin::Mocha as P;
        Self {
            header: Style::new().fg(P::RED).bold(),
            message: Style::new().fg(P::TEXT),
            source: Style::new().fg(P::SURFACE2),
            caret: Style::new().fg(P::PEACH).bold(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            message: Style::new(),
            source: Style::new(),
            caret: Style::new(),
        }
    }
}
