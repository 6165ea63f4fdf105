//! Color themes for report output.

use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// Formatting applied to one output field.
pub type Style = fn(&str) -> String;

/// Display components a theme can style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Header,
    Filename,
    Code,
    Line,
    Char,
    Description,
}

impl Component {
    /// Look up a component by its template name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "header" => Some(Component::Header),
            "filename" => Some(Component::Filename),
            "code" => Some(Component::Code),
            "line" => Some(Component::Line),
            "char" => Some(Component::Char),
            "description" => Some(Component::Description),
            _ => None,
        }
    }
}

/// Built-in color themes.
///
/// Themes only change how already-filtered text is rendered. `Off` applies no
/// styling at all, so its output never contains escape codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    Off,
    /// Emphasis without colors (bold, underline, reverse video).
    Nocolor,
    /// For dark terminal backgrounds.
    #[default]
    Dark,
    /// For light terminal backgrounds.
    Light,
}

/// One style per component.
#[derive(Clone, Copy)]
pub struct Palette {
    pub header: Style,
    pub filename: Style,
    pub code: Style,
    pub line: Style,
    pub char: Style,
    pub description: Style,
}

const OFF: Palette = Palette {
    header: identity,
    filename: identity,
    code: identity,
    line: identity,
    char: identity,
    description: identity,
};

const NOCOLOR: Palette = Palette {
    header: bold_underline,
    filename: standout,
    code: bold,
    line: identity,
    char: identity,
    description: identity,
};

const DARK: Palette = Palette {
    header: bold,
    filename: identity,
    code: bold_red,
    line: magenta,
    char: magenta,
    description: yellow,
};

const LIGHT: Palette = Palette {
    header: bold,
    filename: identity,
    code: bold_red,
    line: magenta,
    char: magenta,
    description: blue,
};

impl ColorTheme {
    pub fn palette(self) -> &'static Palette {
        match self {
            ColorTheme::Off => &OFF,
            ColorTheme::Nocolor => &NOCOLOR,
            ColorTheme::Dark => &DARK,
            ColorTheme::Light => &LIGHT,
        }
    }

    /// Formatting function for a component.
    pub fn color_getter(self, component: Component) -> Style {
        let palette = self.palette();
        match component {
            Component::Header => palette.header,
            Component::Filename => palette.filename,
            Component::Code => palette.code,
            Component::Line => palette.line,
            Component::Char => palette.char,
            Component::Description => palette.description,
        }
    }

    /// Formatting function for a component given by name.
    ///
    /// Names outside the known components get the identity function.
    pub fn color_getter_named(self, name: &str) -> Style {
        Component::from_name(name).map_or(identity as Style, |c| self.color_getter(c))
    }
}

fn identity(s: &str) -> String {
    s.to_string()
}

fn bold(s: &str) -> String {
    s.bold().to_string()
}

fn bold_underline(s: &str) -> String {
    s.bold().underline().to_string()
}

fn standout(s: &str) -> String {
    s.reversed().to_string()
}

fn bold_red(s: &str) -> String {
    s.red().bold().to_string()
}

fn magenta(s: &str) -> String {
    s.magenta().to_string()
}

fn yellow(s: &str) -> String {
    s.yellow().to_string()
}

fn blue(s: &str) -> String {
    s.blue().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Component; 6] = [
        Component::Header,
        Component::Filename,
        Component::Code,
        Component::Line,
        Component::Char,
        Component::Description,
    ];

    #[test]
    fn test_off_is_identity_for_every_component() {
        for component in ALL {
            assert_eq!(ColorTheme::Off.color_getter(component)("E501"), "E501");
        }
    }

    #[test]
    fn test_dark_and_light_differ_only_in_description() {
        for component in ALL {
            let dark = ColorTheme::Dark.color_getter(component)("x");
            let light = ColorTheme::Light.color_getter(component)("x");
            if component == Component::Description {
                assert_ne!(dark, light);
            } else {
                assert_eq!(dark, light);
            }
        }
    }

    #[test]
    fn test_styled_components_emit_escape_codes() {
        assert!(ColorTheme::Dark.color_getter(Component::Code)("E501").contains('\u{1b}'));
        assert!(ColorTheme::Nocolor.color_getter(Component::Filename)("a.py").contains('\u{1b}'));
        assert_eq!(ColorTheme::Dark.color_getter(Component::Filename)("a.py"), "a.py");
        assert_eq!(ColorTheme::Nocolor.color_getter(Component::Line)("10"), "10");
    }

    #[test]
    fn test_unknown_component_name_is_identity() {
        assert_eq!(ColorTheme::Dark.color_getter_named("severity")("high"), "high");
        assert_eq!(
            ColorTheme::Dark.color_getter_named("code")("E1"),
            ColorTheme::Dark.color_getter(Component::Code)("E1")
        );
    }

    #[test]
    fn test_default_theme_is_dark() {
        assert_eq!(ColorTheme::default(), ColorTheme::Dark);
    }
}
