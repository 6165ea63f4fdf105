//! Report rendering.
//!
//! Two layouts are supported, and their text is fixed:
//! - standard (flake8-native): `{filename}:{line}:{char}: {code} {description}`
//! - grouped: a `Found violations: {filename}` header per file, followed by
//!   `\t{code} @ {line}:{char} - {description}` per violation
//!
//! Every field passes through the selected [`ColorTheme`] before formatting.

mod theme;

pub use theme::{ColorTheme, Component, Palette, Style};

use crate::error::Result;
use crate::violation::ViolationRecord;
use std::io::Write;

/// Header text for the grouped layout.
pub const HEADER_STRING: &str = "Found violations";

/// Anything that can supply report fields by record key.
pub trait ReportFields {
    fn field(&self, key: &str) -> Option<&str>;
}

impl ReportFields for ViolationRecord {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

/// Fields of the per-file header in the grouped layout.
#[derive(Debug, Clone)]
pub struct HeaderRecord<'a> {
    pub filename: &'a str,
    pub header: &'a str,
}

impl ReportFields for HeaderRecord<'_> {
    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "filename" => Some(self.filename),
            "header" => Some(self.header),
            _ => None,
        }
    }
}

/// Styled values for every template placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorKwargs {
    pub line: String,
    pub char: String,
    pub code: String,
    pub description: String,
    pub filename: String,
    pub header: String,
}

/// Build template values from record fields.
///
/// Missing fields become empty strings before styling.
pub fn get_color_kwargs(theme: ColorTheme, details: &impl ReportFields) -> ColorKwargs {
    let get = |key: &str| details.field(key).unwrap_or_default();

    ColorKwargs {
        line: theme.color_getter(Component::Line)(get("line_number")),
        char: theme.color_getter(Component::Char)(get("char_number")),
        code: theme.color_getter(Component::Code)(get("error_code")),
        description: theme.color_getter(Component::Description)(get("description")),
        filename: theme.color_getter(Component::Filename)(get("filename")),
        header: theme.color_getter(Component::Header)(get("header")),
    }
}

pub fn format_flat(kw: &ColorKwargs) -> String {
    format!(
        "{}:{}:{}: {} {}",
        kw.filename, kw.line, kw.char, kw.code, kw.description
    )
}

pub fn format_header(kw: &ColorKwargs) -> String {
    format!("{}: {}", kw.header, kw.filename)
}

pub fn format_grouped_line(kw: &ColorKwargs) -> String {
    format!("\t{} @ {}:{} - {}", kw.code, kw.line, kw.char, kw.description)
}

/// Writes kept violations in the selected layout as they arrive.
pub struct Reporter<W: Write> {
    out: W,
    theme: ColorTheme,
    standard_output: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, theme: ColorTheme, standard_output: bool) -> Self {
        Self {
            out,
            theme,
            standard_output,
        }
    }

    /// Called as soon as a violation is kept. Prints it in the standard layout.
    pub fn violation_kept(&mut self, violation: &ViolationRecord) -> Result<()> {
        if self.standard_output {
            let kw = get_color_kwargs(self.theme, violation);
            writeln!(self.out, "{}", format_flat(&kw))?;
        }
        Ok(())
    }

    /// Called once a file is done. Prints its group in the grouped layout.
    pub fn file_finished(&mut self, filename: &str, violations: &[ViolationRecord]) -> Result<()> {
        if !violations.is_empty() && !self.standard_output {
            let header = HeaderRecord {
                filename,
                header: HEADER_STRING,
            };
            writeln!(
                self.out,
                "{}",
                format_header(&get_color_kwargs(self.theme, &header))
            )?;

            for violation in violations {
                let kw = get_color_kwargs(self.theme, violation);
                writeln!(self.out, "{}", format_grouped_line(&kw))?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
