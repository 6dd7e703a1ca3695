use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text styled with a name the theme does not know, so template
/// typos show up in the output.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const TIME: &str = "time";
    pub const LABEL: &str = "label";
    pub const DIM: &str = "dim";
    pub const EMPTY: &str = "empty";
    pub const PAGE: &str = "page";
    pub const PAGE_CURRENT: &str = "page_current";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static RECIPE_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::ID, Style::new().yellow()),
        (names::TITLE, Style::new().bold()),
        (names::TIME, Style::new().color256(247).italic()),
        (names::LABEL, Style::new().cyan()),
        (names::DIM, Style::new().dim()),
        (names::EMPTY, Style::new().italic()),
        (names::PAGE, Style::new()),
        (names::PAGE_CURRENT, Style::new().bold().yellow()),
        (names::INFO, Style::new().dim()),
        (names::SUCCESS, Style::new().green()),
        (names::WARNING, Style::new().yellow()),
        (names::ERROR, Style::new().red()),
    ])
});

/// Applies the named style, or returns the text unchanged when color is off.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match RECIPE_THEME.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        Some(_) => text.to_string(),
        None => format!("{}{}", MISSING_STYLE_INDICATOR, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_when_color_disabled() {
        assert_eq!(apply(names::TITLE, "Soup", false), "Soup");
    }

    #[test]
    fn ansi_when_color_forced() {
        let styled = apply(names::ERROR, "boom", true);
        assert!(styled.contains("boom"));
        assert!(styled.contains('\u{1b}'));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(apply("nope", "x", false), "(!?)x");
    }
}
