//! Light/dark theme applied to the document root and body.

const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class toggled on `<html>`.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some(DARK_CLASS),
        }
    }

    /// Full class list assigned to `<body>`.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "bg-slate-50 text-slate-900",
            Theme::Dark => "bg-slate-900 text-slate-100",
        }
    }

    /// Script that applies this theme to the live document.
    pub fn apply_script(self) -> String {
        format!(
            "document.documentElement.classList.toggle('{DARK_CLASS}', {}); document.body.className = '{}';",
            self.root_class().is_some(),
            self.body_class()
        )
    }
}
