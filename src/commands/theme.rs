//! Read or change the saved color scheme

use anyhow::Result;

use crate::preferences::{ColorScheme, Preferences};
use crate::Folio;

/// What to do with the color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(ColorScheme),
}

impl ThemeAction {
    pub fn parse(action: Option<&str>) -> Result<Self> {
        match action {
            None | Some("get") | Some("show") => Ok(ThemeAction::Show),
            Some("toggle") => Ok(ThemeAction::Toggle),
            Some(other) => Ok(ThemeAction::Set(other.parse()?)),
        }
    }
}

/// Apply `action` and print the resulting scheme
pub fn run(folio: &Folio, action: ThemeAction) -> Result<()> {
    let mut prefs = folio.preferences()?;
    let scheme = apply(&mut prefs, action);
    println!("{}", scheme);
    Ok(())
}

pub fn apply(prefs: &mut Preferences, action: ThemeAction) -> ColorScheme {
    match action {
        ThemeAction::Show => prefs.color_scheme(),
        ThemeAction::Toggle => prefs.toggle_color_scheme(),
        ThemeAction::Set(scheme) => {
            prefs.color_scheme.set(scheme);
            scheme
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_action() {
        assert_eq!(ThemeAction::parse(None).unwrap(), ThemeAction::Show);
        assert_eq!(ThemeAction::parse(Some("toggle")).unwrap(), ThemeAction::Toggle);
        assert_eq!(
            ThemeAction::parse(Some("dark")).unwrap(),
            ThemeAction::Set(ColorScheme::Dark)
        );
        assert!(ThemeAction::parse(Some("sepia")).is_err());
    }

    #[test]
    fn test_theme_is_saved() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let mut prefs = folio.preferences().unwrap();
        assert_eq!(apply(&mut prefs, ThemeAction::Toggle), ColorScheme::Dark);
        drop(prefs);

        let mut prefs = folio.preferences().unwrap();
        assert_eq!(apply(&mut prefs, ThemeAction::Show), ColorScheme::Dark);
        assert_eq!(
            apply(&mut prefs, ThemeAction::Set(ColorScheme::Light)),
            ColorScheme::Light
        );
    }
}
