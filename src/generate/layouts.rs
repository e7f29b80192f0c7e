//! Full-page layout templates.

use std::str::FromStr;

use super::Theme;

const DASHBOARD: &str = include_str!("templates/dashboard.html");
const FORM: &str = include_str!("templates/form.html");
const LANDING: &str = include_str!("templates/landing.html");
const PROFILE: &str = include_str!("templates/profile.html");
const SETTINGS: &str = include_str!("templates/settings.html");

pub(super) const UNKNOWN_LAYOUT_BODY: &str =
    "<div class=\"vita-container\"><h1>Unknown layout type</h1></div>";

/// Page layouts with a fixed body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Dashboard,
    Form,
    Landing,
    Profile,
    Settings,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 5] = [
        LayoutKind::Dashboard,
        LayoutKind::Form,
        LayoutKind::Landing,
        LayoutKind::Profile,
        LayoutKind::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::Dashboard => "dashboard",
            LayoutKind::Form => "form",
            LayoutKind::Landing => "landing",
            LayoutKind::Profile => "profile",
            LayoutKind::Settings => "settings",
        }
    }

    pub(super) fn body(&self) -> &'static str {
        match self {
            LayoutKind::Dashboard => DASHBOARD,
            LayoutKind::Form => FORM,
            LayoutKind::Landing => LANDING,
            LayoutKind::Profile => PROFILE,
            LayoutKind::Settings => SETTINGS,
        }
    }
}

impl FromStr for LayoutKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutKind::ALL.into_iter().find(|k| k.as_str() == s).ok_or(())
    }
}

/// Capitalise the first letter of every alphabetic run and lowercase the
/// rest: `dashboard` → `Dashboard`, `user_settings` → `User_Settings`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

pub(super) fn page_shell(title: &str, theme: Theme, body: &str) -> String {
    // pages always carry an explicit theme; auto renders light
    let theme = match theme {
        Theme::Auto => Theme::Light,
        explicit => explicit,
    };
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\" data-theme=\"{theme}\">\n\
         <head>\n    \
         <meta charset=\"UTF-8\">\n    \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    \
         <title>ViTA Design System - {title}</title>\n    \
         <link rel=\"stylesheet\" href=\"./DESIGN_TOKENS.css\">\n    \
         <link href=\"https://fonts.googleapis.com/css2?family=Heebo:wght@400;500;600;700&family=Poppins:wght@400;500;600;700;800;900&display=swap\" rel=\"stylesheet\">\n    \
         <link href=\"https://fonts.googleapis.com/icon?family=Material+Icons\" rel=\"stylesheet\">\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>",
        theme = theme.as_str(),
        title = title,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("dashboard"), "Dashboard");
        assert_eq!(title_case("user_settings"), "User_Settings");
        assert_eq!(title_case("LANDING page"), "Landing Page");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_layout_kind_parse() {
        for kind in LayoutKind::ALL {
            assert_eq!(kind.as_str().parse::<LayoutKind>(), Ok(kind));
        }
        assert!("gallery".parse::<LayoutKind>().is_err());
    }

    #[test]
    fn test_bodies_are_indented_fragments() {
        for kind in LayoutKind::ALL {
            let body = kind.body();
            assert!(body.starts_with("    <div class=\"vita-container"), "{:?}", kind);
            assert!(body.ends_with("</div>"), "{:?}", kind);
        }
    }

    #[test]
    fn test_page_shell_auto_theme_renders_light() {
        let page = page_shell("Form", Theme::Auto, "<p>x</p>");
        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"light\">\n<head>\n"));
        assert!(page.contains("    <title>ViTA Design System - Form</title>\n"));
        assert!(page.ends_with("<body>\n<p>x</p>\n</body>\n</html>"));
    }

    #[test]
    fn test_page_shell_dark() {
        let page = page_shell("Settings", Theme::Dark, "");
        assert!(page.contains("<html lang=\"en\" data-theme=\"dark\">"));
        assert!(page.contains("family=Heebo"));
        assert!(page.contains("Material+Icons"));
    }
}
