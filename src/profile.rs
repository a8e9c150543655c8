//! Profiles offered for manual selection.

use crate::ui::Style;

/// Profiles the reference backend ships with, and what each is for.
pub const KNOWN_PROFILES: &[(&str, &str)] = &[
    ("conversational", "Fluid, didactic and short dialogue"),
    ("exploratory", "Longer explanations with examples"),
    ("strict", "Short, rigorous answers, mostly definitions"),
    ("debug", "Shows how the answer was chosen"),
];

/// Returns the built-in profile names.
pub fn default_profile_names() -> Vec<String> {
    KNOWN_PROFILES
        .iter()
        .map(|(name, _)| (*name).to_string())
        .collect()
}

/// Description of a built-in profile.
pub fn describe(name: &str) -> Option<&'static str> {
    KNOWN_PROFILES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, description)| *description)
}

/// Prints the selectable profiles to stdout, marking `current` if given.
pub fn print_profiles(names: &[String], current: Option<&str>) {
    println!("{}", Style::header("Profiles"));
    for name in names {
        let marker = if current == Some(name.as_str()) {
            format!(" {}", Style::current_marker())
        } else {
            String::new()
        };
        println!(
            "  {:16} {}{marker}",
            Style::value(name),
            Style::secondary(describe(name).unwrap_or("")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_names() {
        let names = default_profile_names();
        assert_eq!(names.len(), KNOWN_PROFILES.len());
        assert_eq!(names[0], crate::session::DEFAULT_PROFILE);
    }

    #[test]
    fn test_describe() {
        assert!(describe("debug").is_some());
        assert!(describe("formal").is_none());
        assert!(describe("").is_none());
    }
}
