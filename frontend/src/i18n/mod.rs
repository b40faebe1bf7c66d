pub mod en;
pub mod zh_tw;

/// Languages the header can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    ZhTw,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::ZhTw,
            Language::ZhTw => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::ZhTw => "zh_tw",
        }
    }

    /// Short glyph shown inside the language button.
    pub fn symbol(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::ZhTw => "中",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::En => &en::LABELS,
            Language::ZhTw => &zh_tw::LABELS,
        }
    }

    pub fn ui(self) -> &'static UiText {
        match self {
            Language::En => &en::UI,
            Language::ZhTw => &zh_tw::UI,
        }
    }
}

/// Navigation and branding labels.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub name: &'static str,
    pub home: &'static str,
    pub about: &'static str,
    pub skills: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
}

/// Accessibility strings for the header controls.
#[derive(Debug, PartialEq, Eq)]
pub struct UiText {
    pub toggle_menu_aria: &'static str,
    pub main_nav_aria: &'static str,
    pub mobile_nav_aria: &'static str,
    pub switch_language: &'static str,
    pub switch_to_light: &'static str,
    pub switch_to_dark: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_alternates_starting_from_english() {
        let mut language = Language::default();
        assert_eq!(language, Language::En);
        for step in 1..=6 {
            language = language.toggled();
            let expected = if step % 2 == 1 { Language::ZhTw } else { Language::En };
            assert_eq!(language, expected);
        }
    }

    #[test]
    fn every_language_has_all_labels() {
        for language in [Language::En, Language::ZhTw] {
            let labels = language.labels();
            for label in [
                labels.name,
                labels.home,
                labels.about,
                labels.skills,
                labels.projects,
                labels.contact,
            ] {
                assert!(!label.trim().is_empty(), "empty label for {}", language.code());
            }
        }
    }

    #[test]
    fn languages_use_distinct_tables() {
        assert_ne!(Language::En.labels(), Language::ZhTw.labels());
        assert_eq!(Language::ZhTw.labels().about, "關於我");
        assert_eq!(Language::En.symbol(), "EN");
        assert_eq!(Language::ZhTw.symbol(), "中");
    }
}
