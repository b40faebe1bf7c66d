use super::{Labels, UiText};

pub const LABELS: Labels = Labels {
    name: "Sean Kao",
    home: "Home",
    about: "About",
    skills: "Skills",
    projects: "Projects",
    contact: "Contact",
};

pub const UI: UiText = UiText {
    toggle_menu_aria: "Toggle menu",
    main_nav_aria: "Main navigation",
    mobile_nav_aria: "Mobile navigation",
    switch_language: "Switch to Chinese",
    switch_to_light: "Switch to light mode",
    switch_to_dark: "Switch to dark mode",
};
