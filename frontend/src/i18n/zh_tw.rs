use super::{Labels, UiText};

pub const LABELS: Labels = Labels {
    name: "高偉翔 (Sean Kao)",
    home: "首頁",
    about: "關於我",
    skills: "技能",
    projects: "作品集",
    contact: "聯繫我",
};

pub const UI: UiText = UiText {
    toggle_menu_aria: "切換選單",
    main_nav_aria: "主導覽",
    mobile_nav_aria: "行動版導覽",
    switch_language: "切換為英文",
    switch_to_light: "切換到亮色模式",
    switch_to_dark: "切換到暗色模式",
};
