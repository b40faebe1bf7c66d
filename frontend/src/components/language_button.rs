use yew::prelude::*;

use crate::{hooks::use_lifecycle, i18n::Language};

/// Springy press feedback shared by the header toggles.
pub const TOGGLE_BUTTON_CLASSES: &[&str] = &[
    "relative",
    "flex",
    "items-center",
    "justify-center",
    "w-10",
    "h-10",
    "rounded-full",
    "p-2",
    "cursor-pointer",
    "scale-90",
    "transition-transform",
    "duration-300",
    "ease-[cubic-bezier(0.34,1.56,0.64,1)]",
    "hover:scale-110",
    "active:scale-90",
];

#[derive(Properties, PartialEq)]
pub struct LanguageButtonProps {
    pub language: Language,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(LanguageButton)]
pub fn language_button(props: &LanguageButtonProps) -> Html {
    let LanguageButtonProps {
        language,
        on_toggle,
    } = props;

    if !use_lifecycle().is_ready() {
        return Html::default();
    }

    let label = language.ui().switch_language;

    html! {
        <button
            type="button"
            class={classes!(TOGGLE_BUTTON_CLASSES.to_vec())}
            onclick={on_toggle.clone()}
            aria-label={label}
            title={label}
        >
            // Keyed so a language change remounts the glyph and replays the swap-in
            <div key={language.code()} class="absolute animate-swap-in">
                <span class="font-bold">{ language.symbol() }</span>
            </div>
        </button>
    }
}
