use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        language_button::TOGGLE_BUTTON_CLASSES,
    },
    hooks::use_lifecycle,
    i18n::Language,
    theme::{Theme, ThemeContext},
    view_transition::{run_theme_change, BrowserPlatform, ButtonRect, TransitionGate},
};

#[derive(Properties, PartialEq, Default)]
pub struct ThemeButtonProps {
    /// Language used for the accessible label.
    #[prop_or_default]
    pub language: Language,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeButton)]
pub fn theme_button(props: &ThemeButtonProps) -> Html {
    let ThemeButtonProps {
        language,
        class,
    } = props;
    let theme_ctx = use_context::<ThemeContext>();
    let button_ref = use_node_ref();
    let gate = use_state(TransitionGate::default);
    let lifecycle = use_lifecycle();

    let Some(theme_ctx) = theme_ctx else {
        return Html::default();
    };
    if !lifecycle.is_ready() {
        return Html::default();
    }

    let theme = theme_ctx.theme();

    let onclick = {
        let button_ref = button_ref.clone();
        let gate = (*gate).clone();
        Callback::from(move |_: MouseEvent| {
            if !gate.try_begin() {
                tracing::debug!("theme change already in flight, ignoring click");
                return;
            }

            let button = button_ref
                .cast::<web_sys::Element>()
                .map(|el| ButtonRect::from(&el.get_bounding_client_rect()));

            let update = {
                let theme_ctx = theme_ctx.clone();
                let next = theme_ctx.theme().toggled();
                Box::new(move || theme_ctx.set_theme(next))
            };
            let on_settled = {
                let gate = gate.clone();
                Box::new(move || gate.settle())
            };
            run_theme_change(&BrowserPlatform, button, update, on_settled);
        })
    };

    let text = language.ui();
    let label = if theme.is_dark() { text.switch_to_light } else { text.switch_to_dark };
    let (icon, swap_class) = match theme {
        Theme::Dark => (IconName::Moon, "animate-swap-in"),
        Theme::Light => (IconName::Sun, "animate-swap-in-reverse"),
    };

    html! {
        <button
            ref={button_ref}
            type="button"
            class={classes!(TOGGLE_BUTTON_CLASSES.to_vec(), class.clone())}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={theme.is_dark().to_string()}
        >
            <div key={theme.as_str()} class={classes!("absolute", swap_class)}>
                <Icon name={icon} stroke_width={3.0} />
            </div>
        </button>
    }
}
