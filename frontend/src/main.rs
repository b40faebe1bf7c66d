//! Portfolio site frontend: sticky header with navigation, a language switch
//! and a theme button that reveals the new theme with a circular transition.

mod components;
mod config;
mod hooks;
mod i18n;
mod pages;
mod theme;
mod view_transition;

use yew::prelude::*;

use crate::{components::header::Header, pages::home::HomePage, theme::ThemeProvider};

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <div class="flex flex-col min-h-screen bg-white text-neutral-900 dark:bg-neutral-950 dark:text-neutral-100">
                <Header />
                <HomePage />
            </div>
        </ThemeProvider>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }
    tracing::debug!("mounting portfolio frontend");
    yew::Renderer::<App>::new().render();
}
