use std::rc::Rc;

use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        language_button::LanguageButton,
        theme_button::ThemeButton,
    },
    config::route_path,
    i18n::Language,
};

const HOME_HREF: &str = "/#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    pub menu_open: bool,
    pub language: Language,
}

pub enum HeaderAction {
    ToggleMenu,
    /// Sent when a mobile link is followed.
    CloseMenu,
    ToggleLanguage,
}

impl Reducible for HeaderState {
    type Action = HeaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            HeaderAction::ToggleMenu => {
                next.menu_open = !next.menu_open;
            },
            HeaderAction::CloseMenu => {
                next.menu_open = false;
            },
            HeaderAction::ToggleLanguage => {
                next.language = next.language.toggled();
            },
        }
        Rc::new(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub href: &'static str,
}

pub fn menu_items(language: Language) -> [MenuItem; 5] {
    let l = language.labels();
    [
        MenuItem {
            title: l.home,
            href: HOME_HREF,
        },
        MenuItem {
            title: l.about,
            href: "/#about",
        },
        MenuItem {
            title: l.skills,
            href: "/#skills",
        },
        MenuItem {
            title: l.projects,
            href: "/#projects",
        },
        MenuItem {
            title: l.contact,
            href: "/#contact",
        },
    ]
}

/// The mobile menu has no link back to the page it is on.
pub fn mobile_menu_items(language: Language) -> Vec<MenuItem> {
    menu_items(language)
        .into_iter()
        .filter(|item| item.href != HOME_HREF)
        .collect()
}

#[function_component(Header)]
pub fn header() -> Html {
    let state = use_reducer(HeaderState::default);
    let language = state.language;
    let labels = language.labels();
    let text = language.ui();

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(HeaderAction::ToggleMenu))
    };

    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(HeaderAction::CloseMenu))
    };

    let toggle_language = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(HeaderAction::ToggleLanguage))
    };

    let link_classes = classes!("hover:text-blue-400", "transition", "duration-300");

    html! {
        <header class={classes!(
            "sticky", "top-0", "z-50",
            "backdrop-blur-md", "transition-all",
            "bg-white/80", "dark:bg-neutral-950/80"
        )}>
            <div class={classes!("container", "mx-auto", "px-4", "py-4")}>
                <div class={classes!("flex", "items-center", "justify-between")}>
                    // Brand
                    <div class={classes!("font-bold", "text-xl", "md:text-2xl")}>
                        <a
                            href={route_path("/")}
                            class={classes!("hover:text-blue-500", "transition", "duration-300")}
                        >
                            { labels.name }
                        </a>
                    </div>

                    // Desktop navigation
                    <nav
                        class={classes!("hidden", "md:flex", "items-center", "space-x-8")}
                        aria-label={text.main_nav_aria}
                    >
                        { for menu_items(language).into_iter().map(|item| html! {
                            <a key={item.href} href={route_path(item.href)} class={link_classes.clone()}>
                                { item.title }
                            </a>
                        }) }
                        <ThemeButton {language} />
                        <LanguageButton {language} on_toggle={toggle_language.clone()} />
                    </nav>

                    // Hamburger
                    <button
                        type="button"
                        class={classes!("md:hidden", "text-gray-600", "dark:text-gray-300", "focus:outline-none")}
                        onclick={toggle_menu}
                        aria-label={text.toggle_menu_aria}
                        aria-expanded={state.menu_open.to_string()}
                    >
                        <Icon name={if state.menu_open { IconName::X } else { IconName::Menu }} />
                    </button>
                </div>

                // Mobile navigation
                if state.menu_open {
                    <nav
                        class={classes!("md:hidden", "mt-4", "pb-2")}
                        aria-label={text.mobile_nav_aria}
                    >
                        <div class={classes!("flex", "flex-col", "space-y-3")}>
                            { for mobile_menu_items(language).into_iter().map(|item| html! {
                                <a
                                    key={item.href}
                                    href={route_path(item.href)}
                                    class={classes!(link_classes.clone(), "py-1")}
                                    onclick={close_menu.clone()}
                                >
                                    { item.title }
                                </a>
                            }) }
                            <div class={classes!("flex", "justify-center", "items-center", "mt-4", "space-x-8")}>
                                <ThemeButton {language} />
                                <LanguageButton {language} on_toggle={toggle_language.clone()} />
                            </div>
                        </div>
                    </nav>
                }
            </div>
        </header>
    }
}
