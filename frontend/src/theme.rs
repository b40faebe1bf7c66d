use std::{fmt, str::FromStr};

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;

const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            v if v.eq_ignore_ascii_case("light") => Ok(Theme::Light),
            v if v.eq_ignore_ascii_case("dark") => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ThemeStorageError {
    #[error("window is not available")]
    NoWindow,
    #[error("localStorage is not available")]
    Unavailable,
    #[error("localStorage write failed: {0}")]
    Write(String),
}

/// Shared theme state handed to consumers through [`ContextProvider`].
///
/// Consumers never persist anything themselves; they read [`Self::theme`] and
/// ask for a change with [`Self::set_theme`].
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    theme: Theme,
    setter: Callback<Theme>,
}

impl ThemeContext {
    pub fn new(theme: Theme, setter: Callback<Theme>) -> Self {
        Self {
            theme,
            setter,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&self, theme: Theme) {
        self.setter.emit(theme);
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state_eq(initial_theme);

    let setter = use_callback(theme.setter(), |next: Theme, setter| {
        // Must hit the DOM before returning: a running view transition takes
        // its "new" snapshot right after this callback.
        apply_to_document(next);
        if let Err(err) = store_preference(next) {
            tracing::warn!(%err, "theme preference not persisted");
        }
        setter.set(next);
    });

    use_effect_with(*theme, |theme| {
        apply_to_document(*theme);
        || ()
    });

    let context = ThemeContext::new(*theme, setter);

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

/// Stored preference first, then the system color scheme, then light.
fn initial_theme() -> Theme {
    if let Some(stored) = load_preference() {
        return stored;
    }
    let prefers_dark = window()
        .and_then(|win| win.match_media(DARK_MEDIA_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

fn load_preference() -> Option<Theme> {
    let raw = window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            tracing::debug!(%err, "ignoring stored theme");
            None
        },
    }
}

fn store_preference(theme: Theme) -> Result<(), ThemeStorageError> {
    let storage = window()
        .ok_or(ThemeStorageError::NoWindow)?
        .local_storage()
        .ok()
        .flatten()
        .ok_or(ThemeStorageError::Unavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|err: JsValue| ThemeStorageError::Write(format!("{err:?}")))
}

fn apply_to_document(theme: Theme) {
    let Some(root) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };

    let _ = root.set_attribute("data-theme", theme.as_str());
    let class_list = root.class_list();
    let _ = if theme.is_dark() { class_list.add_1("dark") } else { class_list.remove_1("dark") };
    if let Some(style) = root.dyn_ref::<web_sys::HtmlElement>().map(|el| el.style()) {
        let _ = style.set_property("color-scheme", theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_cycles_between_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn parses_stored_values() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!("system".parse::<Theme>(), Err(UnknownTheme("system".to_string())));
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn context_forwards_to_setter() {
        use std::{cell::RefCell, rc::Rc};

        let seen = Rc::new(RefCell::new(Vec::new()));
        let setter = {
            let seen = seen.clone();
            Callback::from(move |theme: Theme| seen.borrow_mut().push(theme))
        };
        let context = ThemeContext::new(Theme::Light, setter);

        context.set_theme(context.theme().toggled());

        assert_eq!(context.theme(), Theme::Light);
        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
    }
}
