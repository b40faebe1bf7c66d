use yew::prelude::*;

/// Whether the component has completed its first client-side render.
///
/// Anything that depends on the browser environment (theme, language glyphs)
/// should only render once this is [`Lifecycle::Ready`], so markup produced
/// before hydration never disagrees with what the client renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Initializing,
    Ready,
}

impl Lifecycle {
    pub fn is_ready(self) -> bool {
        matches!(self, Lifecycle::Ready)
    }
}

/// Track the `Initializing -> Ready` transition of the calling component.
///
/// Effects only run on the client after the first render, so the returned
/// value is `Initializing` during that render (and for the whole of a
/// server-side render) and `Ready` afterwards. It never goes back.
///
/// # Example
/// ```rust,ignore
/// use crate::hooks::use_lifecycle;
///
/// #[function_component(Glyph)]
/// fn glyph() -> Html {
///     if !use_lifecycle().is_ready() {
///         return Html::default();
///     }
///     html! { <span>{ "☀" }</span> }
/// }
/// ```
#[hook]
pub fn use_lifecycle() -> Lifecycle {
    let lifecycle = use_state_eq(Lifecycle::default);

    {
        let lifecycle = lifecycle.clone();
        use_effect_with((), move |_| {
            lifecycle.set(Lifecycle::Ready);
            || ()
        });
    }

    *lifecycle
}
