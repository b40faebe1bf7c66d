use yew::prelude::*;

use crate::i18n::en::LABELS;

/// Landing page holding the fragment targets the header links to.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let sections = [
        ("about", LABELS.about),
        ("skills", LABELS.skills),
        ("projects", LABELS.projects),
        ("contact", LABELS.contact),
    ];

    html! {
        <main class={classes!("container", "mx-auto", "px-4")}>
            { for sections.iter().map(|(id, title)| html! {
                <section
                    key={*id}
                    id={*id}
                    class={classes!("min-h-[60vh]", "scroll-mt-24", "py-16")}
                >
                    <h2 class={classes!("text-3xl", "font-bold")}>{ *title }</h2>
                </section>
            }) }
        </main>
    }
}
