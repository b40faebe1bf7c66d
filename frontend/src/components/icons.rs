use yew::prelude::*;

/// Lucide Icons used by the header controls
/// SVG 路径来自 https://lucide.dev
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    Sun,
    Moon,
    Menu,
    X,
}

impl IconName {
    /// 获取 Lucide icon 的 SVG path 数据
    pub fn path(&self) -> &'static str {
        match self {
            IconName::Sun => {
                "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8zM12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 \
                 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"
            },
            IconName::Moon => "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z",
            IconName::Menu => "M4 12h16M4 6h16M4 18h16",
            IconName::X => "M18 6 6 18M6 6l12 12",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or(2.0)]
    pub stroke_width: f64,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        stroke_width,
        class,
    } = props;

    html! {
        <svg
            class={classes!("shrink-0", class.clone())}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={name.path()} />
        </svg>
    }
}
