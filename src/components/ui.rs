use yew::prelude::*;

pub const PRIMARY_TEXT: &str = "text-blue-700";
pub const PRIMARY_BORDER: &str = "border-blue-600";
pub const PRIMARY_BADGE: &str = "bg-blue-600 text-white";

const BUTTON_BASE: &str =
    "inline-flex items-center justify-center rounded-xl px-4 py-2 font-medium transition disabled:opacity-60";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white",
            ButtonVariant::Ghost => "border border-blue-600 text-blue-700 hover:bg-blue-50",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class="mx-auto w-full max-w-6xl px-4 md:px-6 lg:px-8">
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="text-center mb-10">
            <h2 class="text-3xl md:text-4xl font-bold tracking-tight">{ props.title.clone() }</h2>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="mt-2 text-slate-600">{ subtitle }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("rounded-2xl", "border", PRIMARY_BORDER, "p-6", "shadow-sm", "bg-white/80", "backdrop-blur")}>
            { for props.children.iter() }
        </div>
    }
}

/// Link semantics win over click semantics when both are supplied.
#[derive(Clone, Debug, PartialEq)]
pub enum ButtonTarget {
    Link(AttrValue),
    Action(Option<Callback<MouseEvent>>),
}

impl ButtonTarget {
    pub fn resolve(href: Option<AttrValue>, onclick: Option<Callback<MouseEvent>>) -> Self {
        match href {
            Some(href) => ButtonTarget::Link(href),
            None => ButtonTarget::Action(onclick),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(BUTTON_BASE, props.variant.classes());

    match ButtonTarget::resolve(props.href.clone(), props.onclick.clone()) {
        ButtonTarget::Link(href) => html! {
            <a {class} {href} target="_blank" rel="noreferrer">
                { for props.children.iter() }
            </a>
        },
        ButtonTarget::Action(onclick) => html! {
            <button {class} {onclick} disabled={props.disabled}>
                { for props.children.iter() }
            </button>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("inline-block", "rounded-full", "px-3", "py-1", "text-xs", "font-medium", PRIMARY_BADGE)}>
            { for props.children.iter() }
        </span>
    }
}
