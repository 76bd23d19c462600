use leptos::prelude::*;
use tw_merge::*;

#[component]
pub fn Badge(
    #[prop(optional, into)] variant: Signal<BadgeVariant>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let merged_class = move || {
        let badge = BadgeClass {
            variant: variant.get(),
        };
        badge.with_class(class.clone())
    };

    view! {
        <span data-name="Badge" class=merged_class>
            {children()}
        </span>
    }
}

#[derive(TwClass, Default)]
#[tw(
    class = "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium whitespace-nowrap"
)]
pub struct BadgeClass {
    variant: BadgeVariant,
}

#[derive(TwVariant)]
pub enum BadgeVariant {
    #[tw(default, class = "border-transparent bg-primary text-primary-foreground")]
    Default,
    #[tw(class = "border-transparent bg-emerald-100 text-emerald-700")]
    Success,
    #[tw(class = "border-transparent bg-red-100 text-red-700")]
    Destructive,
    #[tw(class = "text-foreground")]
    Outline,
}
