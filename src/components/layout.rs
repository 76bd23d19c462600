use crate::components::ui::{Badge, BadgeVariant};
use crate::state::AppContext;
use leptos::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Beranda"),
    ("/kegiatan", "Kegiatan"),
    ("/rapat", "Rapat"),
    ("/kas", "Kas"),
    ("/kontak", "Kontak"),
];

/// Shared shell: navbar (org name + links + admin badge) and footer (meta).
#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let meta = move || app_state.0.document.get().meta;
    let admin_mode = app_state.0.admin_mode;

    view! {
        <div class="min-h-screen bg-background flex flex-col">
            <header class="border-b">
                <div class="mx-auto flex w-full max-w-[960px] items-center justify-between px-4 py-3">
                    <a href="/" class="text-sm font-semibold text-foreground">
                        {move || meta().name}
                    </a>

                    <nav class="flex items-center gap-1">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=*href
                                        class="rounded-md px-2.5 py-1.5 text-xs font-medium text-muted-foreground hover:bg-accent hover:text-accent-foreground"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}

                        <a
                            href="/admin"
                            class="rounded-md px-2.5 py-1.5 text-xs font-medium text-muted-foreground hover:bg-accent hover:text-accent-foreground"
                        >
                            "Admin"
                        </a>

                        <Show when=move || admin_mode.get() fallback=|| ().into_view()>
                            <Badge variant=BadgeVariant::Success class="ml-1">"mode admin"</Badge>
                        </Show>
                    </nav>
                </div>
            </header>

            <main class="mx-auto w-full max-w-[960px] flex-1 px-4 py-6">{children()}</main>

            <footer class="border-t">
                <div class="mx-auto w-full max-w-[960px] px-4 py-4 text-xs text-muted-foreground">
                    <div>{move || meta().name} " · " {move || meta().address}</div>
                    <div class="italic">{move || meta().tagline}</div>
                </div>
            </footer>
        </div>
    }
}
