use crate::pages::{ActivitiesPage, AdminPage, ContactPage, HomePage, LedgerPage, MeetingsPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Halaman tidak ditemukan"</div> }>
                <Route path=path!("kegiatan") view=ActivitiesPage />
                <Route path=path!("rapat") view=MeetingsPage />
                <Route path=path!("kas") view=LedgerPage />
                <Route path=path!("kontak") view=ContactPage />
                <Route path=path!("admin") view=AdminPage />
                <Route path=path!("") view=HomePage />
            </Routes>
        </Router>
    }
}
