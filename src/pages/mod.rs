use crate::components::layout::SiteLayout;
use crate::components::ui::{
    Alert, AlertDescription, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
    CardContent, CardDescription, CardHeader, CardItem, CardList, CardTitle, Input, Label, Select,
    Textarea,
};
use crate::export::{download_text, read_file_text, CSV_EXPORT_FILENAME, JSON_EXPORT_FILENAME};
use crate::models::{ActivityForm, EntryType, LedgerEntryForm, MeetingForm};
use crate::state::AppContext;
use crate::store;
use crate::util::{format_rupiah, now_ms, today_iso_local};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn entry_type_badge(entry_type: EntryType) -> AnyView {
    match entry_type {
        EntryType::In => view! { <Badge variant=BadgeVariant::Success>"masuk"</Badge> }.into_any(),
        EntryType::Out => {
            view! { <Badge variant=BadgeVariant::Destructive>"keluar"</Badge> }.into_any()
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let document = app_state.0.document;

    let balance = move || store::compute_balance(&document.get());

    view! {
        <SiteLayout>
            <div class="flex flex-col gap-6">
                <div class="rounded-xl border bg-card px-6 py-8">
                    <h1 class="text-2xl font-semibold">{move || document.get().meta.name}</h1>
                    <p class="mt-1 text-sm text-muted-foreground">
                        {move || document.get().meta.tagline}
                    </p>
                    <p class="mt-3 text-xs text-muted-foreground">
                        {move || document.get().meta.address}
                    </p>
                </div>

                <div class="grid gap-4 sm:grid-cols-3">
                    <Card>
                        <CardHeader>
                            <CardTitle class="text-base">"Kegiatan"</CardTitle>
                            <CardDescription>
                                {move || format!("{} agenda tercatat", document.get().kegiatan.len())}
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <a class="text-xs text-primary underline underline-offset-4" href="/kegiatan">
                                "Lihat semua kegiatan"
                            </a>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle class="text-base">"Rapat terdekat"</CardTitle>
                            <CardDescription>
                                {move || {
                                    document
                                        .get()
                                        .rapat
                                        .first()
                                        .map(|m| format!("{} · {}", m.title, m.date))
                                        .unwrap_or_else(|| "Belum ada jadwal".to_string())
                                }}
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <a class="text-xs text-primary underline underline-offset-4" href="/rapat">
                                "Jadwal lengkap"
                            </a>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle class="text-base">"Saldo kas"</CardTitle>
                            <CardDescription>{move || format_rupiah(balance().balance)}</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <a class="text-xs text-primary underline underline-offset-4" href="/kas">
                                "Buku kas"
                            </a>
                        </CardContent>
                    </Card>
                </div>
            </div>
        </SiteLayout>
    }
}

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let document = app_state.0.document;
    let admin_mode = app_state.0.admin_mode;

    let editing_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let title: RwSignal<String> = RwSignal::new(String::new());
    let date: RwSignal<String> = RwSignal::new(String::new());
    let description: RwSignal<String> = RwSignal::new(String::new());
    let form_error: RwSignal<Option<String>> = RwSignal::new(None);

    let reset_form = move || {
        editing_id.set(None);
        title.set(String::new());
        date.set(String::new());
        description.set(String::new());
        form_error.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let title_val = title.get_untracked().trim().to_string();
        let date_val = date.get_untracked().trim().to_string();

        // Required-field checks live here, not in the store.
        if title_val.is_empty() || date_val.is_empty() {
            form_error.set(Some("Judul dan tanggal wajib diisi.".to_string()));
            return;
        }

        let form = ActivityForm {
            id: editing_id.get_untracked(),
            title: title_val,
            date: date_val,
            description: description.get_untracked().trim().to_string(),
        };
        app_state.0.commit(|doc| {
            store::upsert_activity(doc, form, now_ms());
        });
        reset_form();
    };

    view! {
        <SiteLayout>
            <div class="flex flex-col gap-6">
                <div>
                    <h1 class="text-xl font-semibold">"Kegiatan"</h1>
                    <p class="text-xs text-muted-foreground">"Agenda dan dokumentasi kegiatan warga."</p>
                </div>

                <Show when=move || admin_mode.get() fallback=|| ().into_view()>
                    <Card>
                        <CardHeader>
                            <CardTitle class="text-base">
                                {move || if editing_id.get().is_some() { "Edit kegiatan" } else { "Tambah kegiatan" }}
                            </CardTitle>
                        </CardHeader>
                        <CardContent>
                            <form class="flex flex-col gap-3" on:submit=on_submit>
                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="kegiatan-title" class="text-xs">"Judul"</Label>
                                    <Input id="kegiatan-title" bind_value=title placeholder="Kerja bakti" />
                                </div>

                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="kegiatan-date" class="text-xs">"Tanggal"</Label>
                                    <Input id="kegiatan-date" r#type="date" bind_value=date />
                                </div>

                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="kegiatan-desc" class="text-xs">"Deskripsi"</Label>
                                    <Textarea id="kegiatan-desc" bind_value=description placeholder="Deskripsi singkat" />
                                </div>

                                <Show when=move || form_error.get().is_some() fallback=|| ().into_view()>
                                    {move || {
                                        form_error.get().map(|e| view! {
                                            <Alert class="border-destructive/30">
                                                <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                                            </Alert>
                                        })
                                    }}
                                </Show>

                                <div class="flex gap-2">
                                    <Button size=ButtonSize::Sm>
                                        {move || if editing_id.get().is_some() { "Simpan perubahan" } else { "Tambah" }}
                                    </Button>
                                    <Show when=move || editing_id.get().is_some() fallback=|| ().into_view()>
                                        <Button
                                            attr:r#type="button"
                                            variant=ButtonVariant::Ghost
                                            size=ButtonSize::Sm
                                            on:click=move |_| reset_form()
                                        >
                                            "Batal"
                                        </Button>
                                    </Show>
                                </div>
                            </form>
                        </CardContent>
                    </Card>
                </Show>

                <Show
                    when=move || !document.get().kegiatan.is_empty()
                    fallback=|| view! { <div class="text-xs text-muted-foreground">"Belum ada kegiatan."</div> }
                >
                    <CardList>
                        {move || {
                            document
                                .get()
                                .kegiatan
                                .into_iter()
                                .map(|a| {
                                    let id = a.id;
                                    let edit_title = a.title.clone();
                                    let edit_date = a.date.clone();
                                    let edit_desc = a.description.clone();

                                    view! {
                                        <CardItem>
                                            <div class="flex w-full items-start justify-between gap-2">
                                                <div>
                                                    <div class="text-sm font-medium">{a.title}</div>
                                                    <div class="text-xs text-muted-foreground">{a.date}</div>
                                                </div>
                                                <Show when=move || admin_mode.get() fallback=|| ().into_view()>
                                                    {
                                                        let edit_title = edit_title.clone();
                                                        let edit_date = edit_date.clone();
                                                        let edit_desc = edit_desc.clone();
                                                        view! {
                                                            <div class="flex gap-1">
                                                                <Button
                                                                    variant=ButtonVariant::Outline
                                                                    size=ButtonSize::Sm
                                                                    on:click=move |_| {
                                                                        editing_id.set(Some(id));
                                                                        title.set(edit_title.clone());
                                                                        date.set(edit_date.clone());
                                                                        description.set(edit_desc.clone());
                                                                        form_error.set(None);
                                                                    }
                                                                >
                                                                    "Edit"
                                                                </Button>
                                                                <Button
                                                                    variant=ButtonVariant::Destructive
                                                                    size=ButtonSize::Sm
                                                                    on:click=move |_| {
                                                                        app_state.0.commit(|doc| store::delete_activity(doc, id));
                                                                    }
                                                                >
                                                                    "Hapus"
                                                                </Button>
                                                            </div>
                                                        }
                                                    }
                                                </Show>
                                            </div>
                                            <p class="text-xs text-muted-foreground">{a.description}</p>
                                        </CardItem>
                                    }
                                })
                                .collect_view()
                        }}
                    </CardList>
                </Show>
            </div>
        </SiteLayout>
    }
}

#[component]
pub fn MeetingsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let document = app_state.0.document;
    let admin_mode = app_state.0.admin_mode;

    let editing_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let title: RwSignal<String> = RwSignal::new(String::new());
    let date: RwSignal<String> = RwSignal::new(String::new());
    let time: RwSignal<String> = RwSignal::new(String::new());
    let notes: RwSignal<String> = RwSignal::new(String::new());
    let form_error: RwSignal<Option<String>> = RwSignal::new(None);

    let reset_form = move || {
        editing_id.set(None);
        title.set(String::new());
        date.set(String::new());
        time.set(String::new());
        notes.set(String::new());
        form_error.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let title_val = title.get_untracked().trim().to_string();
        let date_val = date.get_untracked().trim().to_string();
        if title_val.is_empty() || date_val.is_empty() {
            form_error.set(Some("Judul dan tanggal wajib diisi.".to_string()));
            return;
        }

        let time_val = time.get_untracked().trim().to_string();
        let form = MeetingForm {
            id: editing_id.get_untracked(),
            title: title_val,
            date: date_val,
            time: if time_val.is_empty() { None } else { Some(time_val) },
            notes: notes.get_untracked().trim().to_string(),
        };
        app_state.0.commit(|doc| {
            store::upsert_meeting(doc, form, now_ms());
        });
        reset_form();
    };

    view! {
        <SiteLayout>
            <div class="flex flex-col gap-6">
                <div>
                    <h1 class="text-xl font-semibold">"Jadwal Rapat"</h1>
                    <p class="text-xs text-muted-foreground">"Rapat rutin dan rapat panitia."</p>
                </div>

                <Show when=move || admin_mode.get() fallback=|| ().into_view()>
                    <Card>
                        <CardHeader>
                            <CardTitle class="text-base">
                                {move || if editing_id.get().is_some() { "Edit rapat" } else { "Tambah rapat" }}
                            </CardTitle>
                        </CardHeader>
                        <CardContent>
                            <form class="flex flex-col gap-3" on:submit=on_submit>
                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="rapat-title" class="text-xs">"Judul"</Label>
                                    <Input id="rapat-title" bind_value=title placeholder="Rapat rutin" />
                                </div>

                                <div class="grid gap-3 sm:grid-cols-2">
                                    <div class="flex flex-col gap-1.5">
                                        <Label html_for="rapat-date" class="text-xs">"Tanggal"</Label>
                                        <Input id="rapat-date" r#type="date" bind_value=date />
                                    </div>
                                    <div class="flex flex-col gap-1.5">
                                        <Label html_for="rapat-time" class="text-xs">"Jam (opsional)"</Label>
                                        <Input id="rapat-time" r#type="time" bind_value=time />
                                    </div>
                                </div>

                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="rapat-notes" class="text-xs">"Catatan"</Label>
                                    <Textarea id="rapat-notes" bind_value=notes placeholder="Agenda pembahasan" />
                                </div>

                                <Show when=move || form_error.get().is_some() fallback=|| ().into_view()>
                                    {move || {
                                        form_error.get().map(|e| view! {
                                            <Alert class="border-destructive/30">
                                                <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                                            </Alert>
                                        })
                                    }}
                                </Show>

                                <div class="flex gap-2">
                                    <Button size=ButtonSize::Sm>
                                        {move || if editing_id.get().is_some() { "Simpan perubahan" } else { "Tambah" }}
                                    </Button>
                                    <Show when=move || editing_id.get().is_some() fallback=|| ().into_view()>
                                        <Button
                                            attr:r#type="button"
                                            variant=ButtonVariant::Ghost
                                            size=ButtonSize::Sm
                                            on:click=move |_| reset_form()
                                        >
                                            "Batal"
                                        </Button>
                                    </Show>
                                </div>
                            </form>
                        </CardContent>
                    </Card>
                </Show>

                <Show
                    when=move || !document.get().rapat.is_empty()
                    fallback=|| view! { <div class="text-xs text-muted-foreground">"Belum ada jadwal rapat."</div> }
                >
                    <CardList>
                        {move || {
                            document
                                .get()
                                .rapat
                                .into_iter()
                                .map(|m| {
                                    let id = m.id;
                                    let edit_title = m.title.clone();
                                    let edit_date = m.date.clone();
                                    let edit_time = m.time.clone();
                                    let edit_notes = m.notes.clone();
                                    let when = match &m.time {
                                        Some(t) => format!("{} · {}", m.date, t),
                                        None => m.date.clone(),
                                    };

                                    view! {
                                        <CardItem>
                                            <div class="flex w-full items-start justify-between gap-2">
                                                <div>
                                                    <div class="text-sm font-medium">{m.title}</div>
                                                    <div class="text-xs text-muted-foreground">{when}</div>
                                                </div>
                                                <Show when=move || admin_mode.get() fallback=|| ().into_view()>
                                                    {
                                                        let edit_title = edit_title.clone();
                                                        let edit_date = edit_date.clone();
                                                        let edit_time = edit_time.clone();
                                                        let edit_notes = edit_notes.clone();
                                                        view! {
                                                            <div class="flex gap-1">
                                                                <Button
                                                                    variant=ButtonVariant::Outline
                                                                    size=ButtonSize::Sm
                                                                    on:click=move |_| {
                                                                        editing_id.set(Some(id));
                                                                        title.set(edit_title.clone());
                                                                        date.set(edit_date.clone());
                                                                        time.set(edit_time.clone().unwrap_or_default());
                                                                        notes.set(edit_notes.clone());
                                                                        form_error.set(None);
                                                                    }
                                                                >
                                                                    "Edit"
                                                                </Button>
                                                                <Button
                                                                    variant=ButtonVariant::Destructive
                                                                    size=ButtonSize::Sm
                                                                    on:click=move |_| {
                                                                        app_state.0.commit(|doc| store::delete_meeting(doc, id));
                                                                    }
                                                                >
                                                                    "Hapus"
                                                                </Button>
                                                            </div>
                                                        }
                                                    }
                                                </Show>
                                            </div>
                                            <p class="text-xs text-muted-foreground">{m.notes}</p>
                                        </CardItem>
                                    }
                                })
                                .collect_view()
                        }}
                    </CardList>
                </Show>
            </div>
        </SiteLayout>
    }
}

#[component]
pub fn LedgerPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let document = app_state.0.document;
    let admin_mode = app_state.0.admin_mode;

    let balance = move || store::compute_balance(&document.get());

    let date: RwSignal<String> = RwSignal::new(today_iso_local());
    let desc: RwSignal<String> = RwSignal::new(String::new());
    let entry_type: RwSignal<String> = RwSignal::new("in".to_string());
    let amount: RwSignal<String> = RwSignal::new(String::new());
    let form_error: RwSignal<Option<String>> = RwSignal::new(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let date_val = date.get_untracked().trim().to_string();
        let desc_val = desc.get_untracked().trim().to_string();
        if date_val.is_empty() || desc_val.is_empty() {
            form_error.set(Some("Tanggal dan deskripsi wajib diisi.".to_string()));
            return;
        }

        let amount_val = match amount.get_untracked().trim().parse::<i64>() {
            Ok(n) if n >= 0 => n,
            _ => {
                form_error.set(Some("Nominal harus angka dan tidak boleh negatif.".to_string()));
                return;
            }
        };

        let form = LedgerEntryForm {
            date: date_val,
            desc: desc_val,
            entry_type: if entry_type.get_untracked() == "out" {
                EntryType::Out
            } else {
                EntryType::In
            },
            amount: amount_val,
        };
        app_state.0.commit(|doc| {
            store::add_ledger_entry(doc, form, now_ms());
        });

        desc.set(String::new());
        amount.set(String::new());
        form_error.set(None);
    };

    let on_export_csv = move |_| {
        let csv = store::export_ledger_csv(&document.get_untracked());
        let _ = download_text(CSV_EXPORT_FILENAME, "text/csv;charset=utf-8;", &csv);
    };

    view! {
        <SiteLayout>
            <div class="flex flex-col gap-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-xl font-semibold">"Buku Kas"</h1>
                        <p class="text-xs text-muted-foreground">"Catatan pemasukan dan pengeluaran."</p>
                    </div>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=on_export_csv>
                        "Unduh CSV"
                    </Button>
                </div>

                <div class="grid gap-4 sm:grid-cols-3">
                    <Card>
                        <CardHeader>
                            <CardDescription>"Pemasukan"</CardDescription>
                            <CardTitle class="text-lg">{move || format_rupiah(balance().total_in)}</CardTitle>
                        </CardHeader>
                    </Card>
                    <Card>
                        <CardHeader>
                            <CardDescription>"Pengeluaran"</CardDescription>
                            <CardTitle class="text-lg">{move || format_rupiah(balance().total_out)}</CardTitle>
                        </CardHeader>
                    </Card>
                    <Card>
                        <CardHeader>
                            <CardDescription>"Saldo"</CardDescription>
                            <CardTitle class="text-lg">{move || format_rupiah(balance().balance)}</CardTitle>
                        </CardHeader>
                    </Card>
                </div>

                <Show when=move || admin_mode.get() fallback=|| ().into_view()>
                    <Card>
                        <CardHeader>
                            <CardTitle class="text-base">"Catat transaksi"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            <form class="flex flex-col gap-3" on:submit=on_submit>
                                <div class="grid gap-3 sm:grid-cols-2">
                                    <div class="flex flex-col gap-1.5">
                                        <Label html_for="kas-date" class="text-xs">"Tanggal"</Label>
                                        <Input id="kas-date" r#type="date" bind_value=date />
                                    </div>
                                    <div class="flex flex-col gap-1.5">
                                        <Label html_for="kas-type" class="text-xs">"Tipe"</Label>
                                        <Select id="kas-type" bind_value=entry_type>
                                            <option value="in">"Pemasukan"</option>
                                            <option value="out">"Pengeluaran"</option>
                                        </Select>
                                    </div>
                                </div>

                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="kas-desc" class="text-xs">"Deskripsi"</Label>
                                    <Input id="kas-desc" bind_value=desc placeholder="Iuran anggota" />
                                </div>

                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="kas-amount" class="text-xs">"Nominal (Rp)"</Label>
                                    <Input id="kas-amount" r#type="number" bind_value=amount placeholder="50000" />
                                </div>

                                <Show when=move || form_error.get().is_some() fallback=|| ().into_view()>
                                    {move || {
                                        form_error.get().map(|e| view! {
                                            <Alert class="border-destructive/30">
                                                <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                                            </Alert>
                                        })
                                    }}
                                </Show>

                                <Button size=ButtonSize::Sm class="w-fit">"Catat"</Button>
                            </form>
                        </CardContent>
                    </Card>
                </Show>

                <Show
                    when=move || !document.get().kas.is_empty()
                    fallback=|| view! { <div class="text-xs text-muted-foreground">"Belum ada transaksi."</div> }
                >
                    <div class="overflow-x-auto rounded-md border">
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="border-b bg-muted/40 text-left text-xs text-muted-foreground">
                                    <th class="px-3 py-2 font-medium">"Tanggal"</th>
                                    <th class="px-3 py-2 font-medium">"Deskripsi"</th>
                                    <th class="px-3 py-2 font-medium">"Tipe"</th>
                                    <th class="px-3 py-2 text-right font-medium">"Nominal"</th>
                                    <Show when=move || admin_mode.get() fallback=|| ().into_view()>
                                        <th class="px-3 py-2"></th>
                                    </Show>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    document
                                        .get()
                                        .kas
                                        .into_iter()
                                        .map(|e| {
                                            let id = e.id;
                                            view! {
                                                <tr class="border-b last:border-0">
                                                    <td class="px-3 py-2 text-xs">{e.date}</td>
                                                    <td class="px-3 py-2">{e.desc}</td>
                                                    <td class="px-3 py-2">{entry_type_badge(e.entry_type)}</td>
                                                    <td class="px-3 py-2 text-right">{format_rupiah(e.amount)}</td>
                                                    <Show when=move || admin_mode.get() fallback=|| ().into_view()>
                                                        <td class="px-3 py-2 text-right">
                                                            <Button
                                                                variant=ButtonVariant::Destructive
                                                                size=ButtonSize::Sm
                                                                on:click=move |_| {
                                                                    app_state.0.commit(|doc| store::delete_ledger_entry(doc, id));
                                                                }
                                                            >
                                                                "Hapus"
                                                            </Button>
                                                        </td>
                                                    </Show>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </SiteLayout>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let document = app_state.0.document;
    let admin_mode = app_state.0.admin_mode;

    let editing: RwSignal<bool> = RwSignal::new(false);
    let name: RwSignal<String> = RwSignal::new(String::new());
    let address: RwSignal<String> = RwSignal::new(String::new());
    let tagline: RwSignal<String> = RwSignal::new(String::new());

    let start_editing = move |_| {
        let meta = document.get_untracked().meta;
        name.set(meta.name);
        address.set(meta.address);
        tagline.set(meta.tagline);
        editing.set(true);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        app_state.0.commit(|doc| {
            doc.meta.name = name.get_untracked().trim().to_string();
            doc.meta.address = address.get_untracked().trim().to_string();
            doc.meta.tagline = tagline.get_untracked().trim().to_string();
        });
        editing.set(false);
    };

    view! {
        <SiteLayout>
            <div class="flex flex-col gap-6">
                <div>
                    <h1 class="text-xl font-semibold">"Kontak"</h1>
                    <p class="text-xs text-muted-foreground">"Sekretariat dan profil organisasi."</p>
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle class="text-base">{move || document.get().meta.name}</CardTitle>
                        <CardDescription>{move || document.get().meta.tagline}</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <p class="text-sm">{move || document.get().meta.address}</p>
                        <p class="mt-2 text-xs text-muted-foreground">
                            "Datang langsung ke sekretariat atau titip pesan lewat pengurus RW."
                        </p>

                        <Show when=move || admin_mode.get() && !editing.get() fallback=|| ().into_view()>
                            <div class="mt-4">
                                <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=start_editing>
                                    "Edit profil"
                                </Button>
                            </div>
                        </Show>
                    </CardContent>
                </Card>

                <Show when=move || admin_mode.get() && editing.get() fallback=|| ().into_view()>
                    <Card>
                        <CardHeader>
                            <CardTitle class="text-base">"Edit profil organisasi"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            <form class="flex flex-col gap-3" on:submit=on_submit>
                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="meta-name" class="text-xs">"Nama"</Label>
                                    <Input id="meta-name" bind_value=name />
                                </div>
                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="meta-address" class="text-xs">"Alamat"</Label>
                                    <Input id="meta-address" bind_value=address />
                                </div>
                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="meta-tagline" class="text-xs">"Tagline"</Label>
                                    <Input id="meta-tagline" bind_value=tagline />
                                </div>
                                <div class="flex gap-2">
                                    <Button size=ButtonSize::Sm>"Simpan"</Button>
                                    <Button
                                        attr:r#type="button"
                                        variant=ButtonVariant::Ghost
                                        size=ButtonSize::Sm
                                        on:click=move |_| editing.set(false)
                                    >
                                        "Batal"
                                    </Button>
                                </div>
                            </form>
                        </CardContent>
                    </Card>
                </Show>
            </div>
        </SiteLayout>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let document = app_state.0.document;
    let admin_mode = app_state.0.admin_mode;

    // Login form
    let password: RwSignal<String> = RwSignal::new(String::new());
    let login_error: RwSignal<Option<String>> = RwSignal::new(None);

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if app_state.0.login(&password.get_untracked()) {
            password.set(String::new());
            login_error.set(None);
        } else {
            // Deliberately generic: no hint about what was wrong.
            login_error.set(Some("Kata sandi salah.".to_string()));
        }
    };

    // Change password
    let new_password: RwSignal<String> = RwSignal::new(String::new());
    let password_message: RwSignal<Option<Result<String, String>>> = RwSignal::new(None);

    let on_change_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_val = new_password.get_untracked();
        if new_val.trim().is_empty() {
            password_message.set(Some(Err("Kata sandi baru tidak boleh kosong.".to_string())));
            return;
        }
        app_state.0.commit(|doc| store::change_admin_password(doc, &new_val));
        new_password.set(String::new());
        password_message.set(Some(Ok("Kata sandi diganti.".to_string())));
    };

    // Export / import / reset
    let import_message: RwSignal<Option<Result<String, String>>> = RwSignal::new(None);
    let confirm_reset: RwSignal<bool> = RwSignal::new(false);

    let on_export_json = move |_| {
        if let Ok(json) = store::export_json(&document.get_untracked()) {
            let _ = download_text(JSON_EXPORT_FILENAME, "application/json", &json);
        }
    };

    let on_export_csv = move |_| {
        let csv = store::export_ledger_csv(&document.get_untracked());
        let _ = download_text(CSV_EXPORT_FILENAME, "text/csv;charset=utf-8;", &csv);
    };

    let on_import_pick = move |ev: web_sys::Event| {
        import_message.set(None);

        let Some(target) = ev.target() else { return };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        let Some(file) = input.files().and_then(|fs| fs.get(0)) else {
            return;
        };

        let result = read_file_text(file, move |text| {
            match app_state.0.import_document(&text) {
                Ok(()) => import_message.set(Some(Ok("Data berhasil diimpor.".to_string()))),
                Err(e) => import_message.set(Some(Err(e))),
            }
        });
        if let Err(e) = result {
            import_message.set(Some(Err(e)));
        }

        // Allow re-picking the same file.
        input.set_value("");
    };

    let on_reset = move |_| {
        app_state.0.reset_to_default();
        confirm_reset.set(false);
        import_message.set(None);
    };

    view! {
        <SiteLayout>
            <Show
                when=move || admin_mode.get()
                fallback=move || view! {
                    <div class="mx-auto w-full max-w-sm">
                        <Card>
                            <CardHeader>
                                <CardTitle class="text-lg">"Masuk admin"</CardTitle>
                                <CardDescription class="text-xs">
                                    "Mode admin membuka fitur ubah data di semua halaman."
                                </CardDescription>
                            </CardHeader>
                            <CardContent>
                                <form class="flex flex-col gap-3" on:submit=on_login>
                                    <div class="flex flex-col gap-1.5">
                                        <Label html_for="admin-password" class="text-xs">"Kata sandi"</Label>
                                        <Input
                                            id="admin-password"
                                            r#type="password"
                                            placeholder="••••••••"
                                            bind_value=password
                                            required=true
                                        />
                                    </div>

                                    <Show when=move || login_error.get().is_some() fallback=|| ().into_view()>
                                        {move || {
                                            login_error.get().map(|e| view! {
                                                <Alert class="border-destructive/30">
                                                    <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                                                </Alert>
                                            })
                                        }}
                                    </Show>

                                    <Button class="w-full" size=ButtonSize::Sm>"Masuk"</Button>
                                </form>
                            </CardContent>
                        </Card>
                    </div>
                }
            >
                <div class="flex flex-col gap-6">
                    <div class="flex items-center justify-between">
                        <div>
                            <h1 class="text-xl font-semibold">"Panel Admin"</h1>
                            <p class="text-xs text-muted-foreground">
                                "Semua perubahan langsung tersimpan di peramban ini."
                            </p>
                        </div>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            on:click=move |_| app_state.0.logout()
                        >
                            "Keluar"
                        </Button>
                    </div>

                    <Card>
                        <CardHeader>
                            <CardTitle class="text-base">"Ganti kata sandi"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            <form class="flex flex-col gap-3 sm:max-w-sm" on:submit=on_change_password>
                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="new-password" class="text-xs">"Kata sandi baru"</Label>
                                    <Input
                                        id="new-password"
                                        r#type="password"
                                        bind_value=new_password
                                    />
                                </div>

                                <Show when=move || password_message.get().is_some() fallback=|| ().into_view()>
                                    {move || {
                                        password_message.get().map(|msg| match msg {
                                            Ok(m) => view! {
                                                <Alert>
                                                    <AlertDescription class="text-xs">{m}</AlertDescription>
                                                </Alert>
                                            }
                                            .into_any(),
                                            Err(m) => view! {
                                                <Alert class="border-destructive/30">
                                                    <AlertDescription class="text-destructive text-xs">{m}</AlertDescription>
                                                </Alert>
                                            }
                                            .into_any(),
                                        })
                                    }}
                                </Show>

                                <Button size=ButtonSize::Sm class="w-fit">"Simpan"</Button>
                            </form>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle class="text-base">"Data"</CardTitle>
                            <CardDescription class="text-xs">
                                "Ekspor untuk cadangan, impor untuk memulihkan."
                            </CardDescription>
                        </CardHeader>
                        <CardContent>
                            <div class="flex flex-wrap items-center gap-2">
                                <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=on_export_json>
                                    "Ekspor JSON"
                                </Button>
                                <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=on_export_csv>
                                    "Ekspor CSV kas"
                                </Button>
                                <label class="inline-flex h-8 cursor-pointer items-center gap-1.5 rounded-md border px-3 text-sm font-medium hover:bg-accent hover:text-accent-foreground">
                                    "Impor JSON"
                                    <input
                                        type="file"
                                        accept="application/json,.json"
                                        class="hidden"
                                        on:change=on_import_pick
                                    />
                                </label>
                            </div>

                            <Show when=move || import_message.get().is_some() fallback=|| ().into_view()>
                                <div class="mt-3">
                                    {move || {
                                        import_message.get().map(|msg| match msg {
                                            Ok(m) => view! {
                                                <Alert>
                                                    <AlertDescription class="text-xs">{m}</AlertDescription>
                                                </Alert>
                                            }
                                            .into_any(),
                                            Err(m) => view! {
                                                <Alert class="border-destructive/30">
                                                    <AlertDescription class="text-destructive text-xs">{m}</AlertDescription>
                                                </Alert>
                                            }
                                            .into_any(),
                                        })
                                    }}
                                </div>
                            </Show>

                            <div class="mt-6 border-t pt-4">
                                <Show
                                    when=move || confirm_reset.get()
                                    fallback=move || view! {
                                        <Button
                                            variant=ButtonVariant::Destructive
                                            size=ButtonSize::Sm
                                            on:click=move |_| confirm_reset.set(true)
                                        >
                                            "Reset ke data awal"
                                        </Button>
                                    }
                                >
                                    <div class="flex flex-col gap-2">
                                        <p class="text-xs text-destructive">
                                            "Seluruh data tersimpan akan dihapus dan diganti data awal. Lanjutkan?"
                                        </p>
                                        <div class="flex gap-2">
                                            <Button
                                                variant=ButtonVariant::Destructive
                                                size=ButtonSize::Sm
                                                on:click=on_reset
                                            >
                                                "Ya, reset"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Ghost
                                                size=ButtonSize::Sm
                                                on:click=move |_| confirm_reset.set(false)
                                            >
                                                "Batal"
                                            </Button>
                                        </div>
                                    </div>
                                </Show>
                            </div>
                        </CardContent>
                    </Card>
                </div>
            </Show>
        </SiteLayout>
    }
}
