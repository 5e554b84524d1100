use contracts::domain::a004_unit_of_measure::{UnitOfMeasure, ENTITY_LABELS};
use contracts::domain::common::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_unit_of_measure::api::list_units;
use crate::shared::components::ApiErrorAlert;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

#[component]
pub fn UnitOfMeasureList() -> impl IntoView {
    let session = use_session();
    let (items, set_items) = signal(Vec::<UnitOfMeasure>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<ApiError>);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match list_units(&session.client()).await {
                Ok(mut list) => {
                    list.sort_by(|a, b| a.code.cmp(&b.code));
                    set_items.set(list);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };
    load();

    view! {
        <PageFrame page_id="a004_unit_of_measure--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{ENTITY_LABELS.list_name}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || items.with(|v| v.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ApiErrorAlert error=error />
                <div class="table-wrapper">
                    <Table attr:style="width: 100%; max-width: 600px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=120.0>"Код"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Наименование"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|u| u.code.clone()
                                children=|u| view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{u.code}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{u.name}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || items.with(|v| v.is_empty()) && !loading.get()>
                        <div class="table__empty">"Справочник пуст"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
