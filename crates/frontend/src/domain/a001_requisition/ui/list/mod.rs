pub mod state;

use self::state::create_state;
use crate::domain::a001_requisition::api;
use crate::domain::a001_requisition::ui::status_badge::StatusBadge;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::requisition_detail_tab;
use crate::layout::use_notifications;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ApiErrorAlert;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use contracts::domain::a001_requisition::{CreateRequisitionPayload, Requisition, ENTITY_LABELS};
use contracts::domain::common::ApiError;
use contracts::enums::RequisitionStatus;
use contracts::system::auth::DEFAULT_USERNAME;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn RequisitionList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let notifications = use_notifications();

    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<ApiError>);

    let open_detail = move |requisition: &Requisition| {
        let (key, title) = requisition_detail_tab(requisition);
        tabs_store.open_tab(&key, &title);
    };

    let load_items = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::list_requisitions(&session.client()).await {
                Ok(items) => {
                    log!("Loaded {} requisitions", items.len());
                    state.update(|s| {
                        s.items = items;
                        s.is_loaded = true;
                    });
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    // Фильтр по статусу: "" = все
    let status_value = RwSignal::new(String::new());
    Effect::new(move || {
        let raw = status_value.get();
        let filter = raw.parse::<RequisitionStatus>().ok();
        untrack(move || state.update(|s| s.status_filter = filter));
    });

    let search_query = RwSignal::new(String::new());
    Effect::new(move || {
        let v = search_query.get();
        untrack(move || state.update(|s| s.search_query = v));
    });

    // ── Создание заявки ─────────────────────────────────────────────────
    let show_create = RwSignal::new(false);
    let organizer = RwSignal::new(String::new());
    let (create_error, set_create_error) = signal(None::<ApiError>);
    let (creating, set_creating) = signal(false);

    let open_create = move || {
        let default_organizer = session
            .user
            .get_untracked()
            .map(|u| u.display_name().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        organizer.set(default_organizer);
        set_create_error.set(None);
        show_create.set(true);
    };

    let submit_create = move || {
        let payload = match CreateRequisitionPayload::new(&organizer.get_untracked()) {
            Ok(p) => p,
            Err(msg) => {
                set_create_error.set(Some(
                    ApiError::invalid_request(msg).with_field("organizerId"),
                ));
                return;
            }
        };
        set_creating.set(true);
        set_create_error.set(None);
        spawn_local(async move {
            match api::create_requisition(&session.client(), &payload).await {
                Ok(created) => {
                    notifications.success(format!("Заявка {} создана", created.number));
                    show_create.set(false);
                    open_detail(&created);
                    load_items();
                }
                Err(e) => set_create_error.set(Some(e)),
            }
            set_creating.set(false);
        });
    };

    let sort_header = move |field: &'static str, title: &'static str| {
        view! {
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| state.update(|s| s.toggle_sort(field))
            >
                {title}
                <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                    {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                </span>
            </div>
        }
    };

    view! {
        <PageFrame page_id="a001_requisition--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{ENTITY_LABELS.list_name}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || state.with(|s| s.visible_items().len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Space>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                            {icon("plus")}
                            " Новая заявка"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| load_items()
                            disabled=Signal::derive(move || loading.get())
                        >
                            {icon("refresh")}
                            {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                        </Button>
                    </Space>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Статус:"</Label>
                            <Select value=status_value>
                                <option value="">"Все статусы"</option>
                                {RequisitionStatus::ALL
                                    .iter()
                                    .map(|s| {
                                        let status = *s;
                                        view! {
                                            <option value=status.as_str()>
                                                {move || format!(
                                                    "{} ({})",
                                                    status.label(),
                                                    state.with(|st| st.count_by_status(status)),
                                                )}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </Select>
                        </Flex>
                        <div style="flex: 1; max-width: 360px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Поиск:"</Label>
                                <Input value=search_query placeholder="Номер или организатор..." />
                            </Flex>
                        </div>
                    </Flex>
                </div>

                <ApiErrorAlert error=error />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 700px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=140.0>
                                    {sort_header("number", "Номер")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>
                                    {sort_header("status", "Статус")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>
                                    {sort_header("organizer", "Организатор")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>
                                    {sort_header("total", "Сумма лота без НДС")}
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.visible_items())
                                key=|r| (r.id, r.status, r.organizer_id.clone(), r.total_lot_sum_no_nds.to_bits())
                                children=move |r| {
                                    let row = r.clone();
                                    let total = r.total_lot_sum_no_nds;
                                    view! {
                                        <TableRow
                                            on:click=move |_| open_detail(&row)
                                            attr:style="cursor: pointer;"
                                        >
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__link">{r.number.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=r.status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{r.organizer_id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=Signal::derive(move || Some(total)) />
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || state.with(|s| s.is_loaded && s.visible_items().is_empty())>
                        <div class="table__empty">"Заявок нет"</div>
                    </Show>
                </div>
            </div>

            <Dialog open=show_create>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Новая заявка"</DialogTitle>
                        <DialogContent>
                            <Flex vertical=true gap=FlexGap::Medium>
                                <div class="form-group">
                                    <Label>"Организатор"</Label>
                                    <Input value=organizer placeholder="user-123" />
                                </div>
                                <ApiErrorAlert error=create_error />
                            </Flex>
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| submit_create()
                                disabled=Signal::derive(move || creating.get())
                            >
                                {move || if creating.get() { "Создание..." } else { "Создать" }}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| show_create.set(false)
                            >
                                "Отмена"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
