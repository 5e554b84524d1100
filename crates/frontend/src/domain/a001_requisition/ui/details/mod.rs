pub mod status_actions;
pub mod summary_panel;
pub mod view_model;

use contracts::domain::a001_requisition::{PatchRequisitionPayload, ENTITY_LABELS};
use contracts::domain::a002_requisition_item::RequisitionItem;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::status_actions::{StatusAction, StatusActions};
use self::summary_panel::SummaryPanel;
use self::view_model::RequisitionDetailsVm;
use crate::domain::a001_requisition::api;
use crate::domain::a001_requisition::ui::status_badge::StatusBadge;
use crate::domain::a002_requisition_item::api as item_api;
use crate::domain::a002_requisition_item::ui::form::{ItemForm, ItemFormVm};
use crate::domain::a002_requisition_item::ui::table::ItemTable;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::requisition_tab_label;
use crate::layout::use_notifications;
use crate::shared::components::ApiErrorAlert;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_session;
use crate::usecases::u501_concurrency_demo::ConcurrencyDemoPanel;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Карточка заявки: шапка, переходы статусов, итоги, строки
#[component]
pub fn RequisitionDetails(id: i64, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let vm = RequisitionDetailsVm::new(id, use_session(), notifications);
    let form = ItemFormVm::new();

    spawn_local(vm.load());

    // Заголовок вкладки по номеру заявки
    Effect::new(move || {
        if let Some(number) = vm.number() {
            tabs_store.update_tab_title(
                &ENTITY_LABELS.detail_key(id),
                &requisition_tab_label(Some(&number), id),
            );
        }
    });

    // ── Организатор ────────────────────────────────────────────────────
    let organizer = RwSignal::new(String::new());
    Effect::new(move || {
        let current = vm
            .detail
            .with(|d| d.as_ref().map(|d| d.header.organizer_id.clone()));
        if let Some(current) = current {
            organizer.set(current);
        }
    });
    let organizer_changed = Signal::derive(move || {
        let edited = organizer.get();
        vm.detail.with(|d| {
            d.as_ref()
                .map(|d| !edited.trim().is_empty() && edited.trim() != d.header.organizer_id)
                .unwrap_or(false)
        })
    });

    let save_organizer = move || {
        let payload = PatchRequisitionPayload {
            organizer_id: Some(organizer.get_untracked().trim().to_string()),
        };
        spawn_local(async move {
            let client = vm.client();
            vm.mutate(
                "Организатор сохранён".to_string(),
                api::patch_requisition(&client, id, &payload),
            )
            .await;
        });
    };

    // ── Статус ─────────────────────────────────────────────────────────
    let on_action = Callback::new(move |action: StatusAction| {
        let (Some(current), Some(number)) = (vm.status(), vm.number()) else {
            return;
        };
        if !confirm(&action.confirm_message(current, &number)) {
            return;
        }
        log!("Requisition {}: {:?}", number, action);
        spawn_local(async move {
            let client = vm.client();
            match action {
                StatusAction::Transition(target) => {
                    vm.mutate(
                        format!("Заявка {}: {}", number, target.label()),
                        api::transition(&client, id, target),
                    )
                    .await;
                }
                StatusAction::Reactivate => {
                    vm.mutate(
                        format!("Заявка {} восстановлена в черновик", number),
                        api::reactivate(&client, id),
                    )
                    .await;
                }
            }
        });
    });

    let delete_requisition = move || {
        let Some(number) = vm.number() else {
            return;
        };
        if !confirm(&format!("Удалить заявку {} вместе со строками?", number)) {
            return;
        }
        spawn_local(async move {
            vm.busy.set(true);
            match api::delete_requisition(&vm.client(), id).await {
                Ok(()) => {
                    notifications.success(format!("Заявка {} удалена", number));
                    on_close.run(());
                }
                Err(e) => {
                    notifications.api_error(&e);
                    vm.action_error.set(Some(e));
                }
            }
            vm.busy.set(false);
        });
    };

    // ── Строки ─────────────────────────────────────────────────────────
    let on_edit_item = Callback::new(move |item: RequisitionItem| form.open_edit(&item));

    let on_delete_item = Callback::new(move |item: RequisitionItem| {
        if !confirm(&format!(
            "Удалить строку {} ({})?",
            item.row_number, item.nomenclature_code
        )) {
            return;
        }
        spawn_local(async move {
            let client = vm.client();
            vm.mutate(
                format!("Строка {} удалена", item.row_number),
                item_api::delete_item(&client, id, item.id),
            )
            .await;
        });
    });

    let on_item_saved = Callback::new(move |_| spawn_local(vm.reload()));

    let items = Signal::derive(move || {
        vm.detail
            .with(|d| d.as_ref().map(|d| d.items.clone()).unwrap_or_default())
    });
    let editable = Signal::derive(move || vm.items_editable());
    let busy = Signal::derive(move || vm.busy.get() || vm.loading.get());
    let first_item = Signal::derive(move || {
        vm.detail
            .with(|d| d.as_ref().and_then(|d| d.first_item().cloned()))
    });

    view! {
        <PageFrame page_id="a001_requisition--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || vm.number().unwrap_or_else(|| format!("Заявка #{}", id))}
                    </h1>
                    {move || vm.status().map(|status| view! { <StatusBadge status=status /> })}
                </div>
                <div class="page__header-right">
                    <Space>
                        <Show when=move || vm.deletable()>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| delete_requisition()
                                disabled=busy
                            >
                                {icon("delete")}
                                " Удалить"
                            </Button>
                        </Show>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| spawn_local(vm.reload())
                            disabled=busy
                        >
                            {icon("refresh")}
                            " Обновить"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                            "✕ Закрыть"
                        </Button>
                    </Space>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || vm.detail.with(|d| d.is_some())
                    fallback=move || {
                        view! {
                            <Show
                                when=move || vm.load_error.with(|e| e.is_some())
                                fallback=|| view! {
                                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                        <Spinner />
                                        "Загрузка..."
                                    </Flex>
                                }
                            >
                                <ApiErrorAlert error=vm.load_error />
                            </Show>
                        }
                    }
                >
                    <div class="requisition-detail">
                        <div class="requisition-detail__header">
                            <div class="form-group">
                                <Label>"Организатор"</Label>
                                <Show
                                    when=move || vm.items_editable()
                                    fallback=move || view! {
                                        <span class="requisition-detail__value">
                                            {move || organizer.get()}
                                        </span>
                                    }
                                >
                                    <Flex gap=FlexGap::Small>
                                        <Input value=organizer placeholder="user-123" />
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| save_organizer()
                                            disabled=Signal::derive(move || {
                                                busy.get() || !organizer_changed.get()
                                            })
                                        >
                                            "Сохранить"
                                        </Button>
                                    </Flex>
                                </Show>
                            </div>

                            <div class="requisition-detail__actions">
                                <Label>"Статус"</Label>
                                <StatusActions
                                    status=Signal::derive(move || vm.status())
                                    busy=busy
                                    on_action=on_action
                                />
                            </div>
                        </div>

                        <ApiErrorAlert error=vm.action_error />

                        <Show when=move || !vm.items_editable()>
                            <MessageBar intent=MessageBarIntent::Warning>
                                <MessageBarBody>
                                    {move || {
                                        format!(
                                            "Заявка в статусе «{}»: строки только для чтения",
                                            vm.status().map(|s| s.label()).unwrap_or_default(),
                                        )
                                    }}
                                </MessageBarBody>
                            </MessageBar>
                        </Show>

                        <SummaryPanel summary=vm.summary error=vm.summary_error />

                        <div class="requisition-detail__items">
                            <div class="requisition-detail__items-header">
                                <h2>"Строки заявки"</h2>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| form.open_create()
                                    disabled=Signal::derive(move || !editable.get() || busy.get())
                                >
                                    {icon("plus")}
                                    " Добавить строку"
                                </Button>
                            </div>
                            <ItemTable
                                items=items
                                units=vm.units
                                editable=editable
                                busy=busy
                                on_edit=on_edit_item
                                on_delete=on_delete_item
                            />
                        </div>

                        <Show when=move || { editable.get() && vm.item_count() > 0 }>
                            <ConcurrencyDemoPanel
                                requisition_id=id
                                item=first_item
                                disabled=busy
                                on_finished=Callback::new(move |_| spawn_local(vm.reload()))
                            />
                        </Show>
                    </div>
                </Show>
            </div>

            <ItemForm
                requisition_id=id
                vm=form
                nomenclatures=vm.nomenclatures
                units=vm.units
                used_codes=Signal::derive(move || vm.used_codes())
                on_saved=on_item_saved
            />
        </PageFrame>
    }
}
