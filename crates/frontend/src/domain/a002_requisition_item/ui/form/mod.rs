pub mod view_model;

pub use view_model::{ItemFormMode, ItemFormVm, SaveOutcome};

use contracts::domain::a002_requisition_item::rules::{
    available_nomenclatures, build_create_payload, build_patch_payload, min_delivery_date,
    FIELD_DELIVERY_DATE, FIELD_NOMENCLATURE, FIELD_PRICE, FIELD_QUANTITY, FIELD_UNIT,
};
use contracts::domain::a003_nomenclature::Nomenclature;
use contracts::domain::a004_unit_of_measure::UnitOfMeasure;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::view_model::units_for;
use crate::domain::a002_requisition_item::api;
use crate::layout::use_notifications;
use crate::shared::components::{ApiErrorAlert, DateInput};
use crate::shared::date_utils::{to_input_value, today};
use crate::system::auth::context::use_session;

/// Диалог добавления и изменения строки заявки
#[component]
pub fn ItemForm(
    requisition_id: i64,
    vm: ItemFormVm,
    #[prop(into)] nomenclatures: Signal<Vec<Nomenclature>>,
    #[prop(into)] units: Signal<Vec<UnitOfMeasure>>,
    /// Коды номенклатуры, уже занятые строками заявки
    #[prop(into)]
    used_codes: Signal<Vec<String>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();

    Effect::new(move || {
        vm.nomenclature_code.track();
        untrack(move || nomenclatures.with(|all| vm.apply_nomenclature(all)));
    });

    let nomenclature_options = Memo::new(move |_| {
        let used = used_codes.get();
        let used: Vec<&str> = used.iter().map(String::as_str).collect();
        nomenclatures.with(|all| {
            available_nomenclatures(all, &used, None)
                .into_iter()
                .map(|n| (n.code.clone(), n.display_label()))
                .collect::<Vec<_>>()
        })
    });

    let unit_options = Memo::new(move |_| {
        let code = vm.nomenclature_code.get();
        nomenclatures.with(|all| {
            let nom = all.iter().find(|n| n.code == code);
            units.with(|u| units_for(nom, u))
        })
    });

    let min_date = to_input_value(min_delivery_date(today()));

    let finish = move |outcome: SaveOutcome| {
        match &outcome {
            SaveOutcome::Saved { notice } => notifications.success(notice.clone()),
            SaveOutcome::Rejected(err) => notifications.api_error(err),
        }
        if vm.finish_save(outcome) {
            on_saved.run(());
        }
    };

    let submit = move || {
        let input = vm.input();
        let client = session.client();
        vm.advisory.set(None);
        vm.server_error.set(None);

        let mode = vm.mode.get_untracked();
        match mode {
            ItemFormMode::Create => {
                let payload =
                    match nomenclatures.with_untracked(|all| build_create_payload(&input, all, today())) {
                        Ok(p) => p,
                        Err(v) => {
                            vm.advisory.set(Some(v));
                            return;
                        }
                    };
                vm.saving.set(true);
                spawn_local(async move {
                    let result = api::create_item(&client, requisition_id, &payload).await;
                    finish(SaveOutcome::from_result(mode, result));
                });
            }
            ItemFormMode::Edit { item_id, version } => {
                let payload = match build_patch_payload(&input, version, today()) {
                    Ok(p) => p,
                    Err(v) => {
                        vm.advisory.set(Some(v));
                        return;
                    }
                };
                vm.saving.set(true);
                spawn_local(async move {
                    let result = api::patch_item(&client, requisition_id, item_id, &payload).await;
                    finish(SaveOutcome::from_result(mode, result));
                });
            }
        }
    };

    let group_class = move |field: &'static str| {
        move || {
            if vm.is_invalid(field) {
                "form-group form-group--invalid"
            } else {
                "form-group"
            }
        }
    };

    view! {
        <Dialog open=vm.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || if vm.is_edit() { "Изменение строки" } else { "Новая строка" }}
                    </DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Medium>
                            <Show
                                when=move || vm.is_edit()
                                fallback=move || {
                                    view! {
                                        <div class=group_class(FIELD_NOMENCLATURE)>
                                            <Label>"Номенклатура"</Label>
                                            <Select value=vm.nomenclature_code>
                                                <option value="">"— выберите —"</option>
                                                <For
                                                    each=move || nomenclature_options.get()
                                                    key=|(code, _)| code.clone()
                                                    children=|(code, label)| {
                                                        view! { <option value=code>{label}</option> }
                                                    }
                                                />
                                            </Select>
                                        </div>
                                        <div class="form-group">
                                            <Label>"Наименование"</Label>
                                            <Input value=vm.nomenclature_name placeholder="Из справочника" />
                                        </div>
                                        <div class=group_class(FIELD_UNIT)>
                                            <Label>"Единица измерения"</Label>
                                            <Select value=vm.unit_code>
                                                <option value="">"— выберите —"</option>
                                                <For
                                                    each=move || unit_options.get()
                                                    key=|u| u.code.clone()
                                                    children=|u| {
                                                        view! { <option value=u.code.clone()>{u.name.clone()}</option> }
                                                    }
                                                />
                                            </Select>
                                        </div>
                                        <div class=group_class(FIELD_PRICE)>
                                            <Label>"Цена без НДС"</Label>
                                            <Input value=vm.price input_type=InputType::Number placeholder="0.00" />
                                        </div>
                                    }
                                }
                            >
                                <div class="item-form__fixed">
                                    <div>
                                        <b>{move || vm.nomenclature_code.get()}</b>
                                        " "
                                        {move || vm.nomenclature_name.get()}
                                    </div>
                                    <div class="item-form__hint">
                                        "Номенклатура, единица и цена не меняются"
                                    </div>
                                </div>
                            </Show>

                            <div class=group_class(FIELD_QUANTITY)>
                                <Label>"Количество"</Label>
                                <Input value=vm.quantity input_type=InputType::Number />
                            </div>

                            <div class=group_class(FIELD_DELIVERY_DATE)>
                                <Label>"Желаемая дата поставки"</Label>
                                <DateInput
                                    value=vm.desired_delivery_date
                                    on_change=move |v: String| vm.desired_delivery_date.set(v)
                                    min=Some(min_date.clone())
                                    invalid=Signal::derive(move || vm.is_invalid(FIELD_DELIVERY_DATE))
                                />
                            </div>

                            <div class="form-group">
                                <Label>"Комментарий"</Label>
                                <Textarea value=vm.comment placeholder="Необязательно" />
                            </div>

                            {move || {
                                vm.advisory.get().map(|v| {
                                    view! {
                                        <MessageBar intent=MessageBarIntent::Warning>
                                            <MessageBarBody>
                                                <MessageBarTitle>"Проверьте форму (подсказка)"</MessageBarTitle>
                                                {v.message}
                                            </MessageBarBody>
                                        </MessageBar>
                                    }
                                })
                            }}

                            <ApiErrorAlert error=vm.server_error />
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| submit()
                            disabled=Signal::derive(move || vm.saving.get())
                        >
                            {move || if vm.saving.get() { "Сохранение..." } else { "Сохранить" }}
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.close()>
                            "Отмена"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
