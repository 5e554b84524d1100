use contracts::domain::a003_nomenclature::{Nomenclature, ENTITY_LABELS};
use contracts::domain::a004_unit_of_measure::{unit_name, UnitOfMeasure};
use contracts::domain::common::ApiError;
use futures_util::future::join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a003_nomenclature::api::list_nomenclatures;
use crate::domain::a004_unit_of_measure::api::list_units;
use crate::shared::components::ApiErrorAlert;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

impl Searchable for Nomenclature {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.code.to_lowercase().contains(filter_lower)
            || self.name.to_lowercase().contains(filter_lower)
    }
}

impl Sortable for Nomenclature {
    fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
        self.code.cmp(&other.code)
    }
}

/// Названия разрешённых единиц через запятую
pub fn allowed_unit_names(nom: &Nomenclature, units: &[UnitOfMeasure]) -> String {
    nom.allowed_units
        .iter()
        .map(|code| unit_name(units, code))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Справочник номенклатуры (только чтение)
#[component]
pub fn NomenclatureList() -> impl IntoView {
    let session = use_session();
    let (items, set_items) = signal(Vec::<Nomenclature>::new());
    let (units, set_units) = signal(Vec::<UnitOfMeasure>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<ApiError>);
    let search = RwSignal::new(String::new());

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let client = session.client();
            let (noms, unit_list) = join(list_nomenclatures(&client), list_units(&client)).await;
            match noms {
                Ok(list) => set_items.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            match unit_list {
                Ok(list) => set_units.set(list),
                Err(e) => log::warn!("Units not loaded: {}", e),
            }
            set_loading.set(false);
        });
    };
    load();

    let visible = Memo::new(move |_| {
        let mut rows = filter_list(items.get(), &search.get());
        sort_list(&mut rows, "code", true);
        rows
    });

    view! {
        <PageFrame page_id="a003_nomenclature--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{ENTITY_LABELS.list_name}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || visible.with(|v| v.len()).to_string()}
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
                <div class="filter-panel" style="max-width: 360px;">
                    <Input value=search placeholder="Код или наименование..." />
                </div>

                <ApiErrorAlert error=error />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=120.0>"Код"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=260.0>"Наименование"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Единицы"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|n| n.code.clone()
                                children=move |n| {
                                    let nom = n.clone();
                                    let units_text = move || units.with(|u| allowed_unit_names(&nom, u));
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{n.code.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{n.name.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{units_text}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_names_fall_back_to_codes() {
        let nom = Nomenclature {
            code: "NOM-1".into(),
            name: "Бумага".into(),
            allowed_units: vec!["PCS".into(), "BOX".into()],
        };
        let units = vec![UnitOfMeasure {
            code: "PCS".into(),
            name: "шт".into(),
        }];
        assert_eq!(allowed_unit_names(&nom, &units), "шт, BOX");
    }
}
