use contracts::domain::a001_requisition::RequisitionDetail;
use contracts::domain::a003_nomenclature::Nomenclature;
use contracts::domain::a004_unit_of_measure::UnitOfMeasure;
use contracts::domain::common::{ApiError, ApiResult};
use contracts::enums::RequisitionStatus;
use contracts::projections::p900_requisition_summary::RequisitionSummary;
use futures_util::future::join;
use leptos::prelude::*;
use std::future::Future;

use crate::domain::a001_requisition::api;
use crate::domain::a003_nomenclature::api::list_nomenclatures;
use crate::domain::a004_unit_of_measure::api::list_units;
use crate::layout::NotificationService;
use crate::shared::api_client::ApiClient;
use crate::system::auth::context::Session;

/// Состояние карточки заявки.
/// Все изменения идут через `mutate`: сначала ответ сервера, потом перечитка.
#[derive(Clone, Copy)]
pub struct RequisitionDetailsVm {
    pub id: i64,
    session: Session,
    notifications: NotificationService,

    pub detail: RwSignal<Option<RequisitionDetail>>,
    pub summary: RwSignal<Option<RequisitionSummary>>,
    pub summary_error: RwSignal<Option<ApiError>>,
    pub nomenclatures: RwSignal<Vec<Nomenclature>>,
    pub units: RwSignal<Vec<UnitOfMeasure>>,

    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<ApiError>>,
    /// Идёт запрос на изменение
    pub busy: RwSignal<bool>,
    pub action_error: RwSignal<Option<ApiError>>,
}

impl RequisitionDetailsVm {
    pub fn new(id: i64, session: Session, notifications: NotificationService) -> Self {
        Self {
            id,
            session,
            notifications,
            detail: RwSignal::new(None),
            summary: RwSignal::new(None),
            summary_error: RwSignal::new(None),
            nomenclatures: RwSignal::new(Vec::new()),
            units: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
            busy: RwSignal::new(false),
            action_error: RwSignal::new(None),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.session.client()
    }

    // ── Производные значения ───────────────────────────────────────────

    pub fn status(&self) -> Option<RequisitionStatus> {
        self.detail.with(|d| d.as_ref().map(|d| d.header.status))
    }

    pub fn number(&self) -> Option<String> {
        self.detail.with(|d| d.as_ref().map(|d| d.header.number.clone()))
    }

    pub fn items_editable(&self) -> bool {
        self.detail
            .with(|d| d.as_ref().map(|d| d.header.items_editable()).unwrap_or(false))
    }

    pub fn deletable(&self) -> bool {
        self.detail
            .with(|d| d.as_ref().map(|d| d.header.deletable()).unwrap_or(false))
    }

    pub fn item_count(&self) -> usize {
        self.detail.with(|d| d.as_ref().map(|d| d.items.len()).unwrap_or(0))
    }

    pub fn used_codes(&self) -> Vec<String> {
        self.detail.with(|d| {
            d.as_ref()
                .map(|d| {
                    d.used_nomenclature_codes()
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    // ── Загрузка ───────────────────────────────────────────────────────

    /// Первая загрузка: заявка, итоги и справочники параллельно
    pub async fn load(self) {
        self.loading.set(true);
        self.load_error.set(None);

        let client = self.client();
        let (_, (nomenclatures, units)) = join(
            self.fetch(&client),
            join(list_nomenclatures(&client), list_units(&client)),
        )
        .await;

        match nomenclatures {
            Ok(list) => self.nomenclatures.set(list),
            Err(e) => log::warn!("Nomenclature catalog not loaded: {}", e),
        }
        match units {
            Ok(list) => self.units.set(list),
            Err(e) => log::warn!("Units catalog not loaded: {}", e),
        }

        self.loading.set(false);
    }

    /// Перечитать заявку и итоги после изменения
    pub async fn reload(self) {
        self.loading.set(true);
        let client = self.client();
        self.fetch(&client).await;
        self.loading.set(false);
    }

    async fn fetch(&self, client: &ApiClient) {
        let (detail, summary) = join(
            api::get_requisition(client, self.id),
            api::get_summary(client, self.id),
        )
        .await;

        match detail {
            Ok(d) => {
                log::debug!("Requisition {} loaded, {} items", d.header.number, d.items.len());
                self.detail.set(Some(d));
                self.load_error.set(None);
            }
            Err(e) => self.load_error.set(Some(e)),
        }

        match summary {
            Ok(s) => {
                self.summary.set(Some(s));
                self.summary_error.set(None);
            }
            Err(e) => {
                self.summary.set(None);
                self.summary_error.set(Some(e));
            }
        }
    }

    // ── Изменения ──────────────────────────────────────────────────────

    /// Выполнить запрос на изменение. Успех: уведомление и перечитка,
    /// ошибка: уведомление и ошибка под шапкой.
    pub async fn mutate<T, F>(self, success_message: String, request: F)
    where
        F: Future<Output = ApiResult<T>>,
    {
        self.busy.set(true);
        self.action_error.set(None);
        let result = request.await;
        self.busy.set(false);

        match result {
            Ok(_) => {
                self.notifications.success(success_message);
                self.reload().await;
            }
            Err(err) => {
                log::warn!("Requisition {} action failed: {}", self.id, err);
                self.notifications.api_error(&err);
                self.action_error.set(Some(err));
            }
        }
    }
}
