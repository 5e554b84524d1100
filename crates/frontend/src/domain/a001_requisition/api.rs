use contracts::domain::a001_requisition::{
    CreateRequisitionPayload, PatchRequisitionPayload, Requisition, RequisitionDetail,
    TransitionPayload,
};
use contracts::domain::common::ApiResult;
use contracts::enums::RequisitionStatus;
use contracts::projections::p900_requisition_summary::RequisitionSummary;

use crate::shared::api_client::ApiClient;

const BASE: &str = "/requisitions";

/// Список заявок; null в ответе трактуется как пустой список
pub async fn list_requisitions(client: &ApiClient) -> ApiResult<Vec<Requisition>> {
    let list: Option<Vec<Requisition>> = client.get(BASE).await?;
    Ok(list.unwrap_or_default())
}

pub async fn get_requisition(client: &ApiClient, id: i64) -> ApiResult<RequisitionDetail> {
    client.get(&format!("{}/{}", BASE, id)).await
}

/// Итоги считаются бэкендом
pub async fn get_summary(client: &ApiClient, id: i64) -> ApiResult<RequisitionSummary> {
    client.get(&format!("{}/{}/summary", BASE, id)).await
}

pub async fn create_requisition(
    client: &ApiClient,
    payload: &CreateRequisitionPayload,
) -> ApiResult<Requisition> {
    client.post(BASE, payload).await
}

pub async fn patch_requisition(
    client: &ApiClient,
    id: i64,
    payload: &PatchRequisitionPayload,
) -> ApiResult<Requisition> {
    client.patch(&format!("{}/{}", BASE, id), payload).await
}

pub async fn delete_requisition(client: &ApiClient, id: i64) -> ApiResult<()> {
    client.delete(&format!("{}/{}", BASE, id)).await
}

pub async fn transition(
    client: &ApiClient,
    id: i64,
    target_status: RequisitionStatus,
) -> ApiResult<Requisition> {
    let payload = TransitionPayload { target_status };
    client
        .post(&format!("{}/{}/transition", BASE, id), &payload)
        .await
}

/// Вернуть отменённую заявку в черновик
pub async fn reactivate(client: &ApiClient, id: i64) -> ApiResult<Requisition> {
    client.post_empty(&format!("{}/{}/reactivate", BASE, id)).await
}
