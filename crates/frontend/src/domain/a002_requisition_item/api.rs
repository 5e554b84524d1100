use contracts::domain::a002_requisition_item::{CreateItemPayload, PatchItemPayload, RequisitionItem};
use contracts::domain::common::ApiResult;

use crate::shared::api_client::ApiClient;

fn items_path(requisition_id: i64) -> String {
    format!("/requisitions/{}/items", requisition_id)
}

pub async fn create_item(
    client: &ApiClient,
    requisition_id: i64,
    payload: &CreateItemPayload,
) -> ApiResult<RequisitionItem> {
    client.post(&items_path(requisition_id), payload).await
}

/// Изменение строки; `payload.version` должна совпадать с текущей версией на сервере
pub async fn patch_item(
    client: &ApiClient,
    requisition_id: i64,
    item_id: i64,
    payload: &PatchItemPayload,
) -> ApiResult<RequisitionItem> {
    client
        .patch(&format!("{}/{}", items_path(requisition_id), item_id), payload)
        .await
}

pub async fn delete_item(client: &ApiClient, requisition_id: i64, item_id: i64) -> ApiResult<()> {
    client
        .delete(&format!("{}/{}", items_path(requisition_id), item_id))
        .await
}
