use contracts::domain::a003_nomenclature::Nomenclature;
use contracts::domain::common::ApiResult;

use crate::shared::api_client::ApiClient;

pub async fn list_nomenclatures(client: &ApiClient) -> ApiResult<Vec<Nomenclature>> {
    let list: Option<Vec<Nomenclature>> = client.get("/reference/nomenclatures").await?;
    Ok(list.unwrap_or_default())
}
