use contracts::domain::a004_unit_of_measure::UnitOfMeasure;
use contracts::domain::common::ApiResult;

use crate::shared::api_client::ApiClient;

pub async fn list_units(client: &ApiClient) -> ApiResult<Vec<UnitOfMeasure>> {
    let list: Option<Vec<UnitOfMeasure>> = client.get("/reference/units").await?;
    Ok(list.unwrap_or_default())
}
