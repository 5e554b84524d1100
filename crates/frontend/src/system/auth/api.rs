use contracts::domain::common::ApiResult;
use contracts::system::auth::CurrentUser;

use crate::shared::api_client::ApiClient;

/// "Кто я": проверяет, что токен ещё принимается сервером.
/// Пустой ответ 2xx тоже считается успешным.
pub async fn fetch_current_user(client: &ApiClient) -> ApiResult<CurrentUser> {
    let user: Option<CurrentUser> = client.get("/auth/me").await?;
    Ok(user.unwrap_or_default())
}
