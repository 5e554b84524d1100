use contracts::domain::a002_requisition_item::RequisitionItem;
use contracts::usecases::u501_concurrency_demo::{DemoAttempt, DemoReport};
use futures_util::future::join;

use crate::domain::a002_requisition_item::api::patch_item;
use crate::shared::api_client::ApiClient;

/// Два PATCH одной строки с одной версией, отправленные одновременно.
/// Результаты возвращаются в порядке запросов.
pub async fn run_demo(
    client: &ApiClient,
    requisition_id: i64,
    item: &RequisitionItem,
) -> DemoReport {
    let attempts = DemoAttempt::plan(item);
    log::info!(
        "🔒 Concurrency demo: item {} version {}, {} parallel requests",
        item.id,
        item.version,
        attempts.len()
    );

    let (first, second) = join(
        patch_item(client, requisition_id, item.id, &attempts[0].payload),
        patch_item(client, requisition_id, item.id, &attempts[1].payload),
    )
    .await;

    let report = DemoReport::from_results(attempts, vec![first, second]);
    log::info!(
        "🔒 Concurrency demo finished: {} succeeded, {} conflicts",
        report.success_count(),
        report.conflict_count()
    );
    report
}
