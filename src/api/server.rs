use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

use super::routes::{address_book_router, with_operational_routes};
use super::service::AddressBookService;
use super::state::AppState;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::model::AddressBook;
use crate::storage::JsonAddressBookStorage;

/// Serves the address book until the listener fails.
pub async fn run(
    config: &AppConfig,
    book: AddressBook,
    storage: JsonAddressBookStorage,
) -> Result<(), AppError> {
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(AddressBookService::new(book, Some(storage)));
    let app = with_operational_routes(address_book_router(service))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "applicant book api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
