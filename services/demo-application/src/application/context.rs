use crate::application::APPLICATION_NAME;
use crate::application::settings::DemoSettings;
use crate::source::record_source::RecordSource;
use anyhow::Result;
use big_dataset_paginator::BigDatasetPaginator;
use big_dataset_paginator::SetPageOptions;
use std::sync::LazyLock;
use tracing::Instrument as _;

static PAGE_VISITED_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("demo_pages_visited")
        .with_description("Number of pages visited by the demo walk")
        .build()
});

pub type DemoPaginator = BigDatasetPaginator<RecordSource>;

pub fn create_paginator(settings: &DemoSettings) -> Result<DemoPaginator> {
    let source = RecordSource::new(settings.data_total(), settings.load_latency());

    Ok(BigDatasetPaginator::with_config(source, settings.paginator())?)
}

pub async fn start_application(settings: DemoSettings) -> Result<()> {
    tracing::info!("Starting with settings {}", serde_json::to_string(&settings)?);

    let paginator = create_paginator(&settings)?;

    // Walk the dataset on a worker task, as a UI event loop would
    let parent_span = tracing::Span::current();
    let handle = tokio::spawn(
        async move {
            let mut paginator = paginator;
            walk_pages(&mut paginator).await
        }
        .instrument(parent_span),
    );

    handle.await??;

    Ok(())
}

#[tracing::instrument(skip_all, fields(
    items_per_page = paginator.items_per_page(),
    items_per_load = paginator.items_per_load(),
))]
async fn walk_pages(paginator: &mut DemoPaginator) -> Result<()> {
    tracing::info!(
        "Paginating the dataset: {}",
        serde_json::to_string(&paginator.state())?
    );

    let total_pages = paginator.total_pages();
    if total_pages == 0 {
        tracing::warn!("The dataset is empty, nothing to paginate");
        return Ok(());
    }

    for page_number in 1..=total_pages {
        paginator.set_current_page_number(page_number).await?;
        log_current_page(paginator)?;
    }

    // Back to the first page, refreshing its load
    paginator
        .set_current_page_number_with(1, SetPageOptions::reload())
        .await?;
    log_current_page(paginator)?;

    tracing::info!(
        "Finished on load {:?} of {}",
        paginator.current_load_number(),
        paginator.total_loads()
    );

    Ok(())
}

fn log_current_page(paginator: &DemoPaginator) -> Result<()> {
    PAGE_VISITED_COUNTER.add(1, &[]);

    tracing::info!("{}", serde_json::to_string(&paginator.page_response())?);

    Ok(())
}
