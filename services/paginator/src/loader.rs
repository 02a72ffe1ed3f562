use crate::LIBRARY_NAME;
use crate::error::PaginationError;
use crate::error::Result;
use crate::source::DataSource;
use crate::translator::PageLocation;
use crate::translator::Translator;
use std::sync::LazyLock;

static LOAD_FETCH_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(LIBRARY_NAME)
        .u64_counter("paginator_load_fetches")
        .with_description("Number of loads fetched from the data source")
        .build()
});

static LOAD_FETCH_ERROR_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> =
    LazyLock::new(|| {
        opentelemetry::global::meter(LIBRARY_NAME)
            .u64_counter("paginator_load_fetch_errors")
            .with_description("Number of loads the data source failed to return")
            .build()
    });

static LOAD_CACHE_HIT_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> =
    LazyLock::new(|| {
        opentelemetry::global::meter(LIBRARY_NAME)
            .u64_counter("paginator_load_cache_hits")
            .with_description("Number of page requests served from the cached load")
            .build()
    });

#[derive(Debug)]
pub struct LoadedChunk<T> {
    load_number: usize,
    items_per_load: usize,
    items: Vec<T>,
}

impl<T> LoadedChunk<T> {
    const fn new(load_number: usize, items_per_load: usize, items: Vec<T>) -> Self {
        Self {
            load_number,
            items_per_load,
            items,
        }
    }

    pub const fn load_number(&self) -> usize {
        self.load_number
    }

    pub const fn items_per_load(&self) -> usize {
        self.items_per_load
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

// Holds the most recently fetched load only
#[derive(Debug)]
pub struct PageLoader<T> {
    chunk: Option<LoadedChunk<T>>,
}

impl<T> Default for PageLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PageLoader<T> {
    pub const fn new() -> Self {
        Self { chunk: None }
    }

    pub const fn chunk(&self) -> Option<&LoadedChunk<T>> {
        self.chunk.as_ref()
    }

    fn is_cached(&self, load_number: usize, items_per_load: usize) -> bool {
        self.chunk.as_ref().is_some_and(|chunk| {
            chunk.load_number == load_number && chunk.items_per_load == items_per_load
        })
    }

    pub async fn ensure_load_for<S>(
        &mut self,
        data_source: &S,
        translator: &Translator<'_>,
        page_number: usize,
        force_reload: bool,
    ) -> Result<PageLocation>
    where
        S: DataSource<Item = T>,
    {
        let location = translator.locate(page_number)?;
        let load_number = location.load_number();
        let items_per_load = translator.items_per_load();

        if !force_reload && self.is_cached(load_number, items_per_load) {
            tracing::trace!("Page {page_number} served from cached load {load_number}");

            LOAD_CACHE_HIT_COUNTER.add(1, &[]);

            return Ok(location);
        }

        tracing::debug!(
            "Fetching load {} ({} items per load, last load: {})",
            load_number,
            items_per_load,
            location.is_last_load()
        );

        LOAD_FETCH_COUNTER.add(1, &[]);

        let items = match data_source
            .get_load(load_number, items_per_load, location.is_last_load())
            .await
        {
            Ok(items) => items,
            Err(err) => {
                tracing::error!("Failed to fetch load {load_number}: {err:#}");

                LOAD_FETCH_ERROR_COUNTER.add(1, &[]);

                return Err(PaginationError::DataSource {
                    load_number,
                    source: err,
                });
            }
        };

        tracing::trace!("Load {} returned {} items", load_number, items.len());

        self.chunk = Some(LoadedChunk::new(load_number, items_per_load, items));

        Ok(location)
    }

    pub fn slice(&self, location: &PageLocation) -> &[T] {
        let Some(chunk) = &self.chunk else {
            return &[];
        };
        if chunk.load_number != location.load_number() {
            return &[];
        }

        // Clamp to what the data source actually returned
        let range = location.item_range();
        let end = range.end.min(chunk.items.len());
        let start = range.start.min(end);

        &chunk.items[start..end]
    }
}
