use crate::LIBRARY_NAME;
use crate::error::Result;
use crate::info::load_info::LoadInfo;
use crate::info::page_info::PageInfo;
use crate::loader::PageLoader;
use crate::model::PageResponse;
use crate::model::PaginatorConfig;
use crate::model::PaginatorState;
use crate::model::SetPageOptions;
use crate::source::DataSource;
use crate::translator::PageLocation;
use crate::translator::Translator;
use std::sync::LazyLock;

static PAGE_CHANGE_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(LIBRARY_NAME)
        .u64_counter("paginator_page_changes")
        .with_description("Number of successful page changes")
        .build()
});

static PAGE_REJECTED_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> =
    LazyLock::new(|| {
        opentelemetry::global::meter(LIBRARY_NAME)
            .u64_counter("paginator_page_rejections")
            .with_description("Number of page changes rejected by validation")
            .build()
    });

/// Page-oriented access to a dataset that is fetched from a [`DataSource`] one load at a time.
pub struct BigDatasetPaginator<S: DataSource> {
    data_source: S,
    page_info: PageInfo,
    load_info: LoadInfo,
    loader: PageLoader<S::Item>,
    current_location: Option<PageLocation>,
}

impl<S: DataSource> BigDatasetPaginator<S> {
    pub fn new(data_source: S) -> Self {
        tracing::debug!("Initializing the paginator");

        let page_info = PageInfo::new(data_source.data_total());
        let load_info = LoadInfo::new(&page_info);

        Self {
            data_source,
            page_info,
            load_info,
            loader: PageLoader::new(),
            current_location: None,
        }
    }

    pub fn with_config(data_source: S, config: &PaginatorConfig) -> Result<Self> {
        let mut paginator = Self::new(data_source);
        paginator.set_items_per_page(config.items_per_page)?;
        paginator.set_items_per_load(config.items_per_load)?;

        Ok(paginator)
    }

    pub const fn data_source(&self) -> &S {
        &self.data_source
    }

    pub const fn data_source_mut(&mut self) -> &mut S {
        &mut self.data_source
    }

    fn live_page_info(&self) -> PageInfo {
        self.page_info.with_data_total(self.data_source.data_total())
    }

    pub fn set_items_per_page<N>(&mut self, items_per_page: N) -> Result<()>
    where
        N: TryInto<usize> + Copy + std::fmt::Display,
    {
        self.page_info.set_items_per_page(items_per_page)?;
        self.load_info.reclamp(self.page_info.items_per_page());

        Ok(())
    }

    pub const fn items_per_page(&self) -> usize {
        self.page_info.items_per_page()
    }

    pub fn set_items_per_load<N>(&mut self, items_per_load: N) -> Result<()>
    where
        N: TryInto<usize> + Copy + std::fmt::Display,
    {
        self.load_info
            .set_items_per_load(items_per_load, &self.page_info)
    }

    pub const fn items_per_load(&self) -> usize {
        self.load_info.items_per_load()
    }

    pub fn total_pages(&self) -> usize {
        self.live_page_info().total_pages()
    }

    pub fn total_loads(&self) -> usize {
        self.load_info.total_loads(&self.live_page_info())
    }

    pub async fn set_current_page_number<N>(&mut self, page_number: N) -> Result<()>
    where
        N: TryInto<usize> + Copy + std::fmt::Display,
    {
        self.set_current_page_number_with(page_number, SetPageOptions::default())
            .await
    }

    /// On failure the previous page number, page items and cached load are kept.
    #[tracing::instrument(skip_all, fields(page_number = %page_number, reload = options.reload))]
    pub async fn set_current_page_number_with<N>(
        &mut self,
        page_number: N,
        options: SetPageOptions,
    ) -> Result<()>
    where
        N: TryInto<usize> + Copy + std::fmt::Display,
    {
        tracing::debug!("Setting the current page");

        self.page_info
            .sync_data_total(self.data_source.data_total());

        let page_number = match self.page_info.validate_page_number(page_number) {
            Ok(page_number) => page_number,
            Err(err) => {
                tracing::warn!("Rejected page change: {err}");

                PAGE_REJECTED_COUNTER.add(1, &[]);

                return Err(err);
            }
        };

        let translator = Translator::new(&self.page_info, &self.load_info);
        let location = self
            .loader
            .ensure_load_for(&self.data_source, &translator, page_number, options.reload)
            .await?;

        self.page_info.set_current_page_number(page_number)?;
        self.current_location = Some(location);

        PAGE_CHANGE_COUNTER.add(1, &[]);

        Ok(())
    }

    pub fn current_page(&self) -> &[S::Item] {
        match &self.current_location {
            Some(location) => self.loader.slice(location),
            None => &[],
        }
    }

    pub const fn current_page_number(&self) -> Option<usize> {
        self.page_info.current_page_number()
    }

    pub fn current_load_number(&self) -> Option<usize> {
        self.loader.chunk().map(|chunk| chunk.load_number())
    }

    pub fn state(&self) -> PaginatorState {
        PaginatorState::new(&self.live_page_info(), &self.load_info)
    }

    pub fn page_response(&self) -> PageResponse<'_, S::Item> {
        PageResponse::new(
            self.current_page_number().unwrap_or_default(),
            self.items_per_page(),
            self.data_source.data_total(),
            self.current_page(),
        )
    }
}
