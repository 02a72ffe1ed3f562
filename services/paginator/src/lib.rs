//! Paginates a dataset too large to hold in memory, fetching it one load of pages at a time.

mod error;
mod info;
mod loader;
mod model;
mod paginator;
mod source;
mod translator;

pub use error::PaginationError;
pub use error::Result;
pub use info::load_info::LoadInfo;
pub use info::page_info::PageInfo;
pub use loader::LoadedChunk;
pub use loader::PageLoader;
pub use model::PageResponse;
pub use model::PaginatorConfig;
pub use model::PaginatorState;
pub use model::SetPageOptions;
pub use paginator::BigDatasetPaginator;
pub use source::DataSource;
pub use source::FnDataSource;
pub use translator::PageLocation;
pub use translator::Translator;

const LIBRARY_NAME: &str = env!("CARGO_PKG_NAME");
