#[derive(Debug, thiserror::Error)]
pub enum PaginationError {
    #[error("{name} must be a positive integer, got {value}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("page {page_number} is out of range, there are {total_pages} page(s)")]
    OutOfRange {
        page_number: usize,
        total_pages: usize,
    },

    #[error("items per load ({items_per_load}) cannot be less than items per page ({items_per_page})")]
    InvalidConfiguration {
        items_per_load: usize,
        items_per_page: usize,
    },

    #[error("data source failed to return load {load_number}")]
    DataSource {
        load_number: usize,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, PaginationError>;

pub(crate) fn positive_integer<N>(name: &'static str, value: N) -> Result<usize>
where
    N: TryInto<usize> + Copy + std::fmt::Display,
{
    match value.try_into() {
        Ok(converted) if converted > 0 => Ok(converted),
        _ => Err(PaginationError::InvalidArgument {
            name,
            value: value.to_string(),
        }),
    }
}
