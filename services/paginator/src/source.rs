use anyhow::Result;
use futures::Future;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// The dataset behind a paginator.
///
/// `get_load` must return exactly `items_per_load` items unless `is_last_load` is true, in which
/// case it must return the remaining `data_total - (load_number - 1) * items_per_load` items. The
/// paginator slices pages out of whatever comes back without checking its length.
pub trait DataSource {
    type Item;

    /// Number of items in the entire dataset. Must stay accurate after anything that changes it,
    /// such as a new search.
    fn data_total(&self) -> usize;

    fn get_load(
        &self,
        load_number: usize,
        items_per_load: usize,
        is_last_load: bool,
    ) -> impl Future<Output = Result<Vec<Self::Item>>> + Send;
}

pub struct FnDataSource<F> {
    data_total: Arc<AtomicUsize>,
    get_load: F,
}

impl<F> FnDataSource<F> {
    pub fn new<Fut, T>(data_total: usize, get_load: F) -> Self
    where
        F: Fn(usize, usize, bool) -> Fut,
        Fut: Future<Output = Result<Vec<T>>> + Send,
    {
        Self::with_shared_total(Arc::new(AtomicUsize::new(data_total)), get_load)
    }

    pub fn with_shared_total<Fut, T>(data_total: Arc<AtomicUsize>, get_load: F) -> Self
    where
        F: Fn(usize, usize, bool) -> Fut,
        Fut: Future<Output = Result<Vec<T>>> + Send,
    {
        Self {
            data_total,
            get_load,
        }
    }

    pub fn set_data_total(&self, data_total: usize) {
        self.data_total.store(data_total, Ordering::Release);
    }

    pub fn shared_total(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.data_total)
    }
}

impl<F, Fut, T> DataSource for FnDataSource<F>
where
    F: Fn(usize, usize, bool) -> Fut,
    Fut: Future<Output = Result<Vec<T>>> + Send,
{
    type Item = T;

    fn data_total(&self) -> usize {
        self.data_total.load(Ordering::Acquire)
    }

    fn get_load(
        &self,
        load_number: usize,
        items_per_load: usize,
        is_last_load: bool,
    ) -> impl Future<Output = Result<Vec<T>>> + Send {
        (self.get_load)(load_number, items_per_load, is_last_load)
    }
}
