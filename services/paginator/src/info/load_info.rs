use crate::error::PaginationError;
use crate::error::Result;
use crate::error::positive_integer;
use crate::info::page_info::PageInfo;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadInfo {
    items_per_load: usize,
}

impl LoadInfo {
    pub const DEFAULT_ITEMS_PER_LOAD: usize = 500;

    pub fn new(page_info: &PageInfo) -> Self {
        let mut load_info = Self {
            items_per_load: Self::DEFAULT_ITEMS_PER_LOAD,
        };
        load_info.reclamp(page_info.items_per_page());

        load_info
    }

    pub const fn items_per_load(&self) -> usize {
        self.items_per_load
    }

    // Rounded down to a multiple of the page size
    pub fn set_items_per_load<N>(&mut self, items_per_load: N, page_info: &PageInfo) -> Result<()>
    where
        N: TryInto<usize> + Copy + std::fmt::Display,
    {
        let requested = positive_integer("items per load", items_per_load)?;
        let items_per_page = page_info.items_per_page();

        if requested < items_per_page {
            return Err(PaginationError::InvalidConfiguration {
                items_per_load: requested,
                items_per_page,
            });
        }

        self.items_per_load = Self::round_down_to_multiple(requested, items_per_page);

        tracing::debug!(
            "Items per load set to {} (requested {})",
            self.items_per_load,
            requested
        );

        Ok(())
    }

    // Must run after every page size change
    pub(crate) fn reclamp(&mut self, items_per_page: usize) {
        let previous = self.items_per_load;
        self.items_per_load =
            Self::round_down_to_multiple(previous, items_per_page).max(items_per_page);

        if previous != self.items_per_load {
            tracing::debug!(
                "Items per load adjusted from {} to {} for {} items per page",
                previous,
                self.items_per_load,
                items_per_page
            );
        }
    }

    const fn round_down_to_multiple(value: usize, divisor: usize) -> usize {
        value / divisor * divisor
    }

    pub const fn pages_per_load(&self, page_info: &PageInfo) -> usize {
        self.items_per_load / page_info.items_per_page()
    }

    pub const fn total_loads(&self, page_info: &PageInfo) -> usize {
        page_info.data_total().div_ceil(self.items_per_load)
    }

    pub const fn load_containing(&self, page_number: usize, page_info: &PageInfo) -> usize {
        page_number.div_ceil(self.pages_per_load(page_info))
    }

    pub const fn is_last_load(&self, load_number: usize, page_info: &PageInfo) -> bool {
        load_number == self.total_loads(page_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_info(data_total: usize, items_per_page: usize) -> PageInfo {
        let mut page_info = PageInfo::new(data_total);
        page_info.set_items_per_page(items_per_page).unwrap();
        page_info
    }

    #[test]
    fn items_per_load_rounds_down_to_page_multiple() {
        let page_info = page_info(29, 2);
        let mut load_info = LoadInfo::new(&page_info);

        load_info.set_items_per_load(3, &page_info).unwrap();
        assert_eq!(load_info.items_per_load(), 2);

        load_info.set_items_per_load(23, &page_info).unwrap();
        assert_eq!(load_info.items_per_load(), 22);
    }

    #[test]
    fn items_per_load_below_page_size_is_rejected() {
        let page_info = page_info(29, 2);
        let mut load_info = LoadInfo::new(&page_info);
        load_info.set_items_per_load(10, &page_info).unwrap();

        assert!(matches!(
            load_info.set_items_per_load(1, &page_info),
            Err(PaginationError::InvalidConfiguration {
                items_per_load: 1,
                items_per_page: 2
            })
        ));
        assert!(matches!(
            load_info.set_items_per_load(0, &page_info),
            Err(PaginationError::InvalidArgument { .. })
        ));
        assert!(matches!(
            load_info.set_items_per_load(-1, &page_info),
            Err(PaginationError::InvalidArgument { .. })
        ));
        assert_eq!(load_info.items_per_load(), 10);
    }

    #[test]
    fn reclamp_follows_page_size_changes() {
        let mut page_info = page_info(103, 25);
        let mut load_info = LoadInfo::new(&page_info);
        load_info.set_items_per_load(200, &page_info).unwrap();

        page_info.set_items_per_page(11).unwrap();
        load_info.reclamp(page_info.items_per_page());
        assert_eq!(load_info.items_per_load(), 198);

        // A page larger than the load grows the load to exactly one page.
        page_info.set_items_per_page(250).unwrap();
        load_info.reclamp(page_info.items_per_page());
        assert_eq!(load_info.items_per_load(), 250);
    }

    #[test]
    fn load_geometry() {
        let page_info = page_info(73, 11);
        let mut load_info = LoadInfo::new(&page_info);
        load_info.set_items_per_load(22, &page_info).unwrap();

        assert_eq!(load_info.pages_per_load(&page_info), 2);
        assert_eq!(load_info.total_loads(&page_info), 4);
        assert_eq!(load_info.load_containing(1, &page_info), 1);
        assert_eq!(load_info.load_containing(6, &page_info), 3);
        assert_eq!(load_info.load_containing(7, &page_info), 4);
        assert!(load_info.is_last_load(4, &page_info));
        assert!(!load_info.is_last_load(3, &page_info));
    }
}
