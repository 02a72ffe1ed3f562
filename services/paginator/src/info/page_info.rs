use crate::error::PaginationError;
use crate::error::Result;
use crate::error::positive_integer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    items_per_page: usize,
    current_page_number: Option<usize>,
    data_total: usize,
}

impl PageInfo {
    pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

    pub const fn new(data_total: usize) -> Self {
        Self {
            items_per_page: Self::DEFAULT_ITEMS_PER_PAGE,
            current_page_number: None,
            data_total,
        }
    }

    pub const fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub const fn current_page_number(&self) -> Option<usize> {
        self.current_page_number
    }

    pub const fn data_total(&self) -> usize {
        self.data_total
    }

    pub(crate) const fn sync_data_total(&mut self, data_total: usize) {
        self.data_total = data_total;
    }

    pub(crate) const fn with_data_total(mut self, data_total: usize) -> Self {
        self.data_total = data_total;
        self
    }

    pub fn set_items_per_page<N>(&mut self, items_per_page: N) -> Result<()>
    where
        N: TryInto<usize> + Copy + std::fmt::Display,
    {
        self.items_per_page = positive_integer("items per page", items_per_page)?;

        tracing::debug!("Items per page set to {}", self.items_per_page);

        Ok(())
    }

    pub fn validate_page_number<N>(&self, page_number: N) -> Result<usize>
    where
        N: TryInto<usize> + Copy + std::fmt::Display,
    {
        let page_number = positive_integer("page number", page_number)?;
        let total_pages = self.total_pages();

        if page_number > total_pages {
            return Err(PaginationError::OutOfRange {
                page_number,
                total_pages,
            });
        }

        Ok(page_number)
    }

    pub fn set_current_page_number<N>(&mut self, page_number: N) -> Result<()>
    where
        N: TryInto<usize> + Copy + std::fmt::Display,
    {
        self.current_page_number = Some(self.validate_page_number(page_number)?);

        Ok(())
    }

    pub const fn total_pages(&self) -> usize {
        self.data_total.div_ceil(self.items_per_page)
    }

    pub const fn last_page_item_count(&self) -> usize {
        match self.data_total % self.items_per_page {
            0 => self.items_per_page,
            remainder => remainder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let expected_total_pages = [15, 10, 8, 6, 5, 5, 4, 4, 3, 3, 3, 3, 3, 2];

        let mut page_info = PageInfo::new(29);
        for (items_per_page, expected) in (2..=15).zip(expected_total_pages) {
            page_info.set_items_per_page(items_per_page).unwrap();
            assert_eq!(page_info.total_pages(), expected, "{items_per_page} per page");
        }
    }

    #[test]
    fn empty_dataset_has_no_pages() {
        let mut page_info = PageInfo::new(0);
        assert_eq!(page_info.total_pages(), 0);
        assert!(matches!(
            page_info.set_current_page_number(1),
            Err(PaginationError::OutOfRange {
                page_number: 1,
                total_pages: 0
            })
        ));
    }

    #[test]
    fn failed_setters_keep_previous_values() {
        let mut page_info = PageInfo::new(100);
        page_info.set_items_per_page(10).unwrap();
        page_info.set_current_page_number(4).unwrap();

        assert!(page_info.set_items_per_page(0).is_err());
        assert!(page_info.set_items_per_page(-1).is_err());
        assert!(page_info.set_current_page_number(0).is_err());
        assert!(page_info.set_current_page_number(-5).is_err());
        assert!(page_info.set_current_page_number(11).is_err());

        assert_eq!(page_info.items_per_page(), 10);
        assert_eq!(page_info.current_page_number(), Some(4));
    }

    #[test]
    fn last_page_item_count_handles_even_and_short_pages() {
        let mut page_info = PageInfo::new(77);
        page_info.set_items_per_page(25).unwrap();
        assert_eq!(page_info.last_page_item_count(), 2);

        page_info.sync_data_total(75);
        assert_eq!(page_info.last_page_item_count(), 25);
    }
}
