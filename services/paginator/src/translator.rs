use crate::error::Result;
use crate::info::load_info::LoadInfo;
use crate::info::page_info::PageInfo;
use std::ops::Range;

// Where a page lives inside its load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLocation {
    page_number: usize,
    load_number: usize,
    is_last_load: bool,
    offset_within_load: usize,
    page_item_count: usize,
    first_item_index: usize,
}

impl PageLocation {
    pub const fn page_number(&self) -> usize {
        self.page_number
    }

    pub const fn load_number(&self) -> usize {
        self.load_number
    }

    pub const fn is_last_load(&self) -> bool {
        self.is_last_load
    }

    // 0-indexed page slot inside the load
    pub const fn offset_within_load(&self) -> usize {
        self.offset_within_load
    }

    pub const fn page_item_count(&self) -> usize {
        self.page_item_count
    }

    pub const fn item_range(&self) -> Range<usize> {
        self.first_item_index..self.first_item_index + self.page_item_count
    }
}

pub struct Translator<'a> {
    page_info: &'a PageInfo,
    load_info: &'a LoadInfo,
}

impl<'a> Translator<'a> {
    pub const fn new(page_info: &'a PageInfo, load_info: &'a LoadInfo) -> Self {
        Self {
            page_info,
            load_info,
        }
    }

    pub const fn items_per_load(&self) -> usize {
        self.load_info.items_per_load()
    }

    pub fn locate(&self, page_number: usize) -> Result<PageLocation> {
        let page_number = self.page_info.validate_page_number(page_number)?;

        let items_per_page = self.page_info.items_per_page();
        let load_number = self.load_info.load_containing(page_number, self.page_info);
        let offset_within_load = (page_number - 1) % self.load_info.pages_per_load(self.page_info);

        let page_item_count = if page_number == self.page_info.total_pages() {
            self.page_info.last_page_item_count()
        } else {
            items_per_page
        };

        Ok(PageLocation {
            page_number,
            load_number,
            is_last_load: self.load_info.is_last_load(load_number, self.page_info),
            offset_within_load,
            page_item_count,
            first_item_index: offset_within_load * items_per_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaginationError;

    fn configure(
        data_total: usize,
        items_per_page: usize,
        items_per_load: usize,
    ) -> (PageInfo, LoadInfo) {
        let mut page_info = PageInfo::new(data_total);
        page_info.set_items_per_page(items_per_page).unwrap();
        let mut load_info = LoadInfo::new(&page_info);
        load_info.set_items_per_load(items_per_load, &page_info).unwrap();

        (page_info, load_info)
    }

    #[test]
    fn locates_short_final_page_in_last_load() {
        let (page_info, load_info) = configure(73, 11, 22);
        let location = Translator::new(&page_info, &load_info).locate(7).unwrap();

        assert_eq!(location.load_number(), 4);
        assert!(location.is_last_load());
        assert_eq!(location.offset_within_load(), 0);
        assert_eq!(location.page_item_count(), 7);
        assert_eq!(location.item_range(), 0..7);
    }

    #[test]
    fn locates_second_page_slot_of_a_load() {
        let (page_info, load_info) = configure(73, 11, 22);
        let location = Translator::new(&page_info, &load_info).locate(6).unwrap();

        assert_eq!(location.load_number(), 3);
        assert!(!location.is_last_load());
        assert_eq!(location.offset_within_load(), 1);
        assert_eq!(location.item_range(), 11..22);
    }

    #[test]
    fn single_load_covers_every_page_when_load_exceeds_dataset() {
        let (page_info, load_info) = configure(103, 11, 198);
        let translator = Translator::new(&page_info, &load_info);

        for page_number in 1..=page_info.total_pages() {
            let location = translator.locate(page_number).unwrap();
            assert_eq!(location.load_number(), 1);
            assert!(location.is_last_load());
        }

        let last = translator.locate(10).unwrap();
        assert_eq!(last.item_range(), 99..103);
    }

    #[test]
    fn evenly_divided_final_page_is_full() {
        let (page_info, load_info) = configure(50, 25, 25);
        let location = Translator::new(&page_info, &load_info).locate(2).unwrap();

        assert_eq!(location.page_item_count(), 25);
        assert_eq!(location.load_number(), 2);
        assert!(location.is_last_load());
    }

    #[test]
    fn pages_outside_the_dataset_are_rejected() {
        let (page_info, load_info) = configure(10, 2, 4);
        let translator = Translator::new(&page_info, &load_info);

        assert!(matches!(
            translator.locate(0),
            Err(PaginationError::InvalidArgument { .. })
        ));
        assert!(matches!(
            translator.locate(6),
            Err(PaginationError::OutOfRange {
                page_number: 6,
                total_pages: 5
            })
        ));
        assert!(translator.locate(5).is_ok());
    }
}
