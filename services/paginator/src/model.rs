// Configuration models

use crate::info::load_info::LoadInfo;
use crate::info::page_info::PageInfo;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PaginatorConfig {
    pub items_per_page: usize,
    pub items_per_load: usize,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            items_per_page: PageInfo::DEFAULT_ITEMS_PER_PAGE,
            items_per_load: LoadInfo::DEFAULT_ITEMS_PER_LOAD,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetPageOptions {
    pub reload: bool,
}

impl SetPageOptions {
    pub const fn reload() -> Self {
        Self { reload: true }
    }
}

// View models

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PaginatorState {
    current_page_number: Option<usize>,
    items_per_page: usize,
    items_per_load: usize,
    total_pages: usize,
    total_loads: usize,
    data_total: usize,
}

impl PaginatorState {
    pub const fn new(page_info: &PageInfo, load_info: &LoadInfo) -> Self {
        Self {
            current_page_number: page_info.current_page_number(),
            items_per_page: page_info.items_per_page(),
            items_per_load: load_info.items_per_load(),
            total_pages: page_info.total_pages(),
            total_loads: load_info.total_loads(page_info),
            data_total: page_info.data_total(),
        }
    }

    pub const fn current_page_number(&self) -> Option<usize> {
        self.current_page_number
    }

    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub const fn total_loads(&self) -> usize {
        self.total_loads
    }
}

#[derive(Debug, serde::Serialize)]
pub struct PageResponse<'a, T> {
    page: usize,
    size: usize,
    total: usize,
    items: &'a [T],
}

impl<'a, T> PageResponse<'a, T> {
    pub const fn new(page: usize, size: usize, total: usize, items: &'a [T]) -> Self {
        Self {
            page,
            size,
            total,
            items,
        }
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn items(&self) -> &'a [T] {
        self.items
    }
}
