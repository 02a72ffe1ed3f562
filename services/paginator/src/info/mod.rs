pub mod load_info;
pub mod page_info;
