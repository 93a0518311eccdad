pub mod charts;
pub mod commune_table;
pub mod layout;
pub mod map;
pub mod pagination;
pub mod province_detail;
pub mod province_select;
