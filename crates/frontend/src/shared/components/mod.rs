pub mod bar_chart;
pub mod filter_bar;
pub mod page_header;
pub mod stat_card;
