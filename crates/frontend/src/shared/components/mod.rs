pub mod charts;
pub mod kpi_card;
pub mod multi_select;
pub mod year_select;
