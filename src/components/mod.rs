pub mod demographic_panel;
pub mod place_explorer;
pub mod review_chart;
pub mod review_form;
pub mod review_manager;
pub mod reviews_list;
