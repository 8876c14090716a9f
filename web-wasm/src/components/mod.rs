//! UI components

pub mod header;
pub mod report_view;
pub mod spinner;
pub mod submission_form;
pub mod upload_area;
