pub mod charts;
pub mod input_form;
pub mod results;
