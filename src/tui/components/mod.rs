// Preview panels
//
// The two section panels implement the trait contracts directly on the
// section views; the bars are plain render functions over `App`.

pub mod jobs_panel;
pub mod projects_panel;
pub mod status_bar;
pub mod text;
pub mod title_bar;
