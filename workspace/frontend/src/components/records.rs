mod transfer_panel;
mod view;

pub use view::AllRecords;
