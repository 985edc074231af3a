pub mod icons;
pub mod output;
pub mod theme;

pub use icons::Icons;
pub use output::{comment, error, file_header, location, section, summary_row, warn};
pub use theme::{theme, Theme};
