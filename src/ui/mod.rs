pub mod app;
pub mod code_view;
pub mod help;
pub mod input;
pub mod option_list;
pub mod palette;
pub mod step_indicator;

pub use app::{App, BrandingField};
pub use code_view::{CodeBlock, CodeView};
pub use help::HelpScreen;
pub use input::InputWidget;
pub use option_list::OptionGrid;
pub use palette::PalettePicker;
pub use step_indicator::StepIndicator;
