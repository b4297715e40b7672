// Library exports for gridplot

pub mod compose;
pub mod parser;
pub mod setting;
pub mod settings;

pub use compose::{compose, configure};
pub use setting::{
    caption, from_fn, height, lower, offset, upper, width, PlotOption, Setting, SettingFn,
};
pub use settings::PlotSettings;
