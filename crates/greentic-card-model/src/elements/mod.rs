//! Concrete body element variants.

pub mod action_set;
pub mod background_image;
pub mod choice_set_input;
pub mod column_set;
pub mod container;
pub mod fact_set;
pub mod image;
pub mod image_set;
pub mod text_block;
pub mod text_input;
pub mod time_input;

pub use action_set::ActionSet;
pub use background_image::BackgroundImage;
pub use choice_set_input::{Choice, ChoiceSetInput};
pub use column_set::{Column, ColumnSet, ColumnWidth};
pub use container::Container;
pub use fact_set::{Fact, FactSet};
pub use image::Image;
pub use image_set::ImageSet;
pub use text_block::TextBlock;
pub use text_input::TextInput;
pub use time_input::TimeInput;
