//! Built-in widgets.
//!
//! Leaves: [`Text`], [`Button`], [`CheckBox`], [`RadioGroup`], [`Separator`],
//! [`Inputbox`]. Containers: [`List`], [`HorizontalBox`], [`Scroll`],
//! [`Frame`], [`CollapsingHeader`].

pub mod button;
pub mod checkbox;
pub mod collapsing;
pub mod frame;
pub mod hbox;
pub mod inputbox;
pub mod list;
pub mod radio;
pub mod scroll;
pub mod separator;
pub mod text;

pub use button::Button;
pub use checkbox::CheckBox;
pub use collapsing::CollapsingHeader;
pub use frame::Frame;
pub use hbox::HorizontalBox;
pub use inputbox::Inputbox;
pub use list::List;
pub use radio::RadioGroup;
pub use scroll::Scroll;
pub use separator::Separator;
pub use text::Text;
