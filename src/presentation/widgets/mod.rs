mod button;
mod checkerboard;
mod focus;
mod input;

pub use button::Button;
pub use checkerboard::{BufferSurface, Checkerboard, DEFAULT_VERTICAL_SCALE};
pub use focus::FocusRing;
pub use input::TextInput;
