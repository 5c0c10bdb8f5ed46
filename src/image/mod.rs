pub mod grid;
pub mod io;
pub mod rgba;
pub mod traits;

pub use self::grid::VisitedGrid;
pub use self::rgba::RgbaImage8;
pub use self::traits::{ImageView, Rows};
