mod fill_surface;

pub use fill_surface::FillSurface;
