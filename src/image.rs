mod load;
mod save;
mod transparency;

pub use load::decode_image_from_path;
pub use save::save_png;
pub use transparency::clear_light_background;
