use raylib::prelude::*;

use crate::loader::ImageRef;

/// One displayable frame of the sequence: the uploaded texture plus the
/// reference it was fetched from.
pub struct Slide {
    texture: Texture2D,
    pub source: ImageRef,
}

impl Slide {
    pub fn new(texture: Texture2D, source: ImageRef) -> Self {
        Self { texture, source }
    }

    /// Draws the slide fitted inside `area`, centered, preserving the
    /// texture's aspect ratio.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        let dest = fit_within(tex_width, tex_height, area);

        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

/// Largest rectangle with the given aspect ratio centered inside `area`.
fn fit_within(width: f32, height: f32, area: Rectangle) -> Rectangle {
    let scale = (area.width / width).min(area.height / height);
    let scaled_width = width * scale;
    let scaled_height = height * scale;
    Rectangle::new(
        area.x + (area.width - scaled_width) * 0.5,
        area.y + (area.height - scaled_height) * 0.5,
        scaled_width,
        scaled_height,
    )
}
