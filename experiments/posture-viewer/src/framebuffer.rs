use kinect_base::Vec2;
use kinect_posture::{Canvas, Color};

/// Packed `0x00RRGGBB` pixel buffer as `minifb` displays it.
///
/// Canvas coordinates have their origin at the bottom-left corner, like the
/// posture views; rows are stored top to bottom.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::WHITE.to_u32(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_u32());
    }

    /// Pixel at column `x`, row `y` counted from the top.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }
}

impl Canvas for FrameBuffer {
    fn fill_circle(&mut self, center: Vec2<f32>, radius: f32, color: Color) {
        if self.width == 0 || self.height == 0 || radius <= 0.0 {
            return;
        }
        let value = color.to_u32();
        let r2 = radius * radius;

        // Clip the bounding square to the buffer
        let min_x = (center.x - radius).floor().max(0.0) as usize;
        let max_x = ((center.x + radius).ceil().max(0.0) as usize).min(self.width - 1);
        let min_y = (center.y - radius).floor().max(0.0) as usize;
        let max_y = ((center.y + radius).ceil().max(0.0) as usize).min(self.height - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    let row = self.height - 1 - y;
                    self.pixels[row * self.width + x] = value;
                }
            }
        }
    }
}
