use kinect_base::{log, Rect, Vec2};
use kinect_posture::{Color, Posture};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use posture_viewer::{load_postures, FrameBuffer, PostureSource, ViewerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    kinect_base::init_stdout_logger();

    let config = ViewerConfig::from_args(std::env::args().skip(1))?;
    let (width, height) = (config.width(), config.height());
    let bounds = Rect::new(Vec2::new(0, 0), Vec2::new(width as i32, height as i32));

    log::info!("Posture Viewer");
    log::info!("Source: {:?}", config.source());

    let mut postures = match config.source() {
        PostureSource::Random => vec![Posture::random(bounds)],
        PostureSource::File(path) => load_postures(path)?,
    };
    if postures.is_empty() {
        log::warn!("No postures to show");
        return Ok(());
    }

    for (i, posture) in postures.iter().enumerate() {
        log::debug!("posture {} `{}`: {}", i, posture.name(), posture);
    }
    for pair in postures.windows(2) {
        log::info!("distance `{}` -> `{}`: {:.3}", pair[0].name(), pair[1].name(), pair[0].distance(&pair[1]));
    }

    let mut window = Window::new(
        "Posture Viewer - SPACE next, ESC exit",
        width,
        height,
        WindowOptions::default(),
    )?;
    window.set_target_fps(config.fps());

    let mut buffer = FrameBuffer::new(width, height);
    let mut current = 0;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Space, KeyRepeat::No) {
            match config.source() {
                PostureSource::Random => {
                    let next = Posture::random(bounds);
                    log::info!("distance to previous: {:.3}", next.distance(&postures[0]));
                    postures[0] = next;
                }
                PostureSource::File(_) => current = (current + 1) % postures.len(),
            }
        }

        // Views double their nominal height, so lay out at half the window
        // height to land markers on their screen projection.
        let view = postures[current].to_view(width as f32, height as f32 / 2.0);
        buffer.clear(Color::WHITE);
        view.draw(&mut buffer);

        window.update_with_buffer(buffer.pixels(), buffer.width(), buffer.height())?;
    }

    log::info!("Exiting...");
    Ok(())
}
