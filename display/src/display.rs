use sdl2::pixels::PixelFormatEnum;

use chipeit_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chipeit_core::state::FrameBuffer;

const SCALE: usize = 10;

/// Renders the interpreter's 64x32 monochrome framebuffer in an SDL2 window.
///
/// The core encodes pixels as 0/1 cells in a flat row-major grid; `render`
/// only gets called when the framebuffer actually changed.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Opens a window bound to an sdl2 context, scaled up from the native
    /// 64x32 resolution.
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "chipeit",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display { canvas })
    }

    /// Expands a framebuffer into an RGB24 texture payload: one byte per
    /// cell becomes three, and the 0/1 cell value becomes 0/255 intensity.
    fn frame_to_rgb24(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|cell| std::iter::repeat(cell * 255).take(3))
            .collect()
    }

    /// Uploads the framebuffer as an RGB24 texture and presents it.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Display::frame_to_rgb24(frame));
            })
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
