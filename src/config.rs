pub const WINDOW_TITLE: &str = "Block Logo";

// Matches the 500x500 drawable the demo was authored against.
pub const WINDOW_WIDTH: u32 = 500;
pub const WINDOW_HEIGHT: u32 = 500;

/// Background the frame is cleared to before the single draw.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::WHITE;

/// DOM element the canvas is mounted under on the web build.
#[cfg(target_arch = "wasm32")]
pub const CANVAS_CONTAINER_ID: &str = "logo-canvas";
