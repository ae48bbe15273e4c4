use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use ledext::display::{HEIGHT, WIDTH};
use ledext::{
    AnimationStyle, Animator, Bitmap, Cells, DigitScale, DisplaySink, GridRenderer,
    InputDirection, PixelGrid, ScrollDirection, ThreadPause, MIN_GAP_MS,
};
use log::{error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use structopt::StructOpt;
use winit::{
    dpi::LogicalSize,
    event::{Event, VirtualKeyCode},
    event_loop::{ControlFlow, EventLoop, EventLoopProxy},
    window::WindowBuilder,
};
use winit_input_helper::WinitInputHelper;

const CELL_SIZE: u32 = 64;

#[derive(Debug, StructOpt)]
#[structopt(name = "ledext", about = "Animates a text bitmap on a 5x5 LED grid.")]
struct Opt {
    /// Bitmap file, one row per line
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    #[structopt(long, default_value = "right-to-left")]
    scroll: ScrollDirection,

    /// Read rows first-to-last or last-to-first
    #[structopt(long, default_value = "first-to-last")]
    read: InputDirection,

    #[structopt(long, default_value = "none")]
    style: AnimationStyle,

    /// Milliseconds between frames
    #[structopt(long, default_value = "200")]
    gap: u64,

    /// Digit brightness scale: linear or legacy
    #[structopt(long, default_value = "linear")]
    scale: DigitScale,

    /// Replay the animation until the window closes
    #[structopt(long)]
    repeat: bool,
}

/// Forwards every committed buffer to the window's event loop.
struct ProxySink {
    proxy: EventLoopProxy<Cells>,
    closed: bool,
}

impl DisplaySink for ProxySink {
    fn commit(&mut self, cells: &Cells) {
        if self.closed {
            return;
        }
        if self.proxy.send_event(*cells).is_err() {
            warn!("event loop closed, dropping frames");
            self.closed = true;
        }
    }
}

fn play(opt: Opt, bitmap: Bitmap, proxy: EventLoopProxy<Cells>) {
    let grid = PixelGrid::new(ProxySink {
        proxy,
        closed: false,
    });
    let mut animator = Animator::new(grid, ThreadPause).with_scale(opt.scale);
    animator.get_grid_mut().clear();

    loop {
        let drawn =
            animator.animate_frames(&bitmap, opt.scroll, opt.read, opt.style, opt.gap);
        info!("played {} frames", drawn);
        if !opt.repeat || drawn == 0 || animator.get_grid().sink().closed {
            break;
        }
        thread::sleep(Duration::from_millis(opt.gap.max(MIN_GAP_MS)));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let text = std::fs::read_to_string(&opt.input)
        .with_context(|| format!("failed to read bitmap {}", opt.input.display()))?;
    let bitmap: Bitmap = text.parse()?;
    info!(
        "loaded {} rows, {} frames from {}",
        bitmap.rows(),
        bitmap.frame_count(),
        opt.input.display()
    );

    let event_loop = EventLoop::<Cells>::with_user_event();
    let mut input = WinitInputHelper::new();
    let window = {
        let size = LogicalSize::new(WIDTH as u32 * CELL_SIZE, HEIGHT as u32 * CELL_SIZE);
        WindowBuilder::new()
            .with_title("LED grid")
            .with_inner_size(size)
            .with_min_inner_size(LogicalSize::new(WIDTH as u32, HEIGHT as u32))
            .build(&event_loop)
            .context("failed to create window")?
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(WIDTH as u32, HEIGHT as u32, surface_texture)
            .context("failed to create pixel surface")?
    };

    let proxy = event_loop.create_proxy();
    thread::spawn(move || play(opt, bitmap, proxy));

    let renderer = GridRenderer;
    let mut latest: Cells = [[0; WIDTH]; HEIGHT];

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match &event {
            Event::UserEvent(cells) => {
                latest = *cells;
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                renderer.draw(&latest, pixels.get_frame());
                if pixels
                    .render()
                    .map_err(|e| error!("pixels.render() failed: {}", e))
                    .is_err()
                {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }
            _ => {}
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
                window.request_redraw();
            }
        }
    })
}
