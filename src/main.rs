//! Skyfire entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use skyfire::Tuning;
    use skyfire::driver::run_frame;
    use skyfire::platform::canvas::CanvasSurface;
    use skyfire::platform::command_for_key;
    use skyfire::sim::{SimState, apply_command};

    /// Game instance holding all state
    struct Game {
        state: SimState,
        surface: CanvasSurface,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Skyfire starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::default();
        canvas.set_width(tuning.surface_width as u32);
        canvas.set_height(tuning.surface_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: SimState::new(tuning, seed),
            surface: CanvasSurface::new(ctx),
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());

        // First frame runs at t=0, later ones get requestAnimationFrame timestamps
        game_loop(game, 0.0);

        log::info!("Skyfire running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if let Some(command) = command_for_key(&event.key()) {
                event.prevent_default();
                let mut g = game.borrow_mut();
                apply_command(&mut g.state, command);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();
            let Game { state, surface } = &mut *g;
            run_frame(state, surface, time)
        };

        if keep_going {
            request_animation_frame(game);
        } else {
            log::info!("Skyfire stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use skyfire::Tuning;
    use skyfire::driver::{HeadlessClock, run_headless};
    use skyfire::sim::{Command, Direction, SimState, apply_command};

    env_logger::init();
    log::info!("Skyfire (native) starting...");
    log::info!("Native mode runs a scripted headless session - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::load_from_file(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Failed to load tuning from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let mut state = SimState::new(tuning, seed);
    let mut surface = TallySurface::default();
    let mut clock = HeadlessClock::default();

    // One minute at ~60 Hz: sweep the avatar across the surface, firing as it goes
    let summary = run_headless(&mut state, &mut surface, &mut clock, 3750, |frame, s| {
        let dir = if (frame / 100) % 2 == 0 {
            Direction::Left
        } else {
            Direction::Right
        };
        if frame % 2 == 0 {
            apply_command(s, Command::Move(dir));
        }
        if frame % 8 == 0 {
            apply_command(s, Command::Fire);
        }
    });

    log::info!(
        "Ran {} frames: {} hostiles spawned, {} destroyed, {} departed, {} still live",
        summary.frames,
        summary.spawned,
        summary.destroyed,
        summary.departed,
        state.hostiles.len()
    );
    log::info!("{} rectangles drawn", surface.fills);
    state.stop();
}

/// Headless surface that only counts draw calls
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
struct TallySurface {
    fills: usize,
}

#[cfg(not(target_arch = "wasm32"))]
impl skyfire::Surface for TallySurface {
    fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}

    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: skyfire::Color) {
        self.fills += 1;
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
