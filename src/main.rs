//! Node Fall entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

    use node_fall::render::{ScoreSink, Surface};
    use node_fall::{Command, GameConfig, LoopControl, Session};

    /// Browser canvas as a drawing surface
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
        sprite: HtmlImageElement,
    }

    impl Surface for CanvasSurface {
        fn clear(&mut self, width: f32, height: f32) {
            self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        }

        fn line(&mut self, from: Vec2, to: Vec2) {
            self.ctx.begin_path();
            self.ctx.move_to(from.x as f64, from.y as f64);
            self.ctx.line_to(to.x as f64, to.y as f64);
            self.ctx.stroke();
        }

        fn circle(&mut self, center: Vec2, radius: f32, fill: &str) {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.set_fill_style_str(fill);
            self.ctx.fill();
            self.ctx.stroke();
        }

        fn image(&mut self, offset: Vec2) {
            let _ = self.ctx.draw_image_with_html_image_element(
                &self.sprite,
                offset.x as f64,
                offset.y as f64,
            );
        }

        fn save(&mut self) {
            self.ctx.save();
        }

        fn restore(&mut self) {
            self.ctx.restore();
        }

        fn translate(&mut self, by: Vec2) {
            let _ = self.ctx.translate(by.x as f64, by.y as f64);
        }

        fn rotate(&mut self, radians: f32) {
            let _ = self.ctx.rotate(radians as f64);
        }
    }

    /// Score element in the page
    struct DomScore {
        element: Option<web_sys::Element>,
    }

    impl ScoreSink for DomScore {
        fn display(&mut self, score: u64) {
            if let Some(el) = &self.element {
                el.set_text_content(Some(&score.to_string()));
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        surface: CanvasSurface,
        score: DomScore,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Node Fall starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::default();
        let size = config.canvas_size() as u32;
        canvas.set_width(size);
        canvas.set_height(size);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let sprite = HtmlImageElement::new().expect("Failed to create image");
        sprite.set_src("images/pc.png");

        let seed = js_sys::Date::now() as u64;
        let session = Session::new(config, seed).expect("Invalid game config");
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            surface: CanvasSurface { ctx, sprite },
            score: DomScore {
                element: document.get_element_by_id("score"),
            },
        }));

        setup_input_handlers(game.clone());
        setup_pause_button(game.clone());

        let control = game.borrow_mut().session.start();
        if control == LoopControl::Schedule {
            request_animation_frame(game);
        }

        log::info!("Node Fall running!");
    }

    fn dispatch(game: &Rc<RefCell<Game>>, command: Command) {
        let control = game.borrow_mut().session.handle(command);
        if control == LoopControl::Schedule {
            request_animation_frame(game.clone());
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if let Some(command) = Command::from_key_code(event.key_code()) {
                dispatch(&game, command);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_pause_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("pauseBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                dispatch(&game, Command::TogglePause);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let control = {
            let mut g = game.borrow_mut();
            let Game {
                session,
                surface,
                score,
            } = &mut *g;
            session.frame(surface, score)
        };

        if control == LoopControl::Schedule {
            request_animation_frame(game);
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
    use node_fall::render::{LogScoreSink, NullSurface};
    use node_fall::{Command, GameConfig, Session};

    env_logger::init();
    log::info!("Node Fall (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut session = match Session::new(config, 0x5eed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    // Scripted run: weave across the field for a while
    let mut sink = LogScoreSink::default();
    let script = [Command::MoveRight, Command::MoveLeft];
    session.start();
    for frame in 0..20_000u32 {
        if frame % 1_500 == 0 {
            session.handle(script[(frame / 1_500) as usize % script.len()]);
        }
        session.frame(&mut NullSurface, &mut sink);
    }

    let state = session.state();
    println!(
        "Ran {} ticks: score {}, goal {}/{}",
        state.time_ticks,
        state.score(),
        state.goal().next,
        state.goal().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
