//! Dino Jump entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

    use dino_jump::consts::*;
    use dino_jump::sim::{GamePhase, GameState, InputState, step};

    /// Game instance holding all state and its DOM projection
    struct Game {
        state: GameState,
        input: InputState,
        accumulator: f32,
        last_time: f64,
        playfield: Element,
        player_node: Element,
        platform_nodes: Vec<Element>,
    }

    impl Game {
        fn new(seed: u64, playfield: Element, player_node: Element) -> Self {
            Self {
                state: GameState::new(seed),
                input: InputState::default(),
                accumulator: 0.0,
                last_time: 0.0,
                playfield,
                player_node,
                platform_nodes: Vec::new(),
            }
        }

        /// Drain fixed-size simulation ticks from the frame's elapsed time.
        /// Outside Playing the accumulator is cleared instead, so leaving
        /// the phase stops simulation work entirely.
        fn update(&mut self, dt: f32) {
            if self.state.phase != GamePhase::Playing {
                self.accumulator = 0.0;
                return;
            }

            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                self.state = step(&self.state, &self.input);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Project the current snapshot into the DOM. Pure presentation:
        /// positioned nodes for player and platforms, text for the score,
        /// class toggles for the phase overlays.
        fn render(&mut self, document: &Document) {
            let player = &self.state.player;
            let _ = self.player_node.set_attribute(
                "style",
                &format!(
                    "left:{:.1}px;top:{:.1}px;width:{}px;height:{}px",
                    player.pos.x, player.pos.y, PLAYER_SIZE, PLAYER_SIZE
                ),
            );

            // One reused node per surviving platform
            while self.platform_nodes.len() < self.state.platforms.len() {
                if let Ok(node) = document.create_element("div") {
                    let _ = self.playfield.append_child(&node);
                    self.platform_nodes.push(node);
                }
            }
            while self.platform_nodes.len() > self.state.platforms.len() {
                if let Some(node) = self.platform_nodes.pop() {
                    node.remove();
                }
            }
            for (node, platform) in self.platform_nodes.iter().zip(&self.state.platforms) {
                let class = if platform.is_ground {
                    "platform ground"
                } else if platform.active {
                    "platform"
                } else {
                    "platform used"
                };
                let _ = node.set_attribute("class", class);
                let _ = node.set_attribute(
                    "style",
                    &format!(
                        "left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{}px",
                        platform.x, platform.y, platform.width, PLATFORM_HEIGHT
                    ),
                );
            }

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            // Phase overlays
            if let Some(el) = document.get_element_by_id("start-overlay") {
                let class = if self.state.phase == GamePhase::NotStarted {
                    "overlay"
                } else {
                    "overlay hidden"
                };
                let _ = el.set_attribute("class", class);
            }
            if let Some(el) = document.get_element_by_id("game-over-overlay") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "overlay");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                    if let Some(high_el) = document.get_element_by_id("high-score") {
                        high_el.set_text_content(Some(&self.state.high_score.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "overlay hidden");
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dino Jump starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let playfield = document
            .get_element_by_id("playfield")
            .expect("no playfield element");
        let player_node = document
            .get_element_by_id("player")
            .expect("no player element");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, playfield, player_node)));

        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone());
        setup_buttons(game.clone());

        request_animation_frame(game);

        log::info!("Dino Jump running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down: held directions plus the edge-triggered confirm
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.press_left(),
                    "ArrowRight" => g.input.press_right(),
                    " " => g.state.confirm(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: release held directions
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.release_left(),
                    "ArrowRight" => g.input.release_right(),
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Start and retry buttons are the pointer form of the confirm edge.
    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        for id in ["start-btn", "retry-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().state.confirm();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);

            let document = web_sys::window()
                .and_then(|w| w.document())
                .expect("no document");
            g.render(&document);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_jump::consts::SIM_DT;
    use dino_jump::sim::{GamePhase, GameState, InputState, step};

    env_logger::init();
    log::info!("Dino Jump (native) starting...");
    log::info!("Native mode is a headless demo - build for wasm32 for the playable version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    // Run one unattended life and report the outcome
    let mut state = GameState::new(seed);
    state.start();
    let input = InputState::default();

    let mut ticks = 0u32;
    while state.phase == GamePhase::Playing && ticks < 60 * 60 {
        state = step(&state, &input);
        ticks += 1;
    }

    println!(
        "seed {}: life ended after {:.1}s ({} ticks), score {} (high score {})",
        seed,
        ticks as f32 * SIM_DT,
        ticks,
        state.score,
        state.high_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
