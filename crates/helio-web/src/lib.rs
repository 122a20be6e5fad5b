pub mod dom;
pub mod raf;
pub mod runner;

pub use raf::RafDriver;
pub use runner::AppRunner;

// Re-exported so the macro expansion can name them via $crate.
pub use helio_engine::systems::starfield::STAR_POINT_SIZE;
pub use helio_engine::InputEvent;

/// Generate all `#[wasm_bindgen]` exports for an application.
///
/// Expands to:
/// - `thread_local!` storage for the AppRunner
/// - a `with_runner()` helper usable from anywhere in the calling crate
/// - the wasm-bindgen exports (init, tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use helio_web::AppRunner;
///
/// mod game;
/// use game::MyApp;
///
/// helio_web::export_app!(MyApp, "my-app");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The struct implementing `helio_engine::Game`
/// - `$app_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::AppRunner<$app_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::AppRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("App not initialized. Call app_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn app_init(viewport_width: f32, viewport_height: f32) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = <$app_type>::new();
            let runner = $crate::AppRunner::new(app);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init(viewport_width, viewport_height));
            log::info!("{}: initialized", $app_name);
        }

        #[wasm_bindgen]
        pub fn app_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn app_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_click(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::InputEvent::Click { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input($crate::InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn app_load_catalog(json: &str) {
            with_runner(|r| r.load_catalog(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_sphere_instances_ptr() -> *const f32 {
            with_runner(|r| r.sphere_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_instance_count() -> u32 {
            with_runner(|r| r.sphere_instance_count())
        }

        #[wasm_bindgen]
        pub fn get_star_positions_ptr() -> *const f32 {
            with_runner(|r| r.star_positions_ptr())
        }

        #[wasm_bindgen]
        pub fn get_star_count() -> u32 {
            with_runner(|r| r.star_count())
        }

        #[wasm_bindgen]
        pub fn get_star_point_size() -> f32 {
            $crate::STAR_POINT_SIZE
        }

        #[wasm_bindgen]
        pub fn get_camera_uniform_ptr() -> *const f32 {
            with_runner(|r| r.camera_uniform_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_uniform_ptr() -> *const f32 {
            with_runner(|r| r.light_uniform_ptr())
        }

        #[wasm_bindgen]
        pub fn get_ui_events_ptr() -> *const f32 {
            with_runner(|r| r.ui_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_ui_event_count() -> u32 {
            with_runner(|r| r.ui_event_count())
        }

        #[wasm_bindgen]
        pub fn get_frame_counter() -> u32 {
            with_runner(|r| r.frame_counter())
        }

        #[wasm_bindgen]
        pub fn get_viewport_width() -> f32 {
            with_runner(|r| r.viewport_width())
        }

        #[wasm_bindgen]
        pub fn get_viewport_height() -> f32 {
            with_runner(|r| r.viewport_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_spheres() -> u32 {
            with_runner(|r| r.max_spheres())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
