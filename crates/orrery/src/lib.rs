use wasm_bindgen::prelude::*;

mod bodies;
mod game;
mod orbit;
mod panel;

use game::Orrery;
use helio_web::RafDriver;

helio_web::export_app!(Orrery, "orrery");

thread_local! {
    static DRIVER: std::cell::RefCell<Option<RafDriver>> = std::cell::RefCell::new(None);
}

/// Boot the whole visualization: initialize the runner, mount the
/// control panel, and start the frame loop. The host page calls this
/// once after the module loads, passing its load-time viewport size.
#[wasm_bindgen]
pub fn orrery_start(viewport_width: f32, viewport_height: f32) {
    app_init(viewport_width, viewport_height);
    panel::mount();

    let driver = RafDriver::new();
    driver.start(|dt| {
        app_tick(dt);
        let events = with_runner(|r| r.events().to_vec());
        panel::sync(&events);
    });
    DRIVER.with(|cell| *cell.borrow_mut() = Some(driver));
}

/// Halt the frame loop. The scene stays in memory; the host renderer
/// simply stops receiving fresh frames.
#[wasm_bindgen]
pub fn orrery_stop() {
    DRIVER.with(|cell| {
        if let Some(driver) = cell.borrow().as_ref() {
            driver.stop();
        }
    });
}
