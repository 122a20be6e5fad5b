//! Control panel wiring: sliders, pause/theme buttons, tooltip, and
//! pointer listeners. Every callback feeds the input queue through the
//! generated exports; DOM effects flow back through `sync` from the UI
//! events emitted by the simulation.
//!
//! The host page supplies the consumed elements and the initial dark
//! styling; this module only mutates them in response to events.

use std::cell::RefCell;

use helio_engine::UiEvent;
use helio_web::dom::{self, Tooltip};

use crate::bodies;
use crate::game;

const CONTROLS_ID: &str = "controls";
const PAUSE_BUTTON_ID: &str = "toggleAnimation";
const THEME_BUTTON_ID: &str = "themeToggle";

const LABEL_PAUSE: &str = "⏸ Pause Animation";
const LABEL_RESUME: &str = "▶ Resume Animation";

thread_local! {
    static TOOLTIP: RefCell<Option<Tooltip>> = RefCell::new(None);
}

/// Build the panel and attach every listener. Called once at startup.
pub fn mount() {
    let controls = dom::element(CONTROLS_ID);
    for (i, name) in bodies::PLANET_NAMES.iter().enumerate() {
        let label = format!("{name} Speed: ");
        dom::append_speed_slider(
            &controls,
            &label,
            bodies::SPEED_MIN,
            bodies::SPEED_MAX,
            bodies::SPEED_STEP,
            bodies::initial_speed(i),
            Box::new(move |value| {
                crate::app_custom_event(game::CUSTOM_SET_SPEED, i as f32, value, 0.0)
            }),
        );
    }

    dom::on_click(
        PAUSE_BUTTON_ID,
        Box::new(|| crate::app_custom_event(game::CUSTOM_TOGGLE_PAUSE, 0.0, 0.0, 0.0)),
    );
    dom::on_click(
        THEME_BUTTON_ID,
        Box::new(|| crate::app_custom_event(game::CUSTOM_TOGGLE_THEME, 0.0, 0.0, 0.0)),
    );

    dom::on_pointer_move_ndc(Box::new(crate::app_pointer_move));
    dom::on_click_ndc(Box::new(crate::app_click));

    TOOLTIP.with(|cell| *cell.borrow_mut() = Some(Tooltip::mount()));
}

/// Apply the UI events emitted by the most recent tick to the DOM.
pub fn sync(events: &[UiEvent]) {
    for event in events {
        if event.kind == game::EVENT_HOVER {
            let index = event.a as i32;
            TOOLTIP.with(|cell| {
                if let Some(tooltip) = cell.borrow().as_ref() {
                    if (0..bodies::PLANET_COUNT as i32).contains(&index) {
                        tooltip.show(bodies::PLANET_NAMES[index as usize]);
                    } else {
                        tooltip.hide();
                    }
                }
            });
        } else if event.kind == game::EVENT_PAUSE {
            let paused = event.a > 0.5;
            dom::set_label(PAUSE_BUTTON_ID, if paused { LABEL_RESUME } else { LABEL_PAUSE });
        } else if event.kind == game::EVENT_THEME {
            dom::apply_theme(event.a > 0.5);
        }
    }
}
