//! Console host simulation for the transition engine.
//!
//! Drives one class-decorated element through show/hide cycles on a
//! simulated 60 Hz frame loop: the engine clock advances each frame, every
//! redraw request is answered with a render pass and a re-attach, and the
//! visibility flag flips once the element has been fully shown for the
//! configured hold time.

use anyhow::Result;
use segue_classes::{ClassSet, ClassTransition};
use segue_core::{Content, PhaseCallbacks, TransitionPhase};
use segue_config::SegueConfig;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Node = Rc<RefCell<ClassSet>>;

const FRAME_MS: f32 = 16.7;
const MAX_FRAMES: u32 = 10_000;

fn logging_callbacks() -> PhaseCallbacks<Node> {
    fn report(name: &'static str) -> impl FnMut(&mut Node) + 'static {
        move |node: &mut Node| log::info!("{name}: classes {:?}", node.borrow().names())
    }

    PhaseCallbacks::new()
        .on_enter(report("enter"))
        .on_entering(report("entering"))
        .on_entered(report("entered"))
        .on_exit(report("exit"))
        .on_exiting(report("exiting"))
        .on_exited(report("exited"))
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = SegueConfig::load();
    log::info!("transition config: {:?}", config.transition);

    let node: Node = Rc::default();
    let needs_render = Rc::new(Cell::new(false));
    let request_render = {
        let flag = needs_render.clone();
        move || flag.set(true)
    };

    let mut engine = ClassTransition::new(
        true,
        config.transition.timeout,
        &config.transition.class,
        logging_callbacks(),
        request_render,
    );
    if let Some(delay) = config.transition.frame_delay_ms {
        engine = engine.with_frame_delay(delay);
    }

    let content = Content::from_phase(|phase| format!("<panel {phase:?}>"));

    // Initial mount
    engine.attach(node.clone());

    let mut visible = true;
    let mut cycles_left = config.demo.cycles;
    let mut held_ms = 0.0;

    for _frame in 0..MAX_FRAMES {
        engine.advance(FRAME_MS);

        if needs_render.take() {
            match engine.render(&content) {
                Some(markup) => log::debug!("render: {markup}"),
                None => log::debug!("render: nothing"),
            }
            engine.attach(node.clone());
        }

        match engine.phase() {
            TransitionPhase::Entered if visible => {
                held_ms += FRAME_MS;
                if held_ms >= config.demo.hold_ms {
                    log::info!("hiding after {held_ms} ms");
                    visible = false;
                    held_ms = 0.0;
                    engine.before_visibility_change(false, true);
                    engine.attach(node.clone());
                }
            }
            TransitionPhase::Unmounted if !visible => {
                cycles_left = cycles_left.saturating_sub(1);
                if cycles_left == 0 {
                    break;
                }
                log::info!("showing again ({cycles_left} cycles left)");
                visible = true;
                engine.before_visibility_change(true, false);
                engine.attach(node.clone());
            }
            _ => {}
        }
    }

    engine.before_detach();
    log::info!("demo complete: {engine:?}");
    Ok(())
}
