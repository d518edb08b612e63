use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Timing for the carousel rotation.
#[derive(Clone, PartialEq)]
pub struct RotationConfig {
    pub interval_ms: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        // The page rotates hero images every four seconds.
        Self { interval_ms: 4_000 }
    }
}

struct ActiveIndex(usize);

impl Reducible for ActiveIndex {
    type Action = usize;

    fn reduce(self: Rc<Self>, slide_count: usize) -> Rc<Self> {
        Rc::new(ActiveIndex((self.0 + 1) % slide_count))
    }
}

/// Cycles an index through `0..slide_count` on a fixed interval, wrapping
/// at the end. With zero or one slides the index stays at 0 and no timer
/// runs. The timer stops when the component unmounts.
#[hook]
pub fn use_rotating_index(slide_count: usize, config: RotationConfig) -> usize {
    let index = use_reducer(|| ActiveIndex(0));

    {
        let dispatcher = index.dispatcher();
        use_effect_with(
            (slide_count, config.interval_ms),
            move |(slide_count, interval_ms)| {
                let slide_count = *slide_count;
                let interval_ms = *interval_ms;
                let cancelled = Rc::new(Cell::new(false));
                if slide_count > 1 {
                    let cancelled = cancelled.clone();
                    spawn_local(async move {
                        loop {
                            TimeoutFuture::new(interval_ms).await;
                            if cancelled.get() {
                                break;
                            }
                            dispatcher.dispatch(slide_count);
                        }
                    });
                }
                move || cancelled.set(true)
            },
        );
    }

    index.0
}
