use wordtable_logging::{table_debug, table_warn};

use crate::state::Dataset;
use crate::{AppState, CounterDisplay, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.start() {
                state.mark_table_dirty();
                state.mark_counters_dirty();
                vec![Effect::FetchWords, Effect::FetchCounts]
            } else {
                Vec::new()
            }
        }
        Msg::SearchChanged(term) => {
            table_debug!("Search term changed to {:?}", term);
            state.table_mut().view_state_mut().set_search_term(term);
            state.mark_table_dirty();
            Vec::new()
        }
        Msg::PageSizeChanged(page_size) => {
            table_debug!("Page size changed to {}", page_size);
            state.table_mut().view_state_mut().set_page_size(page_size);
            state.mark_table_dirty();
            Vec::new()
        }
        Msg::HeaderActivated(key) => {
            let view = state.table_mut().view_state_mut();
            view.activate_sort_key(key);
            table_debug!(
                "Sorting by {} {:?}",
                view.sort().key,
                view.sort().direction
            );
            state.mark_table_dirty();
            Vec::new()
        }
        Msg::PageSelected(control) => {
            // Disabled controls and ellipses have no target.
            if let Some(page) = control.target() {
                if state.table_mut().view_state_mut().go_to_page(page) {
                    state.mark_table_dirty();
                }
            }
            Vec::new()
        }
        Msg::WordsLoaded(records) => {
            table_debug!("Loaded {} records", records.len());
            state.table_mut().set_dataset(Dataset::Ready(records));
            state.mark_table_dirty();
            Vec::new()
        }
        Msg::WordsFailed(message) => {
            table_warn!("Word list unavailable: {}", message);
            state.table_mut().set_dataset(Dataset::Failed(message));
            state.mark_table_dirty();
            Vec::new()
        }
        Msg::CountsLoaded(targets) => {
            let board = state.counters();
            let targets: Vec<_> = targets
                .into_iter()
                .filter(|(name, _)| board.contains(name))
                .collect();
            let animator = state.animator();
            let animations = animator.animate(targets);
            if animations.is_empty() {
                Vec::new()
            } else {
                vec![Effect::AnimateCounts {
                    animations,
                    interval: animator.tick_interval(),
                }]
            }
        }
        Msg::CountsFailed(message) => {
            table_warn!("Word counts unavailable: {}", message);
            state.counters_mut().fail_all();
            state.mark_counters_dirty();
            Vec::new()
        }
        Msg::CounterTick {
            name,
            value,
            finished,
        } => {
            let display = if finished {
                CounterDisplay::Done(value)
            } else {
                CounterDisplay::Counting(value)
            };
            if state.counters_mut().set(&name, display) {
                state.mark_counters_dirty();
            }
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}
