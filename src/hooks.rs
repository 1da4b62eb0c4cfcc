use crate::cache::{cached_season, store_season};
use crate::source::fetch_season;
use log::{debug, warn};
use shot_chart::{SeasonTable, ShotChartError};
use std::rc::Rc;
use yew::prelude::*;

/// Load state of the currently selected season.
#[derive(Clone, Debug)]
pub enum SeasonState {
    Loading(u16),
    Ready(Rc<SeasonTable>),
    Failed(ShotChartError),
}

impl SeasonState {
    pub fn table(&self) -> Option<&Rc<SeasonTable>> {
        match self {
            SeasonState::Ready(table) => Some(table),
            _ => None,
        }
    }
}

// Tables are compared by identity; a season is only ever parsed once.
impl PartialEq for SeasonState {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SeasonState::Loading(a), SeasonState::Loading(b)) => a == b,
            (SeasonState::Ready(a), SeasonState::Ready(b)) => Rc::ptr_eq(a, b),
            (SeasonState::Failed(a), SeasonState::Failed(b)) => a == b,
            _ => false,
        }
    }
}

/// Custom hook that loads the shot log for `year` whenever it changes.
///
/// Seasons already downloaded come from the thread-local cache. A download
/// that finishes after the user has moved on to another year is dropped.
#[hook]
pub fn use_season_table(year: u16) -> SeasonState {
    let state = use_state(|| SeasonState::Loading(year));
    let requested_year = use_mut_ref(|| year);

    {
        let state = state.clone();
        let requested_year = requested_year.clone();
        use_effect_with(year, move |&year| {
            *requested_year.borrow_mut() = year;

            if let Some(table) = cached_season(year) {
                debug!("Season {} served from cache", year);
                state.set(SeasonState::Ready(table));
            } else {
                state.set(SeasonState::Loading(year));
                wasm_bindgen_futures::spawn_local(async move {
                    let result = fetch_season(year).await;
                    if *requested_year.borrow() != year {
                        debug!("Discarding season {} loaded after selection moved on", year);
                        return;
                    }
                    match result {
                        Ok(table) => {
                            let table = Rc::new(table);
                            store_season(table.clone());
                            state.set(SeasonState::Ready(table));
                        }
                        Err(err) => {
                            warn!("Loading season {} failed: {}", year, err);
                            state.set(SeasonState::Failed(err));
                        }
                    }
                });
            }
            || ()
        });
    }

    (*state).clone()
}
