//! Thread-local cache of season tables that have already been fetched.
//!
//! Only the raw tables are kept, keyed by season year, so switching back to a
//! season does not download its shot log again. Series, frames and chart
//! specs are always recomputed.

use shot_chart::SeasonTable;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

thread_local! {
    /// Survives component lifetimes; thread-local since wasm runs one thread.
    pub static SEASON_STORE: RefCell<HashMap<u16, Rc<SeasonTable>>> =
        RefCell::new(HashMap::new());
}

pub fn cached_season(year: u16) -> Option<Rc<SeasonTable>> {
    SEASON_STORE.with(|c| c.borrow().get(&year).cloned())
}

pub fn store_season(table: Rc<SeasonTable>) {
    SEASON_STORE.with(|c| {
        c.borrow_mut().insert(table.year(), table);
    });
}
