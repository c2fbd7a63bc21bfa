//! Connection search query parameters.

use chrono::{NaiveDate, NaiveTime};

/// Path of the connection search form handler.
const SEARCH_PATH: &str = "pl/tp";

/// Weekday filter sent by the site's own search form (Mon..Sun, Polish).
const ALL_WEEKDAYS: &str = "Pn|Wt|%C5%9Ar|Cz|Pt|So|Nd";

/// Number of product sections and columns in the transport-mode grid.
const PRODUCT_GRID: usize = 4;

/// Empty `REQ0HafasAttrExc` slots the form submits.
const ATTR_EXC_SLOTS: usize = 12;

/// Options for a connection search.
///
/// The site's search form posts roughly forty parameters, most of them
/// fixed. This type carries the ones that mean something and renders the
/// full query string. The defaults reproduce what the form sends for a
/// forward search with every transport mode enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionQuery {
    /// Search forward from the given time (`false` searches by arrival).
    pub forward: bool,

    /// Transport-mode filters, indexed `[section][column]`.
    pub products: [[bool; PRODUCT_GRID]; PRODUCT_GRID],

    /// Minimum change time, in the site's `H:M` notation.
    pub change_time: String,

    /// Prefer cheaper connections.
    pub optimize_price: bool,

    /// Drop connections with long waits between trains.
    pub skip_long_changes: bool,

    /// Let the site include connections slightly outside the asked time.
    pub unsharp_search: bool,
}

impl ConnectionQuery {
    /// Create the default query: forward, all modes, `0:1` change time.
    pub fn new() -> Self {
        Self {
            forward: true,
            products: [[true; PRODUCT_GRID]; PRODUCT_GRID],
            change_time: "0:1".to_string(),
            optimize_price: true,
            skip_long_changes: false,
            unsharp_search: true,
        }
    }

    /// Set the search direction.
    pub fn with_forward(mut self, forward: bool) -> Self {
        self.forward = forward;
        self
    }

    /// Enable or disable one transport-mode filter.
    ///
    /// Out-of-range indices are ignored.
    pub fn with_product(mut self, section: usize, column: usize, enabled: bool) -> Self {
        if let Some(cell) = self
            .products
            .get_mut(section)
            .and_then(|row| row.get_mut(column))
        {
            *cell = enabled;
        }
        self
    }

    /// Set the minimum change time (`H:M`).
    pub fn with_change_time(mut self, change_time: impl Into<String>) -> Self {
        self.change_time = change_time.into();
        self
    }

    /// Set price optimisation.
    pub fn with_optimize_price(mut self, on: bool) -> Self {
        self.optimize_price = on;
        self
    }

    /// Set whether long changes are skipped.
    pub fn with_skip_long_changes(mut self, on: bool) -> Self {
        self.skip_long_changes = on;
        self
    }

    /// Set unsharp search.
    pub fn with_unsharp_search(mut self, on: bool) -> Self {
        self.unsharp_search = on;
        self
    }

    /// Render the query string (without the leading `?`).
    ///
    /// Station ids are inserted verbatim. Dates are `DD.MM.YY`, times `HH:MM`.
    pub fn to_query_string(
        &self,
        from_id: &str,
        to_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> String {
        let date = date.format("%d.%m.%y").to_string();
        let time = time.format("%H:%M").to_string();
        let flag = |on: bool| if on { "1" } else { "0" };
        let yes_no = |on: bool| if on { "yes" } else { "no" };

        let mut params: Vec<(String, String)> = Vec::with_capacity(64);
        let mut push = |key: &str, value: &str| params.push((key.to_string(), value.to_string()));

        push("queryPageDisplayed", "yes");
        push("REQ0JourneyStopsS0A", "1");
        push("REQ0JourneyStopsS0G", from_id);
        push("REQ0JourneyStopsS0ID", "");
        for stop in 1..=2 {
            push(&format!("REQ0JourneyStops{stop}.0G"), "");
            push(&format!("REQ0JourneyStopover{stop}"), "");
        }
        push("REQ0JourneyStopsZ0A", "1");
        push("REQ0JourneyStopsZ0G", to_id);
        push("REQ0JourneyStopsZ0ID", "");

        for key in ["date", "dateStart", "dateEnd", "REQ0JourneyDate"] {
            push(key, &date);
        }
        for key in ["time", "REQ0JourneyTime"] {
            push(key, &time);
        }

        push("REQ0HafasSearchForw", flag(self.forward));
        push("existBikeEverywhere", "yes");
        push("existHafasAttrInc", "yes");
        push("existHafasAttrInc", "yes");

        for column in 0..PRODUCT_GRID {
            for section in 0..PRODUCT_GRID {
                push(
                    &format!("REQ0JourneyProduct_prod_section_{section}_{column}"),
                    flag(self.products[section][column]),
                );
            }
        }
        push("REQ0JourneyProduct_opt_section_0_list", "0:000000");

        push("existOptimizePrice", flag(self.optimize_price));
        push("existHafasAttrExc", "yes");
        push("REQ0HafasChangeTime", &self.change_time);
        push("existSkipLongChanges", flag(self.skip_long_changes));
        for _ in 0..ATTR_EXC_SLOTS {
            push("REQ0HafasAttrExc", "");
        }
        push("existHafasAttrInc", "yes");
        push("existHafasAttrExc", "yes");
        push("wDayExt0", ALL_WEEKDAYS);
        push("start", "start");
        push("existUnsharpSearch", yes_no(self.unsharp_search));
        push("came_from_form", "1");

        params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Render the full path, relative to the site root.
    pub fn to_path(&self, from_id: &str, to_id: &str, date: NaiveDate, time: NaiveTime) -> String {
        format!(
            "{}?{}",
            SEARCH_PATH,
            self.to_query_string(from_id, to_id, date, time)
        )
    }
}

impl Default for ConnectionQuery {
    fn default() -> Self {
        Self::new()
    }
}
