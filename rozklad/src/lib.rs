//! Command line client for the Polish railway timetable on rozklad-pkp.pl.
//!
//! Looks up stations by name and finds the next departure between two
//! stations, scraping the public search pages.

pub mod cli;
pub mod domain;
pub mod logging;
pub mod scrape;
pub mod site;
pub mod timetable;
