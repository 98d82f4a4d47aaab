//! Driving the search-and-select panel
//!
//! Mirrors a notebook session: type a keyword, press search, pick a facility
//! from the dropdown and press select.

use std::sync::Arc;

use facility_finder::{FacilityPanel, FacilitySearcher, data::FacilityId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    facility_finder::init_logging(tracing::Level::WARN)?;

    let searcher = Arc::new(FacilitySearcher::new_embedded()?);
    let mut panel = FacilityPanel::new(searcher);

    println!("Dropdown:");
    for (name, id) in panel.options() {
        println!("  [{id}] {name}");
    }

    for keyword in ["court", "sauna"] {
        panel.search(keyword);
        println!("\n{}\n{}", panel.status(), panel.results());
    }

    panel.select(&FacilityId::Number(7))?;
    println!("\n{}", panel.selected());

    if let Err(e) = panel.select(&FacilityId::Number(404)) {
        println!("\n{e}");
    }

    Ok(())
}
