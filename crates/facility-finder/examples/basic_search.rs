//! Basic facility search functionality
//!
//! This example demonstrates the fundamental operations:
//! - Creating a searcher instance using embedded data
//! - Keyword searches, including the empty keyword
//! - Selecting a facility by id

use facility_finder::{FacilitySearcher, SearchConfigBuilder, SearchOutcome, data::FacilityId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let searcher = FacilitySearcher::new_embedded()?;
    println!("{}", searcher.summary());

    println!("\nSearching for 'court':");
    print_results(&searcher.search("court"), 5);

    println!("\nSearching for 'POOL' (case does not matter):");
    print_results(&searcher.search("POOL"), 5);

    println!("\nEmpty keyword lists everything:");
    print_results(&searcher.search(""), 3);

    println!("\nForm policy treats a blank keyword as 'nothing searched':");
    let form = SearchConfigBuilder::form().build();
    match searcher.search_with_config("   ", &form) {
        SearchOutcome::NoKeyword => println!("  (no keyword provided)"),
        SearchOutcome::Matches(matches) => print_results(&matches, 3),
    }

    println!("\nSelecting facility 3:");
    println!("  {}", searcher.select_by_id(&FacilityId::Number(3))?);

    println!("\nSelecting facility 99:");
    if let Err(e) = searcher.select_by_id(&FacilityId::Number(99)) {
        println!("  {e}");
    }

    Ok(())
}

fn print_results(results: &[&facility_finder::data::FacilityRecord], limit: usize) {
    for (i, result) in results.iter().take(limit).enumerate() {
        println!("  {}. {}", i + 1, result);
    }

    if results.len() > limit {
        println!("  ... and {} more results", results.len() - limit);
    }
}
