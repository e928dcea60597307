//! Deferred Acceptance - Demo Binary
//!
//! Runs a small hard-coded market and prints the assignment and receipt.
//! Set `RUST_LOG=trace` to watch every proposal.

use deferred_acceptance::{Market, MatchingEngine};

fn main() {
    env_logger::init();

    println!("===========================================");
    println!("  Deferred Acceptance - School Choice");
    println!("===========================================");
    println!();

    let preferences = vec![
        vec![0, 1, 2], // student 0
        vec![1, 0, 2], // student 1
        vec![0, 2, 1], // student 2
        vec![2, 1],    // student 3 never ranks school 0
    ];
    let rankings = vec![
        vec![2, 1, 3, 0], // school 0
        vec![0, 2, 1, 3], // school 1
        vec![1, 2, 0, 3], // school 2
    ];
    let capacities = vec![1, 1, 1];

    let market = match Market::new(preferences, rankings, capacities) {
        Ok(market) => market,
        Err(e) => {
            eprintln!("  ERROR: invalid market: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Market: {} students, {} schools, {} seats",
        market.num_students(),
        market.num_schools(),
        market.total_capacity()
    );
    println!();

    let result = MatchingEngine::new().run(&market);

    println!("Assignment:");
    for (student, school) in result.assignment.iter() {
        match school {
            Some(school) => println!("  Student {student} -> School {school}"),
            None => println!("  Student {student} -> unassigned"),
        }
    }
    println!();

    let receipt = result.receipt();
    println!("Receipt:");
    println!("  Proposals:       {}", receipt.proposals);
    println!("  Rejections:      {}", receipt.rejections);
    println!("  Evictions:       {}", receipt.evictions);
    println!("  Assigned:        {}/{}", receipt.assigned, receipt.num_students);
    println!("  Assignment root: {}", receipt.assignment_root_hex());

    match ssz_rs::serialize(&receipt) {
        Ok(bytes) => println!("  Receipt size:    {} bytes (SSZ)", bytes.len()),
        Err(e) => println!("  ERROR: Failed to serialize receipt: {e:?}"),
    }
}
