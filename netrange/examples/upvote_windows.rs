//! Net range counts over a short upvote history, through both the
//! slice API and the streaming API.

use netrange::{net_range_counts, NetRangeScanner, WindowStat};

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    let votes = vec![1, 2, 3, 1, 1, 2, 4, 4, 3];
    let width = 3;

    let counts = net_range_counts(&votes, width)?;
    for (window, count) in counts.iter().enumerate() {
        println!("window {window}: {count}");
    }

    // Streaming, one measurement at a time, produces the same counts.
    let mut scanner = NetRangeScanner::new(width)?;
    let streamed: Vec<i64> =
        votes.iter().filter_map(|&v| scanner.step(v)).collect();
    assert_eq!(streamed, counts);

    Ok(())
}
