//! Batch transform: problem input on stdin, one count per line on stdout.

use netrange::io::{write_counts, Problem};
use netrange::net_range_counts;
use std::io::{self, BufWriter, Write as _};

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    let stdin = io::stdin();
    let problem = Problem::from_reader(stdin.lock())?;
    let counts = net_range_counts(&problem.values, problem.width)?;
    debug_assert_eq!(counts.len(), problem.windows);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_counts(&mut out, &counts)?;
    out.flush()?;
    Ok(())
}
