// ============================================================================
// Basic Usage Example
// ============================================================================

use addition_service::prelude::*;
use std::io::Write;

fn main() {
    println!("=== Addition Service Example ===\n");

    // Aggregator that prints every result as it is produced
    let mut aggregator = AggregatorBuilder::new()
        .precision(2)
        .sink(Box::new(ConsoleSink))
        .build()
        .unwrap();

    println!("Summing a clean list...");
    aggregator.add_numbers(vec!["1.005", "1.005"]);

    println!("Summing a list with a bad entry...");
    let partial = aggregator.add_numbers(vec![
        ListValue::from(10i64),
        ListValue::from(2.5),
        ListValue::from("twelve"),
        ListValue::from("3e1"),
    ]);

    println!("Processed: {}", partial.processed_count());
    println!("Failed:    {}", partial.failed_count());
    for (number_type, count) in partial.number_types() {
        println!("  {:<8} {}", number_type, count);
    }

    println!("\nSumming a CSV column...");
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "item,price\napple,0.50\npear,0.75\nplum,").unwrap();
    file.flush().unwrap();
    aggregator.add_from_csv(file.path(), 1, true);

    println!("Summing an empty list...");
    aggregator.add_numbers(Vec::<String>::new());

    println!(
        "\nCompleted operations: {} (cache entries: {})",
        aggregator.operations_count(),
        aggregator.validator().cache().len()
    );
}
