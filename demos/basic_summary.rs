#![allow(clippy::unwrap_used, clippy::expect_used, clippy::uninlined_format_args, clippy::doc_markdown)]
//! Basic Summary Example
//!
//! Demonstrates the full pipeline over in-memory CSV data:
//! - loading with a text-only schema
//! - cleaning and summarizing the value column
//! - the warning and degenerate report paths
//!
//! Run with: cargo run --example basic_summary

use resumen::{Dataset, Summarizer};

fn main() -> resumen::Result<()> {
    println!("=== Resumen Basic Summary Example ===\n");

    // 1. Load a small dataset with one invalid row
    println!("1. Loading dataset");
    let dataset = Dataset::from_csv_str("value,category\n10,a\nbad,b\n20,a\n")?;
    println!("   Dataset has {} rows", dataset.len());
    println!("   Schema: {:?}", dataset.schema());

    // 2. Clean and summarize
    println!("\n2. Summarizing (the invalid row is dropped)");
    let analysis = Summarizer::new().summarize(&dataset)?;
    println!("{}", analysis.report.to_json()?);

    // 3. Custom column names
    println!("\n3. Custom column names");
    let metrics = Dataset::from_csv_str("metric,label\n1.5,hot\n2.5,cold\n3.5,hot\n")?;
    let analysis = Summarizer::new()
        .value_column("metric")
        .category_column("label")
        .summarize(&metrics)?;
    println!("{}", analysis.report.to_json()?);

    // 4. A missing value column degrades statistics to null
    println!("\n4. Missing value column");
    let no_value = Dataset::from_csv_str("category\nx\ny\n")?;
    let analysis = Summarizer::new().summarize(&no_value)?;
    for warning in &analysis.warnings {
        println!("   Warning: {}", warning);
    }
    println!("{}", analysis.report.to_json()?);

    // 5. No valid rows at all collapses to the degenerate report
    println!("\n5. Degenerate report");
    let all_bad = Dataset::from_csv_str("value\nbad\nworse\n")?;
    let analysis = Summarizer::new().summarize(&all_bad)?;
    println!("{}", analysis.report.to_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
