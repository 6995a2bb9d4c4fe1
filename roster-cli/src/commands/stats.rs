//! Review statistics command

use super::{Output, Service};

/// Print how many review assignments each user has received
pub async fn show(service: &Service, out: &Output) -> anyhow::Result<()> {
    let stats = service.stats.reviewer_stats().await?;

    if out.is_json() {
        return out.json(&stats);
    }

    if stats.is_empty() {
        println!("No review assignments yet.");
        return Ok(());
    }

    println!("{:<12} {:>7}", "USER", "REVIEWS");
    for entry in &stats {
        println!("{:<12} {:>7}", entry.user_id, entry.review_count);
    }
    Ok(())
}
