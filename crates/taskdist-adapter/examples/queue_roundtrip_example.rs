/*
[INPUT]:  Queue service base URL (first argument, defaults to localhost)
[OUTPUT]: Submitted sample tasks and the results available afterwards
[POS]:    Examples - end-to-end submission and retrieval
[UPDATE]: When the client surface changes
*/

use taskdist_adapter::*;

/// Example: push the smoke-test batch and pull whatever results are ready
#[tokio::main]
async fn main() {
    println!("=== Task Queue Round Trip Example ===\n");

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let client = match TaskQueueClient::new(&base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    match client.health().await {
        Ok(health) => println!("✓ Service health: {}", health.status),
        Err(e) => println!("✗ {}", e.status_line()),
    }

    for payload in sample_batch() {
        match client.submit_task(&payload).await {
            Ok(_) => println!("✓ Queued: {}", payload.to_json()),
            Err(e) => println!("✗ {}", e.status_line()),
        }
    }

    // Workers need a moment before results show up.
    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    println!("\nFetching results...");
    match client.fetch_results().await {
        Ok(results) if results.is_empty() => println!("No new results in queue"),
        Ok(results) => {
            for result in results {
                println!("  {}", result);
            }
        }
        Err(e) => println!("✗ {}", e.status_line()),
    }

    println!("\n✓ Round trip example complete");
}
