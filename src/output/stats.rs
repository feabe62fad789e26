//! Statistics reporting.

use console::style;

use crate::config::RunMode;
use crate::download::RunState;

/// Print statistics for a finished run.
pub fn print_run_stats(state: &RunState) {
    println!();
    println!(
        "{}",
        style(format!(
            "Statistics for {} ({}/{}):",
            state.creator_name, state.service, state.creator_id
        ))
        .bold()
    );
    println!("  Posts:      {} of {}", state.posts_fetched, state.post_count);
    if state.pages_failed > 0 {
        println!(
            "  Pages:      {} requested, {}",
            state.pages_requested,
            style(format!("{} failed", state.pages_failed)).red()
        );
    } else {
        println!("  Pages:      {} requested", state.pages_requested);
    }

    match state.run_mode {
        RunMode::ListFormats => {
            let formats: Vec<_> = state.observed_formats.iter().cloned().collect();
            println!("  Formats:    {}", formats.join(" "));
        }
        RunMode::Manifest => {
            println!("  Candidates: {}", state.candidates_found);
            println!("  Skipped:    {} (duplicates)", state.duplicates_removed);
            for manifest in &state.manifests {
                println!(
                    "  {:<10}  {} entries -> {}",
                    manifest.extension.to_uppercase(),
                    style(manifest.entries).green(),
                    manifest.path.display()
                );
            }
            println!("  Total:      {} entries", state.entries_written());
        }
    }
    println!("{}", style("═".repeat(50)).dim());
}
