//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use weakmap::io::progress::ProgressManager;

    // Tests finished runs are counted and stopping the bar keeps the count
    // Verified by finishing with the bar moved to its full length
    #[test]
    fn test_counts_completed_runs() {
        let progress = ProgressManager::hidden(3);

        progress.start_run("all", "Jarilo-VI");
        progress.complete_run();
        progress.start_run("normal", "Jarilo-VI");
        assert_eq!(progress.completed(), 1);

        progress.complete_run();
        progress.finish();
        assert_eq!(progress.completed(), 2);
    }

    // Tests a visible bar accepts runs and text without a terminal
    // Verified by panicking on an unset template
    #[test]
    fn test_visible_bar_without_terminal() {
        let progress = ProgressManager::new(1);

        progress.start_run("elite", "every planets");
        progress.println("summary");
        progress.complete_run();
        assert_eq!(progress.completed(), 1);
        progress.finish();
    }
}
