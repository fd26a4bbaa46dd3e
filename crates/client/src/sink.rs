use dataexplorer_core::notification::NotificationSink;

/// Prints user-facing failures to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    quiet: bool,
}

impl ConsoleSink {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl NotificationSink for ConsoleSink {
    fn notify_error(&self, message: &str) {
        if !self.quiet {
            eprintln!("error: {}", message);
        }
    }
}
