//! Custom panic hook for structured crash reports.
//!
//! The terminal widget runs in raw mode on the alternate screen, where a
//! default panic message would be invisible or garbled. The hook restores
//! the terminal first and then prints the report to stderr.

use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook.
///
/// Call early in `main()`, before the terminal is switched to raw mode.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    exit_tui_mode();

    eprintln!();
    eprintln!("{}", RULE);
    eprintln!("STARSCORE CRASH REPORT");
    eprintln!("{}", RULE);
    for line in report_lines(info) {
        eprintln!("  {}", line);
    }
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("  Run with RUST_BACKTRACE=1 for stack trace");
    }
    eprintln!("{}", RULE);
}

fn exit_tui_mode() {
    // Ignore errors - we're already panicking
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        std::io::stderr(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    );
}

fn report_lines(info: &PanicHookInfo<'_>) -> Vec<String> {
    let mut lines = vec![
        format!("Version: {}", VERSION),
        format!("Platform: {}", std::env::consts::OS),
        format!("Time: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")),
        format!("PANIC: {}", truncate(&extract_panic_message(info), 68)),
    ];
    if let Some(location) = info.location() {
        lines.push(format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    if let Some(metadata) = Span::current().metadata() {
        lines.push(format!("Span: {}", truncate(metadata.name(), 67)));
    }
    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
