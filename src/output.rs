use owo_colors::OwoColorize;

use crate::organize::SortReport;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when the stream a message is
/// written to is a TTY.
#[derive(Clone, Copy, Debug)]
enum Channel {
    Stdout,
    Stderr,
}

impl Channel {
    fn is_tty(self) -> bool {
        match self {
            Channel::Stdout => atty::is(atty::Stream::Stdout),
            Channel::Stderr => atty::is(atty::Stream::Stderr),
        }
    }
}

fn render(tag: &str, msg: &str, paint: Option<fn(&str) -> String>) -> String {
    match paint {
        Some(paint) => format!("{} {}", paint(tag), msg),
        None => format!("{} {}", tag, msg),
    }
}

fn emit(channel: Channel, tag: &str, paint: fn(&str) -> String, msg: &str) {
    let line = render(tag, msg, channel.is_tty().then_some(paint));
    match channel {
        Channel::Stdout => println!("{}", line),
        Channel::Stderr => eprintln!("{}", line),
    }
}

pub fn print_info(msg: &str) {
    emit(Channel::Stdout, "info:", |t| t.cyan().bold().to_string(), msg);
}

pub fn print_warn(msg: &str) {
    emit(Channel::Stderr, "warn:", |t| t.yellow().bold().to_string(), msg);
}

pub fn print_error(msg: &str) {
    emit(Channel::Stderr, "error:", |t| t.red().bold().to_string(), msg);
}

pub fn print_success(msg: &str) {
    emit(Channel::Stdout, "ok:", |t| t.green().bold().to_string(), msg);
}

/// One-line summary of a run, e.g. "moved 12 file(s) into 3 new folder(s)".
pub fn summary_line(report: &SortReport) -> String {
    let verb = if report.dry_run { "would move" } else { "moved" };
    let mut line = format!("{} {} file(s)", verb, report.moved_count());
    if !report.dry_run {
        line.push_str(&format!(" into {} new folder(s)", report.dirs_created()));
    }
    if report.skipped_dirs > 0 {
        line.push_str(&format!(", skipped {} folder(s)", report.skipped_dirs));
    }
    line
}

/// Print the run summary, plus one line per failed entry.
pub fn print_report(report: &SortReport) {
    let failed = report.failed_count();
    if failed == 0 {
        print_success(&summary_line(report));
        return;
    }
    print_info(&summary_line(report));
    for (outcome, err) in report.failures() {
        print_error(&format!("{}: {}", outcome.file_name.to_string_lossy(), err));
    }
    print_warn(&format!("{} file(s) were left in place", failed));
}
