use anyhow::{Context, Result};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::score::{to_stored, Score};
use crate::tui::TuiManager;
use crate::widget::StarWidget;

/// Commits seen while the terminal is in the alternate screen.
type CommitLog = Rc<RefCell<Vec<Score>>>;

/// Widget whose commits are recorded rather than logged, so nothing writes
/// to stderr while the TUI owns the screen.
fn recording_widget(initial: Score) -> (StarWidget, CommitLog) {
    let commits = CommitLog::default();
    let sink = Rc::clone(&commits);
    let widget =
        StarWidget::new(initial).with_on_commit(move |score| sink.borrow_mut().push(score));
    (widget, commits)
}

/// Run the terminal widget and print the committed stored value.
pub fn edit_score<W: Write>(out: &mut W, initial: Score) -> Result<Score> {
    let (widget, commits) = recording_widget(initial);

    let committed = {
        let mut tui = TuiManager::new(widget).context("Failed to initialize terminal")?;
        tui.run().context("Terminal event loop failed")?
    };

    for score in commits.borrow().iter() {
        tracing::info!(score = %to_stored(*score), "score committed");
    }
    writeln!(out, "{}", to_stored(committed))?;
    Ok(committed)
}
