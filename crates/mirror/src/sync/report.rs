use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Pull,
    Push,
}

/// An item that failed but did not stop the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    pub id: String,
    pub error: String,
}

/// Outcome of one pull or push run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub direction: Direction,
    pub root: PathBuf,
    /// Items listed by the remote (pull) or read from the manifest (push)
    pub total: usize,
    pub transferred: usize,
    /// Items with no bytes to move
    pub skipped_empty: usize,
    pub failed: Vec<ItemFailure>,
}

impl SyncReport {
    pub fn new(direction: Direction, root: PathBuf, total: usize) -> Self {
        Self {
            direction,
            root,
            total,
            transferred: 0,
            skipped_empty: 0,
            failed: Vec::new(),
        }
    }

    pub fn record_failure(&mut self, id: impl Into<String>, error: impl ToString) {
        self.failed.push(ItemFailure {
            id: id.into(),
            error: error.to_string(),
        });
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (verb, preposition) = match self.direction {
            Direction::Pull => ("Pulled", "into"),
            Direction::Push => ("Pushed", "from"),
        };
        write!(
            f,
            "{} {} of {} items {} {} ({} empty, {} failed)",
            verb,
            self.transferred,
            self.total,
            preposition,
            self.root.display(),
            self.skipped_empty,
            self.failed.len()
        )?;
        for failure in &self.failed {
            write!(f, "\n  {}: {}", failure.id, failure.error)?;
        }
        Ok(())
    }
}
