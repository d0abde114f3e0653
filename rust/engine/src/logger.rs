use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{Phase, TableState};
use crate::hand::HandEvaluation;
use crate::player::{PlayerAction, PlayerId};

/// Records a single player action during a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player_id: PlayerId,
    /// 0 for the main deal, then 1, 2, … for each tie-break sub-round
    pub sub_round: u32,
    pub action: PlayerAction,
    /// Chips the action moved into the pot
    #[serde(default)]
    pub chips: u32,
}

/// A player's cards as revealed at the end of a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RevealedHand {
    pub player_id: PlayerId,
    pub cards: Vec<Card>,
    #[serde(default)]
    pub evaluation: Option<HandEvaluation>,
    pub folded: bool,
}

/// Information about who took the pot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<PlayerId>,
    pub pot: u32,
    /// e.g. "uncontested" or the winning hand description
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of a finished round, written as one JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Table seed (enables deterministic replay)
    pub seed: u64,
    pub round: u32,
    #[serde(default)]
    pub tie_breaks: u32,
    pub actions: Vec<ActionRecord>,
    pub hands: Vec<RevealedHand>,
    pub result: Option<String>,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl RoundRecord {
    /// Build a record from a finished round; `None` unless the snapshot is
    /// in the round-over phase.
    pub fn from_state(round_id: String, state: &TableState) -> Option<Self> {
        if state.phase() != Phase::RoundOver {
            return None;
        }
        let winner = state.round_winner();
        let hands = state
            .players()
            .iter()
            .filter(|p| !p.hand().is_empty())
            .map(|p| RevealedHand {
                player_id: p.id().clone(),
                cards: p.hand().to_vec(),
                evaluation: p.evaluation().cloned(),
                folded: p.has_folded(),
            })
            .collect();
        Some(Self {
            round_id,
            seed: state.seed(),
            round: state.round(),
            tie_breaks: state.tie_breaks(),
            actions: state.actions().to_vec(),
            hands,
            result: winner.map(|w| format!("{} wins {}", w.player_id, w.pot)),
            ts: None,
            showdown: winner.map(|w| ShowdownInfo {
                winners: vec![w.player_id.clone()],
                pot: w.pot,
                notes: Some(w.description.clone()),
            }),
        })
    }
}

/// `YYYYMMDD-NNNNNN`
pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends finished rounds to a JSONL file, one record per line, and hands
/// out sequential round ids for the day the logger was opened.
pub struct RoundLogger {
    sink: Option<BufWriter<File>>,
    date: String,
    seq: u32,
    written: usize,
}

impl RoundLogger {
    /// Create (or truncate) `path`, making missing parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
            _ => {}
        }
        Ok(Self {
            sink: Some(BufWriter::new(File::create(path)?)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
            written: 0,
        })
    }

    /// A logger that numbers rounds for a fixed date and writes nowhere.
    pub fn detached(date: &str) -> Self {
        Self {
            sink: None,
            date: date.to_string(),
            seq: 0,
            written: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Write one record, stamping it with the current time unless it
    /// already carries one. Each line is flushed as it is written.
    pub fn write(&mut self, record: &RoundRecord) -> io::Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let line = if record.ts.is_some() {
            serde_json::to_string(record)
        } else {
            let stamped = RoundRecord {
                ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
                ..record.clone()
            };
            serde_json::to_string(&stamped)
        }
        .map_err(io::Error::other)?;
        writeln!(sink, "{}", line)?;
        sink.flush()?;
        self.written += 1;
        Ok(())
    }
}
