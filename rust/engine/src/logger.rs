use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::Combination;

/// Something that happened during a round, in the order it happened.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundEvent {
    DealerButton { player: String },
    Blinds { small: String, big: String, small_amount: u32, big_amount: u32 },
    Folded { player: String },
    Called { player: String, to: u32 },
    Raised { player: String, to: u32 },
    AllIn { player: String, to: u32 },
    Checked { player: String },
    Exchanged { player: String, count: usize },
    Showdown {
        player: String,
        combination: Combination,
        cards: Vec<String>,
        pot: u32,
    },
    Eliminated { player: String, cash: u32 },
}

impl fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundEvent::DealerButton { player } => write!(f, "[{}] deals", player),
            RoundEvent::Blinds {
                small,
                big,
                small_amount,
                big_amount,
            } => write!(
                f,
                "[{}] - small blind ${}, [{}] - big blind ${}",
                small, small_amount, big, big_amount
            ),
            RoundEvent::Folded { player } => write!(f, "[{}] Folded", player),
            RoundEvent::Called { player, .. } => write!(f, "[{}] Called", player),
            RoundEvent::Raised { player, to } => write!(f, "[{}] Raised to {}", player, to),
            RoundEvent::AllIn { player, to } => write!(f, "[{}] All-in for {}", player, to),
            RoundEvent::Checked { player } => write!(f, "[{}] Checked", player),
            RoundEvent::Exchanged { player, count } => {
                write!(f, "[{}] Exchanged {} card(s)", player, count)
            }
            RoundEvent::Showdown {
                player,
                combination,
                cards,
                pot,
            } => write!(
                f,
                "[{}] won ${} with {} {}",
                player,
                pot,
                combination,
                cards.join(", ")
            ),
            RoundEvent::Eliminated { player, cash } => {
                write!(f, "[{}] eliminated with ${}", player, cash)
            }
        }
    }
}

/// Receives round events as they happen.
pub trait Narrator {
    fn narrate(&mut self, event: &RoundEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(&mut self, _event: &RoundEvent) {}
}

impl Narrator for Vec<RoundEvent> {
    fn narrate(&mut self, event: &RoundEvent) {
        self.push(event.clone());
    }
}

/// Complete record of one played round.
/// Serialized to JSONL format for round history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round identifier (format: YYYYMMDD-NNNNNN) or the round number when unlogged
    pub round_id: String,
    /// RNG seed of the game's deck
    pub seed: u64,
    /// Dealer seat name for this round
    pub dealer: String,
    /// Chronological list of events
    pub events: Vec<RoundEvent>,
    /// Showdown winner, if any hand reached it
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub combination: Option<Combination>,
    pub pot: u32,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    /// Assigns the next id, stamps the record and appends it as one JSON line.
    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        rec.round_id = self.next_id();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
