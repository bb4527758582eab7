use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::player::PlayerId;

/// One completed turn, in the order turns were taken.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number within the game
    pub turn: u32,
    /// Player who took the turn
    pub player: PlayerId,
    /// Card played, or `None` when the player drew instead
    pub played: Option<Card>,
    /// Cards taken into the player's hand this turn, forced payment included
    pub drawn: u32,
    /// Color in effect after the turn
    pub color: Option<Color>,
    /// Pickup stack left for the next player
    pub pickup_stack: u32,
    /// Seat holding the turn afterwards
    pub next_player: PlayerId,
    /// Whether this turn emptied the player's hand
    #[serde(default)]
    pub winning: bool,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A [`TurnRecord`] as it appears on one line of a game log.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LogLine {
    pub game_id: String,
    /// Write time (RFC3339)
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(flatten)]
    pub record: TurnRecord,
}

/// Appends turn records to a JSONL file, one game id per game.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
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

    /// Logger that only hands out ids; nothing is written.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, game_id: &str, record: &TurnRecord) -> std::io::Result<()> {
        let line = LogLine {
            game_id: game_id.to_string(),
            ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            record: record.clone(),
        };
        let json = serde_json::to_string(&line).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(json.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }

    pub fn write_all<'a>(
        &mut self,
        game_id: &str,
        records: impl IntoIterator<Item = &'a TurnRecord>,
    ) -> std::io::Result<()> {
        for r in records {
            self.write(game_id, r)?;
        }
        Ok(())
    }
}
