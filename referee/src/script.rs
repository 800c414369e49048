use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use omok::{Place, DEFAULT_BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// The largest board a script may ask for.
pub const MAX_BOARD_SIZE: usize = 1000;

/// A recorded game: who plays and where the stones go.
///
/// The first player places the first stone, then the players alternate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScript {
    /// The board size, 15 if not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// The names of the two players.
    pub players: [String; 2],
    pub moves: Vec<Place>,
}

impl GameScript {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open game script '{}'", path.display()))?;
        let script: GameScript = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse game script '{}'", path.display()))?;
        script.validate()?;
        Ok(script)
    }

    pub fn board_size(&self) -> usize {
        self.size.unwrap_or(DEFAULT_BOARD_SIZE)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.size == Some(0) {
            anyhow::bail!("The board size must be at least 1");
        }
        if self.board_size() > MAX_BOARD_SIZE {
            anyhow::bail!(
                "The board size {} is larger than the maximum of {}",
                self.board_size(),
                MAX_BOARD_SIZE
            );
        }
        Ok(())
    }
}
