// Lineup and game-result loading.
//
// Lineups are JSON in the settlement backend's pick shape. Final stat lines
// come from a CSV export with one row per player/category.

use std::io::Read;
use std::path::Path;

use fanassist_core::grading::GameResult;
use fanassist_core::{Pick, PlayMode};
use serde::Deserialize;
use tracing::warn;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LineupError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid lineup JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Lineup file
// ---------------------------------------------------------------------------

/// A saved lineup. Mode and wager may be left to the command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupFile {
    #[serde(default)]
    pub play_mode: Option<PlayMode>,
    #[serde(default)]
    pub wager_amount: Option<f64>,
    pub picks: Vec<Pick>,
}

fn parse_lineup<R: Read>(rdr: R) -> Result<LineupFile, serde_json::Error> {
    serde_json::from_reader(rdr)
}

/// Load a lineup JSON file.
pub fn load_lineup(path: &Path) -> Result<LineupFile, LineupError> {
    let file = std::fs::File::open(path).map_err(|e| LineupError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_lineup(std::io::BufReader::new(file)).map_err(|e| LineupError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Game results CSV
// ---------------------------------------------------------------------------

/// Raw CSV row. Header: `playerId,playerName,category,actualValue,gameCompleted`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGameResult {
    player_id: String,
    #[serde(default)]
    player_name: String,
    category: String,
    actual_value: f64,
    game_completed: bool,
}

fn load_results_from_reader<R: Read>(rdr: R) -> Result<Vec<GameResult>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut results = Vec::new();
    for row in reader.deserialize::<RawGameResult>() {
        match row {
            Ok(raw) => {
                if !raw.actual_value.is_finite() {
                    warn!(
                        "skipping result for '{}' ({}): non-finite actual value",
                        raw.player_name, raw.category
                    );
                    continue;
                }
                results.push(GameResult {
                    player_id: raw.player_id,
                    player_name: raw.player_name,
                    category: raw.category,
                    actual_value: raw.actual_value,
                    game_completed: raw.game_completed,
                });
            }
            Err(e) => {
                warn!("skipping malformed game result row: {}", e);
            }
        }
    }
    Ok(results)
}

/// Load final stat lines from a CSV file. Malformed rows are skipped.
pub fn load_game_results(path: &Path) -> Result<Vec<GameResult>, LineupError> {
    let file = std::fs::File::open(path).map_err(|e| LineupError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_results_from_reader(file).map_err(|e| LineupError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanassist_core::{PickModifier, PickStatus, Selection};

    #[test]
    fn lineup_with_mode_and_wager() {
        let json = r#"{
            "playMode": "power",
            "wagerAmount": 25,
            "picks": [
                {"id":"1","playerId":"p1","playerName":"LeBron James","category":"Points",
                 "selection":"more","statValue":25.5,"status":"win","modifier":"demon"}
            ]
        }"#;
        let lineup = parse_lineup(json.as_bytes()).unwrap();
        assert_eq!(lineup.play_mode, Some(PlayMode::Power));
        assert_eq!(lineup.wager_amount, Some(25.0));
        assert_eq!(lineup.picks.len(), 1);
        assert_eq!(lineup.picks[0].status, Some(PickStatus::Win));
        assert_eq!(lineup.picks[0].modifier, Some(PickModifier::Demon));
    }

    #[test]
    fn lineup_mode_and_wager_optional() {
        let json = r#"{"picks":[{"id":"1","playerId":"p1","playerName":"A","category":"Points",
            "selection":"less","statValue":12.5}]}"#;
        let lineup = parse_lineup(json.as_bytes()).unwrap();
        assert!(lineup.play_mode.is_none());
        assert!(lineup.wager_amount.is_none());
        assert_eq!(lineup.picks[0].selection, Selection::Less);
        assert!(lineup.picks[0].status.is_none());
    }

    #[test]
    fn lineup_unknown_mode_is_rejected() {
        let json = r#"{"playMode":"parlay","picks":[]}"#;
        assert!(parse_lineup(json.as_bytes()).is_err());
    }

    #[test]
    fn results_csv_parses_rows() {
        let csv_data = "\
playerId,playerName,category,actualValue,gameCompleted
p1,LeBron James,Points,30,true
p2, Stephen Curry ,Points,28.5,false";
        let results = load_results_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].player_id, "p1");
        assert_eq!(results[0].actual_value, 30.0);
        assert!(results[0].game_completed);
        assert_eq!(results[1].player_name, "Stephen Curry");
        assert!(!results[1].game_completed);
    }

    #[test]
    fn results_csv_skips_malformed_rows() {
        let csv_data = "\
playerId,playerName,category,actualValue,gameCompleted
p1,LeBron James,Points,thirty,true
p2,Stephen Curry,Points,31,true
p3,Kevin Durant,Points,NaN,true";
        let results = load_results_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].player_id, "p2");
    }

    #[test]
    fn missing_files_report_path() {
        let err = load_lineup(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, LineupError::Io { ref path, .. } if path.ends_with("exist.json")));
        let err = load_game_results(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LineupError::Io { .. }));
    }
}
