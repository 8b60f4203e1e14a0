use crate::error::{FlattenError, Result};
use crate::flatten::cell::render_cell;
use crate::flatten::columns::{field_columns, COLUMNS};
use crate::flatten::row::PlayerRow;
use crate::flatten::table::PlayerTable;
use crate::types::PlayerId;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes player rows as CSV using the fixed column schema.
///
/// Records end in `\r\n` and are quoted only when needed, matching the
/// files the original export scripts produced.
pub struct PlayerCsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl PlayerCsvWriter<File> {
    /// Create the output file, creating missing parent directories first
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| FlattenError::Create {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = File::create(path).map_err(|source| FlattenError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "writing players");
        Ok(Self::new(file))
    }
}

impl<W: Write> PlayerCsvWriter<W> {
    pub fn new(inner: W) -> Self {
        PlayerCsvWriter {
            writer: csv::WriterBuilder::new()
                .terminator(csv::Terminator::CRLF)
                .from_writer(inner),
        }
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.writer.write_record(COLUMNS)?;
        Ok(())
    }

    /// Write one row: the id, then every remaining column looked up in the row.
    ///
    /// Fails on the first missing column; nothing is substituted.
    pub fn write_row(&mut self, id: &PlayerId, row: &PlayerRow) -> Result<()> {
        let mut record = Vec::with_capacity(COLUMNS.len());
        record.push(id.as_str().to_string());

        for &column in field_columns() {
            let value = row.get(column).ok_or_else(|| FlattenError::MissingField {
                player_id: id.to_string(),
                column,
            })?;
            record.push(render_cell(value));
        }

        self.writer.write_record(&record)?;
        Ok(())
    }

    /// Write the header followed by every player, returning the number of rows
    pub fn write_players(&mut self, players: &PlayerTable) -> Result<usize> {
        self.write_header()?;

        let mut count = 0;
        for (id, row) in players.iter() {
            self.write_row(id, row)?;
            count += 1;
        }

        Ok(count)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| FlattenError::Io(err.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn full_row() -> PlayerRow {
        let mut stats = Map::new();
        for &column in field_columns() {
            stats.insert(column.to_string(), json!(0));
        }
        PlayerRow::from_stats(stats)
    }

    fn write(players: &PlayerTable) -> (Result<usize>, String) {
        let mut writer = PlayerCsvWriter::new(Vec::new());
        let result = writer.write_players(players);
        let bytes = writer.into_inner().unwrap();
        (result, String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn test_header_then_rows() {
        let mut players = PlayerTable::new();
        players.insert(PlayerId::new("p1"), full_row());

        let (result, output) = write(&players);
        assert_eq!(result.unwrap(), 1);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], COLUMNS.join(","));
        assert!(lines[1].starts_with("p1,0,0,"));
        assert_eq!(lines[1].split(',').count(), COLUMNS.len());
    }

    #[test]
    fn test_missing_column_fails() {
        let mut players = PlayerTable::new();
        players.entry("ghost").assign_group(2, 1);

        let (result, output) = write(&players);
        match result {
            Err(FlattenError::MissingField { player_id, column }) => {
                assert_eq!(player_id, "ghost");
                assert_eq!(column, "DBNOs");
            }
            other => panic!("expected missing field, got {:?}", other),
        }
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_row_bytes_match_python_csv() {
        let mut row = full_row();
        row.merge_match_attributes(
            &serde_json::from_value(json!({
                "isCustomMatch": false,
                "tags": ["a"],
                "walkDistance": 0.00001,
                "mapName": "Baltic_Main, remastered"
            }))
            .unwrap(),
        );
        let mut players = PlayerTable::new();
        players.insert(PlayerId::new("p1"), row);

        let (result, output) = write(&players);
        assert_eq!(result.unwrap(), 1);

        let cells: Vec<String> = COLUMNS
            .iter()
            .map(|&column| match column {
                "id" => "p1".to_string(),
                "groupId" | "groupRank" => "-1".to_string(),
                "isCustomMatch" => "False".to_string(),
                "tags" => "['a']".to_string(),
                "walkDistance" => "1e-05".to_string(),
                "mapName" => "\"Baltic_Main, remastered\"".to_string(),
                _ => "0".to_string(),
            })
            .collect();
        let expected = format!("{}\r\n{}\r\n", COLUMNS.join(","), cells.join(","));
        assert_eq!(output, expected);
        assert!(output.contains(",1e-05,"));
        assert!(output.contains(",['a'],"));
    }
}
