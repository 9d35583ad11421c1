use crate::consts::{NUMBER_MAX, PREDICTION_SIZE};
use crate::error::LtResult;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// A past contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalDraw {
    pub contest: u32,
    pub date: String,
    pub numbers: Vec<u8>,
}

/// Reads `contest,date,n1,...,n6` rows (header required). Rows that do not
/// parse, or hold numbers outside 1..=60, are skipped with a warning.
pub fn load_history_csv<P: AsRef<Path>>(path: P) -> LtResult<Vec<HistoricalDraw>> {
    let path = path.as_ref();
    debug!("Loading draw history from {}", path.display());
    let file = File::open(path)?;
    read_history(file)
}

pub fn read_history<R: Read>(reader: R) -> LtResult<Vec<HistoricalDraw>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut draws = Vec::new();
    let mut skipped = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[Row {}] CSV parse error: {}", row_idx + 1, e);
                skipped += 1;
                continue;
            }
        };

        if rec.len() < 2 + PREDICTION_SIZE {
            skipped += 1;
            continue;
        }

        let Ok(contest) = rec[0].parse::<u32>() else {
            skipped += 1;
            continue;
        };

        let numbers: Option<Vec<u8>> = (2..2 + PREDICTION_SIZE)
            .map(|i| rec[i].parse::<u8>().ok().filter(|n| (1..=NUMBER_MAX).contains(n)))
            .collect();
        let Some(numbers) = numbers else {
            skipped += 1;
            continue;
        };

        draws.push(HistoricalDraw {
            contest,
            date: rec[1].to_string(),
            numbers,
        });
    }

    if skipped > 0 {
        warn!("Skipped {} invalid rows in draw history", skipped);
    }

    Ok(draws)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_history_skips_bad_rows() {
        let data = "contest,date,n1,n2,n3,n4,n5,n6\n\
                    1,11/03/1996,4,5,30,33,41,52\n\
                    2,18/03/1996,9,37,39,41,43,49\n\
                    x,bad,1,2,3,4,5,6\n\
                    4,01/04/1996,1,2,3,4,5,61\n\
                    5,08/04/1996,1,2\n";
        let draws = read_history(data.as_bytes()).unwrap();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[1].contest, 2);
        assert_eq!(draws[0].numbers, vec![4, 5, 30, 33, 41, 52]);
    }
}
