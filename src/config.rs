use crate::consts::{DEFAULT_DRAW_API, DEFAULT_MIN_GAP, DEFAULT_REPORT_TOP, DEFAULT_ROUNDS};
use crate::engine::movements::WeightScheme;
use crate::engine::synth::OffsetScheme;
use crate::error::{LottoError, LtResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub engine: EngineParams,
    #[command(flatten)]
    pub storage: StorageParams,
    #[command(flatten)]
    pub draws: DrawParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    #[arg(long, value_enum, default_value_t = WeightScheme::Flat)]
    pub weight_scheme: WeightScheme,
    #[arg(long, value_enum, default_value_t = OffsetScheme::Simple)]
    pub offset_scheme: OffsetScheme,
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: u8,
    // Gap used when the large-jump filter gets switched on
    #[arg(long, default_value_t = DEFAULT_MIN_GAP)]
    pub min_gap: u8,
    #[arg(long, default_value_t = DEFAULT_REPORT_TOP)]
    pub report_top: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            weight_scheme: WeightScheme::Flat,
            offset_scheme: OffsetScheme::Simple,
            rounds: DEFAULT_ROUNDS,
            min_gap: DEFAULT_MIN_GAP,
            report_top: DEFAULT_REPORT_TOP,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageParams {
    #[arg(long, default_value = "matrixlotto_state.json")]
    pub state_file: PathBuf,
}

impl Default for StorageParams {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("matrixlotto_state.json"),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawParams {
    #[arg(long, default_value = DEFAULT_DRAW_API)]
    pub draw_api: String,
    #[arg(long, default_value_t = 15)]
    pub draw_timeout_secs: u64,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            draw_api: DEFAULT_DRAW_API.to_string(),
            draw_timeout_secs: 15,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LtResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LottoError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LtResult<()> {
        if self.engine.rounds == 0 {
            return Err(LottoError::Config("rounds must be at least 1".into()));
        }
        if self.engine.min_gap == 0 {
            return Err(LottoError::Config("min_gap must be at least 1".into()));
        }
        Ok(())
    }

    /// Copies every flag the user actually typed over the values loaded from file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(engine.weight_scheme);
        update_if_present!(engine.offset_scheme);
        update_if_present!(engine.rounds);
        update_if_present!(engine.min_gap);
        update_if_present!(engine.report_top);

        update_if_present!(storage.state_file);

        update_if_present!(draws.draw_api);
        update_if_present!(draws.draw_timeout_secs);
    }
}
