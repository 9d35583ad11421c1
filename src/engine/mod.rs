pub mod movements;
pub mod synth;
pub mod weights;

pub use movements::{classify, Classification, Movement, WeightScheme};
pub use synth::{synthesize, OffsetScheme, Prediction};
pub use weights::{PairEntry, PairTable};

use crate::config::EngineParams;
use crate::filters::FilterSet;
use crate::report::{build_report, PatternReport};
use crate::tokens::Token;
use serde::Serialize;
use tracing::{debug, info};

/// Output of one process action.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Analysis {
    pub predictions: Vec<Prediction>,
    pub report: PatternReport,
}

/// Tokens -> movements -> weighted table -> predictions + report.
/// Everything is recomputed from scratch on each call.
pub fn process(tokens: &[Token], filters: &FilterSet, params: &EngineParams) -> Analysis {
    if tokens.is_empty() {
        debug!("No tokens to process");
        return Analysis::default();
    }

    let Classification {
        movements,
        digit_frequency,
    } = classify(tokens, params.weight_scheme);
    let table = PairTable::from_movements(&movements);

    let predictions = synthesize(&table, filters, params.rounds, params.offset_scheme);
    info!(
        "Processed {} tokens into {} weighted pairs, {}/{} rounds produced a prediction",
        tokens.len(),
        table.len(),
        predictions.len(),
        params.rounds
    );

    let report = build_report(&movements, &table, &digit_frequency, params.report_top);

    Analysis {
        predictions,
        report,
    }
}
