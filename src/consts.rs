/// Number of cells in the 4x4 matrix.
pub const GRID_CELLS: usize = 16;

/// Side length of the matrix.
pub const GRID_SIDE: usize = 4;

/// Numbers in a Mega-Sena style prediction.
pub const PREDICTION_SIZE: usize = 6;

/// Upper bound of the candidate universe (1..=60).
pub const NUMBER_MAX: u8 = 60;

/// Independent synthesis rounds per process action.
pub const DEFAULT_ROUNDS: u8 = 4;

/// Minimum distance between consecutive accepted values when the large-jump filter is on.
pub const DEFAULT_MIN_GAP: u8 = 5;

/// Max even (or odd) values allowed in a 6-number set by the balanced parity filter.
pub const BALANCED_PARITY_LIMIT: usize = 3;

/// Pair rows shown in the pattern report.
pub const DEFAULT_REPORT_TOP: usize = 10;

/// Attempt budget for filter-aware quick picks before falling back to a plain pick.
pub const QUICK_PICK_MAX_ATTEMPTS: usize = 1000;

pub const PRIMES: [u64; 17] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59];

pub const FIBONACCI: [u64; 10] = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55];

/// Public results endpoint of Caixa's lottery portal.
pub const DEFAULT_DRAW_API: &str = "https://servicebus2.caixa.gov.br/portaldeloterias/api";
