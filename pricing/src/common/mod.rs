pub mod models;
pub mod share;
pub mod share_option;

pub use models::{DerivativeParameter, OptionKind};
pub use share::{Share, VolatilityBasis, DEFAULT_TRADING_DAYS};
pub use share_option::ShareOption;
