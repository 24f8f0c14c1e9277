pub mod frame;
pub mod report;

pub use frame::TradeFrame;
