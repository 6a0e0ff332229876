pub mod error;
pub mod evaluate;
pub mod export;
pub mod form;
pub mod plot;
pub mod query;
pub mod stats;
