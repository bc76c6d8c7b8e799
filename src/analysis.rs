//! Strategy orchestration and stream comparison.

pub mod compare;

pub use compare::{
    analyze, compare, AnalysisConfig, CompressionResult, Method, StrategyAdvantage,
    StreamAnalysis, StreamComparison,
};
