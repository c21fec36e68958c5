pub mod derived;
pub mod powerlaw;
pub mod rank;
pub mod spearman;
pub mod stats;
pub mod ttest;
pub mod unified;
