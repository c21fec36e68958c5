//! Statistical analysis companion for the overmassive BCG black hole study.
//!
//! Two hand-curated literature samples (14 brightest cluster galaxies, 8
//! field galaxies) flow through a pure pipeline: derived mass fractions and
//! overmass factors, Spearman rank correlation with leave-one-out
//! sensitivity, power-law fits in log-log space, a Welch t-test of the
//! BCG-vs-field enhancement, and a unified-relation regression across the
//! merged sample. The binary prints a console report and renders three
//! figures.

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod figures;
pub mod report;
