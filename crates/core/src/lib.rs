//! dataexplorer_core - pure logic for the dataexplorer console.
//!
//! Nothing in this crate performs I/O. The throughput engine decides what can
//! be saved or discarded, `arm` describes the control-plane surface, and
//! `notification` defines where user-facing failures go.

pub mod arm;
pub mod notification;
pub mod throughput;
