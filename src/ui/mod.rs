/// UI layer: egui rendering only. All numbers shown here come from the
/// `data` and `analysis` layers; nothing in `ui` computes statistics.

pub mod panels;
pub mod plot;
pub mod views;
