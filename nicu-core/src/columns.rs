//! Column names the dashboards read from an uploaded table.

pub const DATE: &str = "Date";
pub const WEIGHT: &str = "Weight";
pub const WEIGHT_DIFF: &str = "Weight_diff";

pub const BREASTFEEDING_ORAL: &str = "Breastfeeding_oral";
pub const TPN: &str = "TPN";

pub const PH: &str = "pH";
pub const HCO3: &str = "HCO3";
pub const TCO2: &str = "TCO2";
pub const IONIZED_CA: &str = "Ionized Ca";
pub const AN_GAP: &str = "An.Gap";
