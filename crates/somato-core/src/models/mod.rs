pub mod assessment;
pub mod impedance;
pub mod limb;
pub mod patient;
pub mod payload;
pub mod reference;
