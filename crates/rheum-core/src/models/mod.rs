pub mod consult;
pub mod intake;
