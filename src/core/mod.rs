pub mod branches;
pub mod classifier;
pub mod git;
pub mod remover;
