pub mod amino;
pub mod blosum;

pub use amino::{AminoAcid, Catalog, Classification, Residue};
pub use blosum::BLOSUM62_ACCEPT;
