pub mod transfergo;

pub use transfergo::TransferGoProvider;
