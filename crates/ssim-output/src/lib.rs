//! SSIM dataset assembly and output.
//!
//! - **assembler**: header, airline blocks and trailer with running serials
//! - **writer**: line-oriented record writer
//! - **file**: atomic file output and default file naming

mod assembler;
mod error;
mod file;
mod writer;

pub use assembler::{
    Assembly, FILLER_BLOCK_LEN, SsimDataset, assemble, convert, dataset_scope, default_file_name,
};
pub use error::{OutputError, Result};
pub use file::{write_dataset, write_dataset_to_dir};
pub use writer::SsimWriter;
