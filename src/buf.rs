pub mod erased_vec;
pub mod fixed_buf;

pub use erased_vec::ErasedVec;
pub use fixed_buf::FixedBuf;
