//! Leaky memory runtime for vo-generated code.
//!
//! Generated, ahead-of-time-compiled programs are short-lived batch jobs, so
//! this runtime allocates every string once and never frees it. Process exit
//! reclaims everything. The public surface makes that discipline explicit:
//! there is no release operation anywhere, and [`Str`] handles are `Copy`
//! with no destructor.

// A build must pick exactly one ownership discipline. The counted heap is a
// separate runtime with its own contract; refusing the feature here keeps the
// two from ever linking into the same binary.
#[cfg(feature = "counted-heap")]
compile_error!("the counted-heap runtime is not available; build with the default leaky heap");

mod buf;
mod heap;
mod str;

pub use buf::Buf;
pub use heap::Heap;
pub use self::str::Str;
