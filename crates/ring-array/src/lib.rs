/*! A fixed-capacity double-ended ring array for buffering pending items
 with bounded memory, e.g. queued work inside a connection or event
 management loop. The capacity is rounded up to the next power of two so
 index wraparound is a single bitmask operation. Besides plain push/pop
 at both ends, the ring supports conditional eviction of a boundary
 element through a removal predicate fixed at construction (see
 [`RingArray::remove`]).

 The crate is `no_std`; only `alloc` is required for the backing storage.
*/

#![no_std]

extern crate alloc;

mod devlog;
mod ring;
pub use ring::*;

pub use log as __log;
