//! Pure computational engines backing the marketplace. Both engines are
//! stateless, synchronous, and never fail: malformed input degrades to a
//! zero price or score rather than an error, because they run inside
//! interactive form-update paths.

pub mod pricing;
pub mod scoring;
